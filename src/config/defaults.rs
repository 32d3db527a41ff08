// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Board**: Grid layout
//! - **Hold**: Hold-to-clear threshold and progress sampling
//! - **Preview**: Preview modal transition timing

// ==========================================================================
// Board Defaults
// ==========================================================================

/// Default number of cards per grid row.
pub const DEFAULT_COLUMNS: u16 = 5;

/// Minimum number of cards per grid row.
pub const MIN_COLUMNS: u16 = 1;

/// Maximum number of cards per grid row.
pub const MAX_COLUMNS: u16 = 12;

// ==========================================================================
// Hold-to-Clear Defaults
// ==========================================================================

/// How long the clear control must be held before the board resets.
pub const DEFAULT_CLEAR_HOLD_MS: u64 = 1000;

/// Shortest allowed hold. Below this a click would almost clear the board.
pub const MIN_CLEAR_HOLD_MS: u64 = 200;

/// Longest allowed hold.
pub const MAX_CLEAR_HOLD_MS: u64 = 10_000;

/// Interval between hold progress samples.
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 50;

/// Minimum progress sampling interval.
pub const MIN_PROGRESS_INTERVAL_MS: u64 = 10;

/// Maximum progress sampling interval.
pub const MAX_PROGRESS_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Duration of the preview modal fade in/out.
pub const DEFAULT_PREVIEW_TRANSITION_MS: u64 = 200;

/// Longest allowed preview transition.
pub const MAX_PREVIEW_TRANSITION_MS: u64 = 2000;

/// Frame interval used to drive modal transitions (~60 fps).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_COLUMNS > 0);
    assert!(MAX_COLUMNS >= MIN_COLUMNS);
    assert!(DEFAULT_COLUMNS >= MIN_COLUMNS);
    assert!(DEFAULT_COLUMNS <= MAX_COLUMNS);

    assert!(MIN_CLEAR_HOLD_MS > 0);
    assert!(MAX_CLEAR_HOLD_MS >= MIN_CLEAR_HOLD_MS);
    assert!(DEFAULT_CLEAR_HOLD_MS >= MIN_CLEAR_HOLD_MS);
    assert!(DEFAULT_CLEAR_HOLD_MS <= MAX_CLEAR_HOLD_MS);

    assert!(MIN_PROGRESS_INTERVAL_MS > 0);
    assert!(MAX_PROGRESS_INTERVAL_MS >= MIN_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS >= MIN_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS <= MAX_PROGRESS_INTERVAL_MS);
    // Sampling must be finer than the hold itself to show any progress.
    assert!(MAX_PROGRESS_INTERVAL_MS < MIN_CLEAR_HOLD_MS * 3);

    assert!(DEFAULT_PREVIEW_TRANSITION_MS <= MAX_PREVIEW_TRANSITION_MS);
    assert!(ANIMATION_FRAME_MS > 0);
};
