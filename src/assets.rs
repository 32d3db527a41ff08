// SPDX-License-Identifier: MPL-2.0
//! Character roster loading.
//!
//! Scans a directory once at startup for portrait images and turns each file
//! into a [`Character`] named after its file stem. The roster never changes
//! afterwards.
//!
//! Images are not decoded here: the returned handles point at the files and
//! Iced decodes them lazily on first draw.

use crate::board::Character;
use crate::error::{AssetError, Result};
use iced::widget::image::Handle;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Portrait file extensions, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Returns true if `path` has a supported portrait extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Derives the character name from a portrait path (its file stem).
pub fn character_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
}

/// Lists the supported portrait files of `directory`, sorted by name
/// (case-insensitive, ties broken by the full path).
pub fn list_portraits(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(AssetError::NotADirectory(directory.display().to_string()).into());
    }

    let mut portraits = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            portraits.push(path);
        }
    }

    portraits.sort_by_cached_key(|path| {
        let name = character_name(path).unwrap_or_default().to_lowercase();
        (name, path.clone())
    });

    Ok(portraits)
}

/// Loads the roster from `directory`.
///
/// Two files with the same stem (`bob.png`, `bob.jpg`) produce one character;
/// the first in sort order wins. An existing directory with no portraits is
/// reported as [`AssetError::Empty`].
pub fn load_characters(directory: &Path) -> Result<Vec<Character>> {
    let portraits = list_portraits(directory)?;

    let mut seen = HashSet::new();
    let mut characters = Vec::with_capacity(portraits.len());
    for path in portraits {
        let Some(name) = character_name(&path) else {
            continue;
        };
        if !seen.insert(name.clone()) {
            tracing::warn!(name = %name, path = %path.display(), "duplicate portrait skipped");
            continue;
        }
        characters.push(Character::new(name, Handle::from_path(path)));
    }

    if characters.is_empty() {
        return Err(AssetError::Empty(directory.display().to_string()).into());
    }

    tracing::info!(
        count = characters.len(),
        directory = %directory.display(),
        "characters loaded"
    );
    Ok(characters)
}
