// SPDX-License-Identifier: MPL-2.0
//! Card marker domain type.

/// Tri-state value attached to every card.
///
/// Clicking a card advances it through [`Marker::next`]:
/// `Neutral → Eliminated → Confirmed → Neutral`.
///
/// # Example
///
/// ```
/// use guess_board::board::Marker;
///
/// let marker = Marker::default();
/// assert_eq!(marker, Marker::Neutral);
/// assert_eq!(marker.next().next().next(), Marker::Neutral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    /// Still in play.
    #[default]
    Neutral,
    /// Ruled out.
    Eliminated,
    /// Kept as a candidate.
    Confirmed,
}

impl Marker {
    /// All markers in cycle order.
    pub const ALL: [Marker; 3] = [Marker::Neutral, Marker::Eliminated, Marker::Confirmed];

    /// Returns the marker that follows this one in the click cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Marker::Neutral => Marker::Eliminated,
            Marker::Eliminated => Marker::Confirmed,
            Marker::Confirmed => Marker::Neutral,
        }
    }

    /// Returns the i18n key of this marker's count label (takes `$count`).
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Marker::Neutral => "marker-neutral",
            Marker::Eliminated => "marker-eliminated",
            Marker::Confirmed => "marker-confirmed",
        }
    }
}
