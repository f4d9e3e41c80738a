use std::fmt;

use serde::{Deserialize, Serialize};

/// Descriptive color bucket for a beer.
///
/// Provider catalogs report color either as an EBC number or as a free-text
/// label; both are folded onto this fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeerColor {
    Pale,
    Golden,
    Amber,
    Copper,
    Brown,
    #[serde(rename = "Dark Brown")]
    DarkBrown,
    Black,
    #[serde(rename = "Very Dark")]
    VeryDark,
    Unknown,
}

impl BeerColor {
    /// Upper-exclusive EBC thresholds, checked in order. Anything at or above
    /// the last threshold is [`BeerColor::VeryDark`].
    const EBC_BUCKETS: [(f64, BeerColor); 7] = [
        (4.0, BeerColor::Pale),
        (8.0, BeerColor::Golden),
        (12.0, BeerColor::Amber),
        (20.0, BeerColor::Copper),
        (30.0, BeerColor::Brown),
        (40.0, BeerColor::DarkBrown),
        (60.0, BeerColor::Black),
    ];

    /// Buckets an EBC color-intensity value. `None` maps to
    /// [`BeerColor::Unknown`]; a negative value or `NaN` has no bucket and
    /// falls through to [`BeerColor::VeryDark`].
    #[must_use]
    pub fn from_ebc(ebc: Option<f64>) -> Self {
        let Some(ebc) = ebc else {
            return BeerColor::Unknown;
        };
        if ebc < 0.0 {
            return BeerColor::VeryDark;
        }
        Self::EBC_BUCKETS
            .iter()
            .find(|(upper, _)| ebc < *upper)
            .map_or(BeerColor::VeryDark, |(_, color)| *color)
    }

    /// Matches a provider-supplied label (case-insensitive, surrounding
    /// whitespace ignored). Unrecognized labels map to [`BeerColor::Unknown`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .unwrap_or(BeerColor::Unknown)
    }

    pub const ALL: [BeerColor; 9] = [
        BeerColor::Pale,
        BeerColor::Golden,
        BeerColor::Amber,
        BeerColor::Copper,
        BeerColor::Brown,
        BeerColor::DarkBrown,
        BeerColor::Black,
        BeerColor::VeryDark,
        BeerColor::Unknown,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BeerColor::Pale => "Pale",
            BeerColor::Golden => "Golden",
            BeerColor::Amber => "Amber",
            BeerColor::Copper => "Copper",
            BeerColor::Brown => "Brown",
            BeerColor::DarkBrown => "Dark Brown",
            BeerColor::Black => "Black",
            BeerColor::VeryDark => "Very Dark",
            BeerColor::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BeerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
