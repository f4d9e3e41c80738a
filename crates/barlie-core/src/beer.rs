use serde::{Deserialize, Serialize};

use crate::BeerColor;

/// Brewery name used when a provider does not attribute a beer.
pub const UNKNOWN_BREWERY: &str = "Unknown Brewery";

/// A beer normalized from any provider catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    /// Provider-scoped identifier. Opaque to everything but the provider
    /// client that produced it.
    pub id: String,
    pub name: String,
    pub brewery: String,
    /// Free-text style. For the Punk catalog this is the marketing tagline.
    pub style: String,
    /// Alcohol by volume in percent, never negative.
    pub abv: f64,
    /// International Bitterness Units; `0` when the provider does not know.
    pub ibu: u32,
    pub color: BeerColor,
    pub description: String,
    pub image_url: Option<String>,
}

impl Beer {
    /// Short label shown under a beer's name, e.g. `"IPA • 5.6%"`.
    #[must_use]
    pub fn style_and_abv(&self) -> String {
        format!("{} • {:.1}%", self.style, self.abv)
    }
}
