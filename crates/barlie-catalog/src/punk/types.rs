//! Punk API response types.
//!
//! Every endpoint returns a bare JSON array of [`PunkBeer`] records, including
//! `/beers/{id}` and `/beers/random`. Brewing metadata is decoded for callers
//! that want it but is not carried into the normalized `Beer`.

use serde::Deserialize;

/// A single beer record as served by the Punk API.
#[derive(Debug, Clone, Deserialize)]
pub struct PunkBeer {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Month and year first brewed, e.g. `"09/2007"`.
    #[serde(default)]
    pub first_brewed: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub abv: Option<f64>,
    #[serde(default)]
    pub ibu: Option<f64>,
    #[serde(default)]
    pub target_fg: Option<f64>,
    #[serde(default)]
    pub target_og: Option<f64>,
    #[serde(default)]
    pub ebc: Option<f64>,
    #[serde(default)]
    pub srm: Option<f64>,
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub attenuation_level: Option<f64>,
    #[serde(default)]
    pub volume: Option<Measure>,
    #[serde(default)]
    pub boil_volume: Option<Measure>,
    #[serde(default)]
    pub method: Option<Method>,
    #[serde(default)]
    pub ingredients: Option<Ingredients>,
    #[serde(default)]
    pub food_pairing: Vec<String>,
    #[serde(default)]
    pub brewers_tips: Option<String>,
    /// Free text such as `"Sam Mason <samjbmason>"`.
    #[serde(default)]
    pub contributed_by: Option<String>,
}

/// A quantity with its unit, used for volumes, temperatures and weights.
#[derive(Debug, Clone, Deserialize)]
pub struct Measure {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    #[serde(default)]
    pub mash_temp: Vec<MashTemp>,
    #[serde(default)]
    pub fermentation: Option<Fermentation>,
    #[serde(default)]
    pub twist: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MashTemp {
    pub temp: Measure,
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fermentation {
    pub temp: Measure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ingredients {
    #[serde(default)]
    pub malt: Vec<Malt>,
    #[serde(default)]
    pub hops: Vec<Hop>,
    #[serde(default)]
    pub yeast: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Malt {
    pub name: String,
    pub amount: Measure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hop {
    pub name: String,
    pub amount: Measure,
    /// When the hop goes in: `"start"`, `"middle"`, `"end"`, `"dry hop"`.
    #[serde(default)]
    pub add: String,
    /// `"bitter"`, `"flavour"` or `"aroma"`.
    #[serde(default)]
    pub attribute: String,
}
