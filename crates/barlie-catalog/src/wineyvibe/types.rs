//! WineyVibe API response types.
//!
//! List endpoints wrap their payload in [`WineyVibeEnvelope`]; the details
//! endpoint returns a bare [`WineyVibeBeer`]. The provider omits fields freely,
//! so everything is optional.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WineyVibeEnvelope {
    #[serde(default)]
    pub data: Option<Vec<WineyVibeBeer>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WineyVibeBeer {
    pub id: Option<String>,
    pub name: Option<String>,
    pub brewery: Option<String>,
    pub style: Option<String>,
    pub abv: Option<f64>,
    pub ibu: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
    pub availability: Option<String>,
    pub price: Option<f64>,
    /// Color label such as `"Golden"` or `"Dark Brown"`.
    pub color: Option<String>,
    pub bitterness: Option<String>,
    pub sweetness: Option<String>,
    pub body: Option<String>,
    pub carbonation: Option<String>,
    pub serving_temperature: Option<String>,
    pub food_pairings: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub awards: Option<Vec<String>>,
    pub seasonality: Option<String>,
    pub origin: Option<String>,
    pub year: Option<i32>,
}
