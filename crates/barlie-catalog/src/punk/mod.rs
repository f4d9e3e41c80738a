//! Client for the Punk beer catalog.

pub mod client;
pub mod normalize;
pub mod types;

pub use client::{BrewDate, PunkClient, RangeAttribute};
pub use normalize::{extract_brewery, normalize_beer};
pub use types::PunkBeer;
