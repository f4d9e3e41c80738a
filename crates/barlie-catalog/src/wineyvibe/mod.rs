//! Client for the WineyVibe beer catalog.

pub mod client;
pub mod normalize;
pub mod types;

pub use client::{WineyVibeClient, WineyVibeEndpoints};
pub use normalize::{normalize_beer, unwrap_envelope};
pub use types::{WineyVibeBeer, WineyVibeEnvelope};
