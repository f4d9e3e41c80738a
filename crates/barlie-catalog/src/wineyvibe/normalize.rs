//! Conversion of WineyVibe records into normalized [`Beer`] values.

use barlie_core::{Beer, BeerColor, UNKNOWN_BREWERY};
use uuid::Uuid;

use super::types::{WineyVibeBeer, WineyVibeEnvelope};
use crate::error::CatalogError;

const UNKNOWN_NAME: &str = "Unknown Beer";
const UNKNOWN_STYLE: &str = "Unknown";

/// Converts a [`WineyVibeBeer`] into a [`Beer`].
///
/// Records without an id get a fresh random one, so the same record fetched
/// twice yields two different ids.
#[must_use]
pub fn normalize_beer(raw: &WineyVibeBeer) -> Beer {
    Beer {
        id: raw
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: text_or(raw.name.as_deref(), UNKNOWN_NAME),
        brewery: text_or(raw.brewery.as_deref(), UNKNOWN_BREWERY),
        style: text_or(raw.style.as_deref(), UNKNOWN_STYLE),
        abv: raw
            .abv
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
            .max(0.0),
        ibu: raw.ibu.and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        color: raw
            .color
            .as_deref()
            .map_or(BeerColor::Unknown, BeerColor::from_label),
        description: raw.description.clone().unwrap_or_default(),
        image_url: raw.image_url.clone(),
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    value.unwrap_or(fallback).to_string()
}

/// Opens a list envelope.
///
/// A missing `data` array is an empty list.
///
/// # Errors
///
/// Returns [`CatalogError::Api`] when the envelope reports `success: false`.
pub fn unwrap_envelope(envelope: WineyVibeEnvelope) -> Result<Vec<WineyVibeBeer>, CatalogError> {
    if envelope.success == Some(false) {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "request was not successful".to_string());
        return Err(CatalogError::Api(message));
    }
    Ok(envelope.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_takes_domain_defaults() {
        let beer = normalize_beer(&WineyVibeBeer::default());
        assert_eq!(beer.name, "Unknown Beer");
        assert_eq!(beer.brewery, "Unknown Brewery");
        assert_eq!(beer.style, "Unknown");
        assert!(beer.abv.abs() < f64::EPSILON);
        assert_eq!(beer.ibu, 0);
        assert_eq!(beer.color, BeerColor::Unknown);
        assert!(beer.description.is_empty());
        assert!(beer.image_url.is_none());
        assert!(Uuid::parse_str(&beer.id).is_ok(), "generated id: {}", beer.id);
    }

    #[test]
    fn present_fields_are_copied() {
        let raw: WineyVibeBeer = serde_json::from_value(serde_json::json!({
            "id": "wv-42",
            "name": "Hazy Daze",
            "brewery": "Cloud Brewing",
            "style": "New England IPA",
            "abv": 6.8,
            "ibu": 45,
            "description": "Juicy.",
            "image_url": "https://img.example/hazy.png",
            "color": "golden",
            "food_pairings": ["tacos"],
            "year": 2021
        }))
        .unwrap();
        let beer = normalize_beer(&raw);
        assert_eq!(beer.id, "wv-42");
        assert_eq!(beer.name, "Hazy Daze");
        assert_eq!(beer.brewery, "Cloud Brewing");
        assert_eq!(beer.style, "New England IPA");
        assert!((beer.abv - 6.8).abs() < f64::EPSILON);
        assert_eq!(beer.ibu, 45);
        assert_eq!(beer.color, BeerColor::Golden);
        assert_eq!(beer.image_url.as_deref(), Some("https://img.example/hazy.png"));
    }

    #[test]
    fn unrecognised_color_label_is_unknown() {
        let raw = WineyVibeBeer {
            color: Some("Hazy Orange".to_string()),
            ..WineyVibeBeer::default()
        };
        assert_eq!(normalize_beer(&raw).color, BeerColor::Unknown);
    }

    #[test]
    fn negative_ibu_becomes_zero() {
        let raw = WineyVibeBeer {
            ibu: Some(-5),
            abv: Some(-1.0),
            ..WineyVibeBeer::default()
        };
        let beer = normalize_beer(&raw);
        assert_eq!(beer.ibu, 0);
        assert!(beer.abv.abs() < f64::EPSILON);
    }

    #[test]
    fn failed_envelope_is_api_error() {
        let envelope = WineyVibeEnvelope {
            data: None,
            message: Some("invalid api key".to_string()),
            success: Some(false),
        };
        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(matches!(err, CatalogError::Api(ref m) if m == "invalid api key"));
    }

    #[test]
    fn envelope_without_data_is_empty() {
        let envelope = WineyVibeEnvelope {
            success: Some(true),
            ..WineyVibeEnvelope::default()
        };
        assert!(unwrap_envelope(envelope).unwrap().is_empty());
    }
}
