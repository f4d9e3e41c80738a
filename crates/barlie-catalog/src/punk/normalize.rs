//! Conversion of Punk API records into normalized [`Beer`] values.

use barlie_core::{Beer, BeerColor, UNKNOWN_BREWERY};

use super::types::PunkBeer;

/// Takes the display name from a `contributed_by` string: everything before
/// the first `<`, trimmed. Falls back to [`UNKNOWN_BREWERY`] when that is
/// empty or the field is absent.
#[must_use]
pub fn extract_brewery(contributed_by: Option<&str>) -> String {
    contributed_by
        .and_then(|raw| raw.split('<').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(|| UNKNOWN_BREWERY.to_string(), str::to_string)
}

/// Converts a [`PunkBeer`] into a [`Beer`].
///
/// The Punk catalog has no style field, so the tagline is used as the style.
#[must_use]
pub fn normalize_beer(raw: &PunkBeer) -> Beer {
    Beer {
        id: raw.id.to_string(),
        name: raw.name.clone(),
        brewery: extract_brewery(raw.contributed_by.as_deref()),
        style: raw.tagline.clone(),
        abv: non_negative(raw.abv),
        ibu: whole_ibu(raw.ibu),
        color: BeerColor::from_ebc(raw.ebc),
        description: raw.description.clone(),
        image_url: raw.image_url.clone(),
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

// Fractional IBU values are truncated toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_ibu(value: Option<f64>) -> u32 {
    let ibu = non_negative(value).trunc();
    if ibu >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        ibu as u32
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
