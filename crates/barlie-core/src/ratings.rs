//! Local rating storage.
//!
//! Ratings live in one JSON object keyed by beer id, stored in a file named
//! after [`RATINGS_STORAGE_KEY`] inside the data directory:
//!
//! ```json
//! { "192": { "rating": 4, "review": "Hoppy.", "date": "2026-10-18T12:00:00Z" } }
//! ```
//!
//! The file is read once when the store is opened and rewritten wholesale on
//! every save.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Storage key the rating blob is saved under.
pub const RATINGS_STORAGE_KEY: &str = "barlie_user_ratings";

/// Ratings at or above this many stars count as favorites.
const FAVORITE_MIN_STARS: u8 = 4;

/// A user's rating of one beer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Star count, `1..=5`.
    pub rating: u8,
    #[serde(default)]
    pub review: String,
    pub date: DateTime<Utc>,
}

impl Rating {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] if `stars` is outside `1..=5`.
    pub fn new(
        stars: u8,
        review: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if !(1..=5).contains(&stars) {
            return Err(CoreError::InvalidRating(stars));
        }
        Ok(Self {
            rating: stars,
            review: review.into(),
            date,
        })
    }
}

/// Aggregates shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingStats {
    pub total: usize,
    pub average: f64,
}

impl RatingStats {
    /// Average formatted with one decimal, `"0.0"` when nothing is rated.
    #[must_use]
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

/// File-backed map of beer id to [`Rating`].
#[derive(Debug)]
pub struct RatingStore {
    path: PathBuf,
    ratings: BTreeMap<String, Rating>,
}

impl RatingStore {
    /// Opens the store kept in `data_dir`. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RatingsIo`] if the file exists but cannot be read,
    /// or [`CoreError::RatingsParse`] if it is not a JSON object of ratings.
    pub fn open(data_dir: &Path) -> Result<Self, CoreError> {
        Self::open_at(data_dir.join(format!("{RATINGS_STORAGE_KEY}.json")))
    }

    /// Opens the store backed by the exact file `path`.
    ///
    /// # Errors
    ///
    /// See [`RatingStore::open`].
    pub fn open_at(path: PathBuf) -> Result<Self, CoreError> {
        let ratings = match std::fs::read_to_string(&path) {
            Ok(content) => parse_ratings(&path, &content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(CoreError::RatingsIo {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        tracing::debug!(path = %path.display(), count = ratings.len(), "loaded ratings");
        Ok(Self { path, ratings })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get(&self, beer_id: &str) -> Option<&Rating> {
        self.ratings.get(beer_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rating)> {
        self.ratings.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Records (or replaces) the rating for `beer_id` and saves the store.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] for a star count outside `1..=5`
    /// (nothing is written), or [`CoreError::RatingsIo`] if saving fails.
    pub fn rate(
        &mut self,
        beer_id: &str,
        stars: u8,
        review: &str,
    ) -> Result<&Rating, CoreError> {
        let rating = Rating::new(stars, review, Utc::now())?;
        let previous = self.ratings.insert(beer_id.to_owned(), rating);
        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.ratings.insert(beer_id.to_owned(), old),
                None => self.ratings.remove(beer_id),
            };
            return Err(e);
        }
        Ok(&self.ratings[beer_id])
    }

    /// Removes the rating for `beer_id`, saving only if something changed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RatingsIo`] if saving fails; the rating is kept.
    pub fn remove(&mut self, beer_id: &str) -> Result<bool, CoreError> {
        let Some(old) = self.ratings.remove(beer_id) else {
            return Ok(false);
        };
        if let Err(e) = self.save() {
            self.ratings.insert(beer_id.to_owned(), old);
            return Err(e);
        }
        Ok(true)
    }

    /// Rewrites the whole blob, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RatingsIo`] if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), CoreError> {
        let io_err = |source: std::io::Error| CoreError::RatingsIo {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&self.ratings)
            .map_err(|e| io_err(std::io::Error::other(e)))?;
        std::fs::write(&self.path, body).map_err(io_err)?;
        tracing::debug!(
            path = %self.path.display(),
            count = self.ratings.len(),
            "saved ratings"
        );
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> RatingStats {
        let total = self.ratings.len();
        let sum: u32 = self.ratings.values().map(|r| u32::from(r.rating)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = if total == 0 {
            0.0
        } else {
            f64::from(sum) / total as f64
        };
        RatingStats { total, average }
    }

    /// Ids of beers rated four stars or more.
    #[must_use]
    pub fn favorites(&self) -> Vec<&str> {
        self.ratings
            .iter()
            .filter(|(_, r)| r.rating >= FAVORITE_MIN_STARS)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

/// Parses the stored blob, dropping entries whose star count is out of range.
fn parse_ratings(path: &Path, content: &str) -> Result<BTreeMap<String, Rating>, CoreError> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let mut ratings: BTreeMap<String, Rating> =
        serde_json::from_str(content).map_err(|e| CoreError::RatingsParse {
            path: path.display().to_string(),
            source: e,
        })?;
    ratings.retain(|beer_id, r| {
        let valid = (1..=5).contains(&r.rating);
        if !valid {
            tracing::warn!(
                beer_id = %beer_id,
                rating = r.rating,
                "dropping out-of-range stored rating"
            );
        }
        valid
    });
    Ok(ratings)
}

#[cfg(test)]
#[path = "ratings_test.rs"]
mod tests;
