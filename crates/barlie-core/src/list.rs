//! Personal beer lists ("Next" to try, "Drank" already tried).
//!
//! All lists live in one JSON array stored in a file named after
//! [`LISTS_STORAGE_KEY`] inside the data directory. A missing file opens as
//! the two default lists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

/// Storage key the list blob is saved under.
pub const LISTS_STORAGE_KEY: &str = "barlie_user_lists";

/// Lists a fresh store starts with.
pub const DEFAULT_LISTS: [&str; 2] = ["Next", "Drank"];

/// A named personal list of beers, such as "Next" or "Drank".
///
/// Holds beer ids only; ids are kept in insertion order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerList {
    pub id: Uuid,
    pub name: String,
    pub beer_ids: Vec<String>,
}

impl BeerList {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            beer_ids: Vec::new(),
        }
    }

    /// Appends `beer_id`. Returns `false` if it was already on the list.
    pub fn add(&mut self, beer_id: &str) -> bool {
        if self.contains(beer_id) {
            return false;
        }
        self.beer_ids.push(beer_id.to_owned());
        true
    }

    /// Removes `beer_id`. Returns `false` if it was not on the list.
    pub fn remove(&mut self, beer_id: &str) -> bool {
        let before = self.beer_ids.len();
        self.beer_ids.retain(|id| id != beer_id);
        self.beer_ids.len() != before
    }

    #[must_use]
    pub fn contains(&self, beer_id: &str) -> bool {
        self.beer_ids.iter().any(|id| id == beer_id)
    }

    /// Moves `beer_id` from `self` onto `other`, e.g. from "Next" to "Drank".
    pub fn move_to(&mut self, other: &mut BeerList, beer_id: &str) -> bool {
        if !self.remove(beer_id) {
            return false;
        }
        other.add(beer_id);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.beer_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beer_ids.is_empty()
    }
}

/// File-backed collection of [`BeerList`]s, looked up by name ignoring case.
#[derive(Debug)]
pub struct BeerListStore {
    path: PathBuf,
    lists: Vec<BeerList>,
}

impl BeerListStore {
    /// Opens the store kept in `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ListsIo`] if the file exists but cannot be read,
    /// or [`CoreError::ListsParse`] if it is not a JSON array of lists.
    pub fn open(data_dir: &Path) -> Result<Self, CoreError> {
        Self::open_at(data_dir.join(format!("{LISTS_STORAGE_KEY}.json")))
    }

    /// Opens the store backed by the exact file `path`.
    ///
    /// # Errors
    ///
    /// See [`BeerListStore::open`].
    pub fn open_at(path: PathBuf) -> Result<Self, CoreError> {
        let lists = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => default_lists(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| CoreError::ListsParse {
                    path: path.display().to_string(),
                    source: e,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => default_lists(),
            Err(e) => {
                return Err(CoreError::ListsIo {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        Ok(Self { path, lists })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn lists(&self) -> &[BeerList] {
        &self.lists
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BeerList> {
        self.lists
            .iter()
            .find(|list| list.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Adds `beer_id` to the list called `name`, saving if it was not there.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownList`] for a name with no list, or
    /// [`CoreError::ListsIo`] if saving fails; the lists are then unchanged.
    pub fn add(&mut self, name: &str, beer_id: &str) -> Result<bool, CoreError> {
        let index = self.position(name)?;
        self.update(|lists| lists[index].add(beer_id))
    }

    /// Removes `beer_id` from the list called `name`.
    ///
    /// # Errors
    ///
    /// See [`BeerListStore::add`].
    pub fn remove(&mut self, name: &str, beer_id: &str) -> Result<bool, CoreError> {
        let index = self.position(name)?;
        self.update(|lists| lists[index].remove(beer_id))
    }

    /// Moves `beer_id` from list `from` onto list `to`. Returns `false` when
    /// the beer is not on `from` or both names pick the same list.
    ///
    /// # Errors
    ///
    /// See [`BeerListStore::add`].
    pub fn move_beer(&mut self, beer_id: &str, from: &str, to: &str) -> Result<bool, CoreError> {
        let from = self.position(from)?;
        let to = self.position(to)?;
        if from == to {
            return Ok(false);
        }
        self.update(|lists| {
            let (source, target) = if from < to {
                let (left, right) = lists.split_at_mut(to);
                (&mut left[from], &mut right[0])
            } else {
                let (left, right) = lists.split_at_mut(from);
                (&mut right[0], &mut left[to])
            };
            source.move_to(target, beer_id)
        })
    }

    /// Rewrites the whole blob, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ListsIo`] if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), CoreError> {
        let io_err = |source: std::io::Error| CoreError::ListsIo {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&self.lists)
            .map_err(|e| io_err(std::io::Error::other(e)))?;
        std::fs::write(&self.path, body).map_err(io_err)?;
        tracing::debug!(path = %self.path.display(), lists = self.lists.len(), "saved beer lists");
        Ok(())
    }

    fn position(&self, name: &str) -> Result<usize, CoreError> {
        self.lists
            .iter()
            .position(|list| list.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CoreError::UnknownList(name.to_owned()))
    }

    /// Applies `change`, saving when it reports a modification and rolling
    /// back if the save fails.
    fn update<F>(&mut self, change: F) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut [BeerList]) -> bool,
    {
        let before = self.lists.clone();
        if !change(&mut self.lists) {
            return Ok(false);
        }
        if let Err(e) = self.save() {
            self.lists = before;
            return Err(e);
        }
        Ok(true)
    }
}

fn default_lists() -> Vec<BeerList> {
    DEFAULT_LISTS.into_iter().map(BeerList::new).collect()
}
