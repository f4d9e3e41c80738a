//! HTTP client for the Punk beer catalog.
//!
//! Every endpoint answers with a JSON array of beers, even the single-beer
//! ones. Pagination is server-side via `page` / `per_page`.

use std::sync::Arc;

use barlie_core::Beer;
use chrono::NaiveDate;
use reqwest::Url;

use super::normalize::normalize_beer;
use super::types::PunkBeer;
use crate::catalog::BeerCatalog;
use crate::dispatch::{Dispatcher, HttpSettings};
use crate::error::CatalogError;
use crate::page::{format_bound, Bounds, Page};
use crate::rate_limit::RequestQuota;

pub const DEFAULT_BASE_URL: &str = "https://api.punkapi.com/v2";

/// Numeric attributes the catalog can filter on with `_gt` / `_lt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAttribute {
    Abv,
    Ibu,
    Ebc,
}

impl RangeAttribute {
    fn query_keys(self) -> (&'static str, &'static str) {
        match self {
            RangeAttribute::Abv => ("abv_gt", "abv_lt"),
            RangeAttribute::Ibu => ("ibu_gt", "ibu_lt"),
            RangeAttribute::Ebc => ("ebc_gt", "ebc_lt"),
        }
    }
}

/// First-brewed filter. Only the month and year of the date are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewDate {
    Before(NaiveDate),
    After(NaiveDate),
}

impl BrewDate {
    fn query_pair(self) -> (&'static str, String) {
        match self {
            BrewDate::Before(date) => ("brewed_before", date.format("%m-%Y").to_string()),
            BrewDate::After(date) => ("brewed_after", date.format("%m-%Y").to_string()),
        }
    }
}

/// Client for the Punk catalog.
///
/// Use [`PunkClient::new`] with [`DEFAULT_BASE_URL`] for production or a mock
/// server URI in tests.
#[derive(Debug)]
pub struct PunkClient {
    dispatcher: Dispatcher,
}

impl PunkClient {
    /// # Errors
    ///
    /// See [`Dispatcher::new`].
    pub fn new(
        base_url: &str,
        settings: &HttpSettings,
        quota: Arc<RequestQuota>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            dispatcher: Dispatcher::new(base_url, settings, quota)?,
        })
    }

    #[must_use]
    pub fn quota(&self) -> &RequestQuota {
        self.dispatcher.quota()
    }

    /// Builds `/beers?page=&per_page=` followed by `filters` in order.
    pub(crate) fn beers_url(
        &self,
        page: Page,
        filters: &[(&str, String)],
    ) -> Result<Url, CatalogError> {
        let mut query = vec![
            ("page", page.number().to_string()),
            ("per_page", page.size().to_string()),
        ];
        query.extend(filters.iter().map(|(k, v)| (*k, v.clone())));
        self.dispatcher.endpoint(&["beers"], &query)
    }

    async fn fetch_list(&self, url: Url, context: &str) -> Result<Vec<Beer>, CatalogError> {
        let raw: Vec<PunkBeer> = self.dispatcher.get_json(url, context).await?;
        Ok(raw.iter().map(normalize_beer).collect())
    }

    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher.
    pub async fn fetch_beers(&self, page: Page) -> Result<Vec<Beer>, CatalogError> {
        let url = self.beers_url(page, &[])?;
        self.fetch_list(url, "fetch_beers").await
    }

    /// Name search. A blank `query` sends no `beer_name` filter.
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher.
    pub async fn search_beers(&self, query: &str, page: Page) -> Result<Vec<Beer>, CatalogError> {
        let query = query.trim();
        let filters = if query.is_empty() {
            Vec::new()
        } else {
            vec![("beer_name", query.to_owned())]
        };
        let url = self.beers_url(page, &filters)?;
        self.fetch_list(url, &format!("search_beers(query={query})"))
            .await
    }

    /// Returns `Ok(None)` when the catalog has no beer with this id, including
    /// when it answers 404.
    ///
    /// # Errors
    ///
    /// Any other [`CatalogError`] from the dispatcher.
    pub async fn get_beer(&self, id: u64) -> Result<Option<Beer>, CatalogError> {
        let segment = id.to_string();
        let url = self.dispatcher.endpoint(&["beers", segment.as_str()], &[])?;
        match self.fetch_list(url, &format!("get_beer(id={id})")).await {
            Ok(beers) => Ok(beers.into_iter().next()),
            Err(CatalogError::ServerError { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher.
    pub async fn random_beer(&self) -> Result<Option<Beer>, CatalogError> {
        let url = self.dispatcher.endpoint(&["beers", "random"], &[])?;
        let beers = self.fetch_list(url, "random_beer").await?;
        Ok(beers.into_iter().next())
    }

    /// Beers strictly inside `bounds` on `attribute`. A missing bound sends
    /// no parameter for that side.
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher.
    pub async fn filter_by_range(
        &self,
        attribute: RangeAttribute,
        bounds: Bounds,
        page: Page,
    ) -> Result<Vec<Beer>, CatalogError> {
        let (gt, lt) = attribute.query_keys();
        let mut filters = Vec::with_capacity(2);
        if let Some(min) = bounds.min {
            filters.push((gt, format_bound(min)));
        }
        if let Some(max) = bounds.max {
            filters.push((lt, format_bound(max)));
        }
        let url = self.beers_url(page, &filters)?;
        self.fetch_list(url, &format!("filter_by_range({attribute:?})"))
            .await
    }

    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher.
    pub async fn brewed(&self, when: BrewDate, page: Page) -> Result<Vec<Beer>, CatalogError> {
        let url = self.beers_url(page, &[when.query_pair()])?;
        self.fetch_list(url, "brewed").await
    }

    /// See [`BeerCatalog::popular`].
    ///
    /// # Errors
    ///
    /// The first band failure.
    pub async fn popular_beers(&self) -> Result<Vec<Beer>, CatalogError> {
        BeerCatalog::popular(self).await
    }

    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher.
    pub async fn light_beers(&self) -> Result<Vec<Beer>, CatalogError> {
        BeerCatalog::light(self).await
    }

    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher.
    pub async fn strong_beers(&self) -> Result<Vec<Beer>, CatalogError> {
        BeerCatalog::strong(self).await
    }
}

impl BeerCatalog for PunkClient {
    async fn fetch_page(&self, page: Page) -> Result<Vec<Beer>, CatalogError> {
        self.fetch_beers(page).await
    }

    async fn search(&self, query: &str, page: Page) -> Result<Vec<Beer>, CatalogError> {
        self.search_beers(query, page).await
    }

    async fn filter_by_abv(&self, bounds: Bounds, page: Page) -> Result<Vec<Beer>, CatalogError> {
        self.filter_by_range(RangeAttribute::Abv, bounds, page)
            .await
    }

    async fn get_beer(&self, id: &str) -> Result<Option<Beer>, CatalogError> {
        let numeric = id
            .trim()
            .parse::<u64>()
            .map_err(|e| CatalogError::InvalidUrl {
                url: format!("beers/{id}"),
                reason: format!("beer id must be numeric: {e}"),
            })?;
        PunkClient::get_beer(self, numeric).await
    }

    async fn random(&self) -> Result<Option<Beer>, CatalogError> {
        self.random_beer().await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
