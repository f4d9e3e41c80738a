//! HTTP client for the WineyVibe beer catalog.
//!
//! The provider has no server-side paging or abv filter, so list operations
//! fetch the full list and page or filter it locally.

use std::sync::Arc;

use barlie_core::Beer;
use rand::seq::IndexedRandom;
use reqwest::Url;

use super::normalize::{normalize_beer, unwrap_envelope};
use super::types::{WineyVibeBeer, WineyVibeEnvelope};
use crate::catalog::BeerCatalog;
use crate::dispatch::{Dispatcher, HttpSettings};
use crate::error::CatalogError;
use crate::page::{Bounds, Page};
use crate::rate_limit::RequestQuota;

const ID_PLACEHOLDER: &str = "{id}";

/// Path templates relative to the base URL. `details` must contain `{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WineyVibeEndpoints {
    pub beers: String,
    pub details: String,
    pub search: String,
}

impl Default for WineyVibeEndpoints {
    fn default() -> Self {
        Self {
            beers: "/beers".to_string(),
            details: "/beers/{id}".to_string(),
            search: "/search".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct WineyVibeClient {
    dispatcher: Dispatcher,
    endpoints: WineyVibeEndpoints,
}

impl WineyVibeClient {
    /// Every request carries `Accept: application/json`, plus `x-api-key`
    /// when `api_key` is set, on top of any headers in `settings`.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::new`].
    pub fn new(
        base_url: &str,
        endpoints: WineyVibeEndpoints,
        api_key: Option<&str>,
        settings: &HttpSettings,
        quota: Arc<RequestQuota>,
    ) -> Result<Self, CatalogError> {
        let mut settings = settings.clone();
        settings
            .headers
            .push(("accept".to_string(), "application/json".to_string()));
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            settings
                .headers
                .push(("x-api-key".to_string(), key.to_string()));
        }

        Ok(Self {
            dispatcher: Dispatcher::new(base_url, &settings, quota)?,
            endpoints,
        })
    }

    #[must_use]
    pub fn quota(&self) -> &RequestQuota {
        self.dispatcher.quota()
    }

    /// Resolves a path template, substituting `id` for `{id}` inside each
    /// segment.
    pub(crate) fn path_url(
        &self,
        template: &str,
        id: Option<&str>,
        query: &[(&str, String)],
    ) -> Result<Url, CatalogError> {
        let segments: Vec<String> = template
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match id {
                Some(id) => s.replace(ID_PLACEHOLDER, id),
                None => s.to_string(),
            })
            .collect();
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
        self.dispatcher.endpoint(&refs, query)
    }

    async fn fetch_envelope(&self, url: Url, context: &str) -> Result<Vec<Beer>, CatalogError> {
        let envelope: WineyVibeEnvelope = self.dispatcher.get_json(url, context).await?;
        let raw = unwrap_envelope(envelope)?;
        Ok(raw.iter().map(normalize_beer).collect())
    }

    /// The whole catalog in provider order.
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`] from the dispatcher, or [`CatalogError::Api`]
    /// when the envelope reports failure.
    pub async fn fetch_all(&self) -> Result<Vec<Beer>, CatalogError> {
        let url = self.path_url(&self.endpoints.beers, None, &[])?;
        self.fetch_envelope(url, "fetch_all").await
    }

    /// # Errors
    ///
    /// See [`WineyVibeClient::fetch_all`].
    pub async fn fetch_beers(&self, page: Page) -> Result<Vec<Beer>, CatalogError> {
        Ok(page.slice(self.fetch_all().await?))
    }

    /// Sends `q=<query>` to the search path. A blank query falls back to the
    /// plain list.
    ///
    /// # Errors
    ///
    /// See [`WineyVibeClient::fetch_all`].
    pub async fn search_beers(&self, query: &str, page: Page) -> Result<Vec<Beer>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return self.fetch_beers(page).await;
        }
        let url = self.path_url(&self.endpoints.search, None, &[("q", query.to_owned())])?;
        let beers = self
            .fetch_envelope(url, &format!("search_beers(query={query})"))
            .await?;
        Ok(page.slice(beers))
    }

    /// Returns `Ok(None)` when the provider answers 404.
    ///
    /// # Errors
    ///
    /// Any other [`CatalogError`] from the dispatcher.
    pub async fn get_beer(&self, id: &str) -> Result<Option<Beer>, CatalogError> {
        let url = self.path_url(&self.endpoints.details, Some(id), &[])?;
        match self
            .dispatcher
            .get_json::<WineyVibeBeer>(url, &format!("get_beer(id={id})"))
            .await
        {
            Ok(raw) => Ok(Some(normalize_beer(&raw))),
            Err(CatalogError::ServerError { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// # Errors
    ///
    /// See [`WineyVibeClient::fetch_all`].
    pub async fn filter_by_abv(
        &self,
        bounds: Bounds,
        page: Page,
    ) -> Result<Vec<Beer>, CatalogError> {
        let beers: Vec<Beer> = self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|beer| bounds.contains(beer.abv))
            .collect();
        Ok(page.slice(beers))
    }

    /// A uniformly random beer from the full list; `None` when it is empty.
    ///
    /// # Errors
    ///
    /// See [`WineyVibeClient::fetch_all`].
    pub async fn random_beer(&self) -> Result<Option<Beer>, CatalogError> {
        let beers = self.fetch_all().await?;
        Ok(beers.choose(&mut rand::rng()).cloned())
    }
}

impl BeerCatalog for WineyVibeClient {
    async fn fetch_page(&self, page: Page) -> Result<Vec<Beer>, CatalogError> {
        self.fetch_beers(page).await
    }

    async fn search(&self, query: &str, page: Page) -> Result<Vec<Beer>, CatalogError> {
        self.search_beers(query, page).await
    }

    async fn filter_by_abv(&self, bounds: Bounds, page: Page) -> Result<Vec<Beer>, CatalogError> {
        WineyVibeClient::filter_by_abv(self, bounds, page).await
    }

    async fn get_beer(&self, id: &str) -> Result<Option<Beer>, CatalogError> {
        WineyVibeClient::get_beer(self, id).await
    }

    async fn random(&self) -> Result<Option<Beer>, CatalogError> {
        self.random_beer().await
    }
}
