//! View-facing browsing state over a [`BeerCatalog`].
//!
//! [`BeerBrowser`] owns the current result list and publishes every change as
//! a [`BrowserSnapshot`] on a `watch` channel. A failed operation records its
//! message and leaves the list exactly as it was.

use barlie_core::Beer;
use tokio::sync::watch;

use crate::catalog::BeerCatalog;
use crate::error::CatalogError;
use crate::page::{Bounds, Page};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowsePhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed(String),
}

/// Everything a view needs to render the browse screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserSnapshot {
    pub beers: Vec<Beer>,
    pub phase: BrowsePhase,
    pub error: Option<String>,
    /// Whether another page may exist after the last one fetched.
    pub has_more: bool,
    /// Page number the next `load_more` will request.
    pub next_page: u32,
}

impl Default for BrowserSnapshot {
    fn default() -> Self {
        Self {
            beers: Vec::new(),
            phase: BrowsePhase::Idle,
            error: None,
            has_more: true,
            next_page: 1,
        }
    }
}

impl BrowserSnapshot {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == BrowsePhase::Loading
    }

    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.is_loading() && self.has_more
    }
}

pub struct BeerBrowser<C> {
    catalog: C,
    page_size: u32,
    state: watch::Sender<BrowserSnapshot>,
}

impl<C: BeerCatalog> BeerBrowser<C> {
    #[must_use]
    pub fn new(catalog: C, page_size: u32) -> Self {
        let (state, _) = watch::channel(BrowserSnapshot::default());
        Self {
            catalog,
            page_size: page_size.max(1),
            state,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// A receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BrowserSnapshot> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> BrowserSnapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.state.borrow().can_load_more()
    }

    /// Looks up a beer in the current list.
    #[must_use]
    pub fn beer(&self, id: &str) -> Option<Beer> {
        self.state.borrow().beers.iter().find(|b| b.id == id).cloned()
    }

    /// Fetches the first page and replaces the list.
    pub async fn load(&self) {
        self.begin("load");
        let page = Page::first(self.page_size);
        match self.catalog.fetch_page(page).await {
            Ok(beers) => {
                let has_more = self.is_full_page(&beers);
                self.state.send_modify(|s| {
                    s.beers = beers;
                    s.has_more = has_more;
                    s.next_page = page.number() + 1;
                    s.phase = settled_phase(&s.beers);
                });
            }
            Err(e) => self.fail("load", &e),
        }
    }

    /// Fetches the next page and appends it. Does nothing while another
    /// operation is loading or when the last page was short.
    pub async fn load_more(&self) {
        let mut page = None;
        let size = self.page_size;
        self.state.send_if_modified(|s| {
            if !s.can_load_more() {
                return false;
            }
            s.phase = BrowsePhase::Loading;
            s.error = None;
            page = Some(Page::new(s.next_page, size));
            true
        });
        let Some(page) = page else {
            tracing::debug!("load_more skipped");
            return;
        };

        tracing::debug!(page = page.number(), "loading next page");
        match self.catalog.fetch_page(page).await {
            Ok(beers) => {
                let has_more = self.is_full_page(&beers);
                self.state.send_modify(|s| {
                    s.beers.extend(beers);
                    s.has_more = has_more;
                    s.next_page = page.number() + 1;
                    s.phase = settled_phase(&s.beers);
                });
            }
            Err(e) => self.fail("load_more", &e),
        }
    }

    /// Name search. A blank query reloads the first page instead.
    pub async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            self.load().await;
            return;
        }
        self.begin("search");
        let result = self
            .catalog
            .search(query, Page::first(self.page_size))
            .await;
        self.finish_replace("search", result);
    }

    pub async fn filter_by_abv(&self, bounds: Bounds) {
        self.begin("filter_by_abv");
        let result = self
            .catalog
            .filter_by_abv(bounds, Page::first(self.page_size))
            .await;
        self.finish_replace("filter_by_abv", result);
    }

    pub async fn popular(&self) {
        self.begin("popular");
        let result = self.catalog.popular().await;
        self.finish_replace("popular", result);
    }

    pub async fn light(&self) {
        self.begin("light");
        let result = self.catalog.light().await;
        self.finish_replace("light", result);
    }

    pub async fn strong(&self) {
        self.begin("strong");
        let result = self.catalog.strong().await;
        self.finish_replace("strong", result);
    }

    /// A random beer. The list is left alone; a failure only records the
    /// error message.
    pub async fn random(&self) -> Option<Beer> {
        match self.catalog.random().await {
            Ok(beer) => beer,
            Err(e) => {
                tracing::warn!(error = %e, "random beer failed");
                let message = e.to_string();
                self.state.send_modify(|s| s.error = Some(message));
                None
            }
        }
    }

    pub async fn refresh(&self) {
        self.load().await;
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| {
            if s.error.is_none() && !matches!(s.phase, BrowsePhase::Failed(_)) {
                return false;
            }
            s.error = None;
            if matches!(s.phase, BrowsePhase::Failed(_)) {
                s.phase = settled_phase(&s.beers);
            }
            true
        });
    }

    fn is_full_page(&self, beers: &[Beer]) -> bool {
        u32::try_from(beers.len()).is_ok_and(|n| n == self.page_size)
    }

    fn begin(&self, operation: &str) {
        tracing::debug!(operation, "browser operation started");
        self.state.send_modify(|s| {
            s.phase = BrowsePhase::Loading;
            s.error = None;
        });
    }

    fn finish_replace(&self, operation: &str, result: Result<Vec<Beer>, CatalogError>) {
        match result {
            Ok(beers) => {
                tracing::debug!(operation, count = beers.len(), "browser list replaced");
                self.state.send_modify(|s| {
                    s.beers = beers;
                    s.has_more = false;
                    s.phase = settled_phase(&s.beers);
                });
            }
            Err(e) => self.fail(operation, &e),
        }
    }

    fn fail(&self, operation: &str, error: &CatalogError) {
        tracing::warn!(operation, error = %error, "browser operation failed");
        let message = error.to_string();
        self.state.send_modify(|s| {
            s.phase = BrowsePhase::Failed(message.clone());
            s.error = Some(message);
        });
    }
}

fn settled_phase(beers: &[Beer]) -> BrowsePhase {
    if beers.is_empty() {
        BrowsePhase::Empty
    } else {
        BrowsePhase::Loaded
    }
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;
