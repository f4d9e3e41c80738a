//! The async contract shared by every beer-data provider.

use std::future::Future;

use barlie_core::Beer;
use rand::seq::SliceRandom;

use crate::error::CatalogError;
use crate::page::{Bounds, Page};

/// Most beers returned by [`BeerCatalog::popular`].
pub const POPULAR_LIMIT: usize = 20;

/// Abv bands sampled by [`BeerCatalog::popular`], as `(min, max, count)`.
pub const POPULAR_BANDS: [(f64, f64, u32); 3] = [(5.0, 7.0, 10), (6.0, 10.0, 10), (4.0, 6.0, 5)];

pub const LIGHT_BOUNDS: (f64, f64) = (0.0, 4.5);
pub const STRONG_BOUNDS: (f64, f64) = (7.0, 15.0);
pub const CURATED_COUNT: u32 = 25;

/// A source of normalized [`Beer`] records.
///
/// Implementations do not retry; errors surface to the caller unchanged.
pub trait BeerCatalog: Send + Sync {
    /// One page of the full catalog.
    fn fetch_page(
        &self,
        page: Page,
    ) -> impl Future<Output = Result<Vec<Beer>, CatalogError>> + Send;

    /// Beers whose name matches `query`. A blank query applies no filter.
    fn search(
        &self,
        query: &str,
        page: Page,
    ) -> impl Future<Output = Result<Vec<Beer>, CatalogError>> + Send;

    /// Beers with `bounds.min < abv < bounds.max`.
    fn filter_by_abv(
        &self,
        bounds: Bounds,
        page: Page,
    ) -> impl Future<Output = Result<Vec<Beer>, CatalogError>> + Send;

    /// `Ok(None)` when the provider has no beer with this id.
    fn get_beer(&self, id: &str) -> impl Future<Output = Result<Option<Beer>, CatalogError>> + Send;

    fn random(&self) -> impl Future<Output = Result<Option<Beer>, CatalogError>> + Send;

    /// A shuffled sample drawn from three overlapping abv bands.
    ///
    /// The band queries run concurrently and the first failure fails the
    /// whole call.
    fn popular(&self) -> impl Future<Output = Result<Vec<Beer>, CatalogError>> + Send {
        async move {
            let [(a_min, a_max, a_n), (b_min, b_max, b_n), (c_min, c_max, c_n)] = POPULAR_BANDS;
            let (first, second, third) = tokio::try_join!(
                self.filter_by_abv(Bounds::between(a_min, a_max), Page::first(a_n)),
                self.filter_by_abv(Bounds::between(b_min, b_max), Page::first(b_n)),
                self.filter_by_abv(Bounds::between(c_min, c_max), Page::first(c_n)),
            )?;

            let mut beers = first;
            beers.extend(second);
            beers.extend(third);
            beers.shuffle(&mut rand::rng());
            beers.truncate(POPULAR_LIMIT);
            Ok(beers)
        }
    }

    fn light(&self) -> impl Future<Output = Result<Vec<Beer>, CatalogError>> + Send {
        self.filter_by_abv(
            Bounds::between(LIGHT_BOUNDS.0, LIGHT_BOUNDS.1),
            Page::first(CURATED_COUNT),
        )
    }

    fn strong(&self) -> impl Future<Output = Result<Vec<Beer>, CatalogError>> + Send {
        self.filter_by_abv(
            Bounds::between(STRONG_BOUNDS.0, STRONG_BOUNDS.1),
            Page::first(CURATED_COUNT),
        )
    }
}
