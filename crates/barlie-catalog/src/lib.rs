pub mod browser;
pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod page;
pub mod punk;
pub mod rate_limit;
pub mod wineyvibe;

pub use browser::{BeerBrowser, BrowsePhase, BrowserSnapshot};
pub use catalog::BeerCatalog;
pub use dispatch::{Dispatcher, HttpSettings};
pub use error::CatalogError;
pub use page::{Bounds, Page};
pub use punk::{BrewDate, PunkClient, RangeAttribute};
pub use rate_limit::RequestQuota;
pub use wineyvibe::{WineyVibeClient, WineyVibeEndpoints};
