pub mod normalize;
pub mod pricing;
pub mod site;
pub mod source;

pub use pricing::{quote, PriceQuote};
pub use site::{Site, SiteId};
pub use source::{CatalogError, FixtureSiteSource, SiteSource};
