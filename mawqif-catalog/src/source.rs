use crate::site::{Site, SiteId};
use async_trait::async_trait;

/// Catalog fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request timed out")]
    Timeout,

    #[error("catalog request failed: {0}")]
    Network(String),

    #[error("unexpected catalog response shape: {0}")]
    Format(String),

    #[error("site not found: {0}")]
    NotFound(String),
}

/// Data source for the site catalog.
///
/// Selected at construction time: the HTTP-backed implementation lives in
/// mawqif-client, the fixture one below.
#[async_trait]
pub trait SiteSource: Send + Sync {
    /// All bookable sites.
    async fn fetch_sites(&self) -> Result<Vec<Site>, CatalogError>;

    /// One site by id.
    async fn fetch_site(&self, id: &SiteId) -> Result<Site, CatalogError>;
}

/// In-memory site source backed by explicit fixture data.
pub struct FixtureSiteSource {
    sites: Vec<Site>,
}

impl FixtureSiteSource {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }
}

impl Default for FixtureSiteSource {
    fn default() -> Self {
        Self::new(fixture_sites())
    }
}

#[async_trait]
impl SiteSource for FixtureSiteSource {
    async fn fetch_sites(&self) -> Result<Vec<Site>, CatalogError> {
        Ok(self.sites.clone())
    }

    async fn fetch_site(&self, id: &SiteId) -> Result<Site, CatalogError> {
        self.sites
            .iter()
            .find(|site| &site.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

/// Default fixture catalog, matching the sites the backend seeds in its
/// demo environment.
pub fn fixture_sites() -> Vec<Site> {
    fn site(id: &str, name: &str, name_ar: &str, price: f64, slots: u32, location: &str) -> Site {
        Site {
            id: SiteId::from(id),
            name: name.to_string(),
            name_ar: name_ar.to_string(),
            price_per_hour: price,
            available_slots: slots,
            location: Some(location.to_string()),
        }
    }

    vec![
        site("1", "Downtown Parking", "مواقف وسط المدينة", 10.0, 50, "Downtown District"),
        site("2", "Airport Parking", "مواقف المطار", 15.0, 100, "King Khalid International Airport"),
        site("3", "Mall Parking", "مواقف المول", 8.0, 200, "Riyadh Park Mall"),
        site("4", "Business District", "مواقف حي الأعمال", 12.0, 75, "King Abdullah Financial District"),
        site("5", "Stadium Parking", "مواقف الملعب", 20.0, 300, "King Fahd International Stadium"),
    ]
}
