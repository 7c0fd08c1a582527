mod session;

pub use session::{drive_debounced, SearchSession};

use crate::error::SearchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub full: String,
}

/// Destination autocomplete backend. A real deployment would point this at
/// a geocoding API; the built-in catalog keeps the wizard usable offline.
#[async_trait]
pub trait DestinationSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Destination>, SearchError>;
}

/// Built-in fallback catalog
pub struct CatalogSource;

const CATALOG: &[(&str, &str)] = &[
    ("Paris", "France"),
    ("Tokyo", "Japan"),
    ("New York", "USA"),
    ("Rome", "Italy"),
    ("London", "UK"),
    ("Barcelona", "Spain"),
    ("Amsterdam", "Netherlands"),
    ("Berlin", "Germany"),
    ("Prague", "Czech Republic"),
    ("Sydney", "Australia"),
    ("Bangkok", "Thailand"),
    ("Dubai", "UAE"),
    ("Singapore", "Singapore"),
    ("Istanbul", "Turkey"),
    ("Seoul", "South Korea"),
    ("San Francisco", "USA"),
    ("Rio de Janeiro", "Brazil"),
    ("Cairo", "Egypt"),
    ("Venice", "Italy"),
    ("Kyoto", "Japan"),
];

#[async_trait]
impl DestinationSource for CatalogSource {
    async fn search(&self, query: &str) -> Result<Vec<Destination>, SearchError> {
        let needle = query.to_lowercase();
        let matches = CATALOG
            .iter()
            .enumerate()
            .map(|(idx, (name, country))| {
                let full = if name == country {
                    (*name).to_string()
                } else {
                    format!("{}, {}", name, country)
                };
                Destination {
                    id: (idx + 1).to_string(),
                    name: (*name).to_string(),
                    country: (*country).to_string(),
                    full,
                }
            })
            .filter(|dest| {
                dest.name.to_lowercase().contains(&needle)
                    || dest.country.to_lowercase().contains(&needle)
                    || dest.full.to_lowercase().contains(&needle)
            })
            .collect();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_matches_name_and_country() {
        let by_name = CatalogSource.search("pari").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].full, "Paris, France");

        let by_country = CatalogSource.search("japan").await.unwrap();
        let names: Vec<&str> = by_country.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Tokyo", "Kyoto"]);
    }

    #[tokio::test]
    async fn test_catalog_single_word_full_label() {
        let results = CatalogSource.search("singapore").await.unwrap();
        assert_eq!(results[0].full, "Singapore");
    }

    #[tokio::test]
    async fn test_catalog_no_match() {
        assert!(CatalogSource.search("atlantis").await.unwrap().is_empty());
    }
}
