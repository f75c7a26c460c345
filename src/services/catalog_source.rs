//! Catalog Source
//!
//! One-shot load of the category document. No retries; the HTTP client's
//! default timeouts apply.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::assets::bundled_catalog;
use crate::domain::Catalog;
use crate::error::{Error, Result};
use crate::services::run_in_tokio;

/// Where the catalog document comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogSource {
    /// HTTP GET
    Url { url: String },
    /// Local JSON file
    Path { path: PathBuf },
    /// Document embedded in the binary
    #[default]
    #[serde(with = "bundled")]
    Bundled,
}

/// Serializes the unit variant as the string `"bundled"`
mod bundled {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("bundled")
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(), D::Error> {
        let value = String::deserialize(deserializer)?;
        if value == "bundled" {
            Ok(())
        } else {
            Err(D::Error::custom(format!("unknown catalog source `{value}`")))
        }
    }
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Url { url } => url.clone(),
            CatalogSource::Path { path } => path.display().to_string(),
            CatalogSource::Bundled => "bundled".to_string(),
        }
    }
}

/// Turn an HTTP answer into a catalog; any non-2xx status is a failure
pub fn interpret_response(status: u16, body: &str) -> Result<Catalog> {
    if !(200..300).contains(&status) {
        return Err(Error::HttpStatus { status });
    }
    Catalog::from_json(body)
}

async fn fetch_url(url: String) -> Result<Catalog> {
    let (status, body) = run_in_tokio(async move {
        let response = reqwest::get(&url).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok::<_, Error>((status, body))
    })
    .await??;
    interpret_response(status, &body)
}

/// Load the catalog from `source`
pub async fn load_catalog(source: CatalogSource) -> Result<Catalog> {
    tracing::info!(source = %source.describe(), "Loading catalog");
    let catalog = match source {
        CatalogSource::Url { url } => fetch_url(url).await?,
        CatalogSource::Path { path } => {
            let text = std::fs::read_to_string(&path)?;
            Catalog::from_json(&text)?
        }
        CatalogSource::Bundled => Catalog::from_json(&bundled_catalog()?)?,
    };
    if !catalog.unknown_keys().is_empty() {
        tracing::debug!(keys = ?catalog.unknown_keys(), "Catalog has keys without a section");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn server_error_is_a_failure() {
        let result = interpret_response(500, "{}");
        assert!(matches!(result, Err(Error::HttpStatus { status: 500 })));
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("HTTP error! status: 500".to_string())
        );
    }

    #[test]
    fn malformed_body_is_a_failure() {
        assert!(matches!(interpret_response(200, "<html>"), Err(Error::Json { .. })));
    }

    #[test]
    fn ok_response_parses() {
        let body = r#"{"amazingDeals":[{"img":"a.jpg","title":"Jeju","description":"3 nights"}]}"#;
        let catalog = interpret_response(200, body).expect("valid catalog");
        assert_eq!(catalog.items(Category::Deals).map(<[_]>::len), Some(1));
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = crate::services::block_on(load_catalog(CatalogSource::Bundled))
            .expect("runtime")
            .expect("bundled catalog parses");
        for category in Category::all() {
            assert!(catalog.items(*category).is_some_and(|items| !items.is_empty()));
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = CatalogSource::Path {
            path: PathBuf::from("/nonexistent/wayfare/catalog.json"),
        };
        let result = crate::services::block_on(load_catalog(source)).expect("runtime");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn source_toml_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            source: CatalogSource,
        }
        let url: Wrapper = toml::from_str(r#"source = { url = "https://example.com/data.json" }"#).expect("url");
        assert_eq!(
            url.source,
            CatalogSource::Url {
                url: "https://example.com/data.json".to_string()
            }
        );
        let path: Wrapper = toml::from_str(r#"source = { path = "/tmp/data.json" }"#).expect("path");
        assert!(matches!(path.source, CatalogSource::Path { .. }));
        let bundled: Wrapper = toml::from_str(r#"source = "bundled""#).expect("bundled");
        assert_eq!(bundled.source, CatalogSource::Bundled);
    }
}
