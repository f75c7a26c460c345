//! Catalog - Category Data Loaded From the Data Source
//!
//! The catalog document is a JSON object whose top-level keys name item
//! categories. Each known key is parsed on its own: a category whose value
//! is not an array of items is skipped and kept by name as invalid, leaving
//! the other categories intact. Unknown keys are kept by name only and never
//! rendered.

use ahash::AHashMap;
use serde_json::Value;

use crate::domain::{CarouselItem, Category};
use crate::error::{Error, Result};

/// Parsed catalog document
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: AHashMap<Category, Vec<CarouselItem>>,
    unknown_keys: Vec<String>,
    invalid_keys: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from raw JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Build a catalog from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::Invalid {
                message: "catalog root must be a JSON object".to_string(),
            });
        };

        let mut catalog = Catalog::default();
        for (key, value) in map {
            match Category::from_json_key(&key) {
                // `null` behaves like an absent category
                Some(_) if value.is_null() => {}
                Some(category) => match serde_json::from_value::<Vec<CarouselItem>>(value) {
                    Ok(items) => {
                        catalog.items.insert(category, items);
                    }
                    Err(error) => {
                        tracing::warn!(key = %key, %error, "Skipping malformed catalog category");
                        catalog.invalid_keys.push(key);
                    }
                },
                None => catalog.unknown_keys.push(key),
            }
        }
        catalog.unknown_keys.sort();
        catalog.invalid_keys.sort();

        Ok(catalog)
    }

    /// Builder used by tests and fixtures
    pub fn with_items(mut self, category: Category, items: Vec<CarouselItem>) -> Self {
        self.items.insert(category, items);
        self
    }

    /// Items of a category, `None` when the category is absent
    pub fn items(&self, category: Category) -> Option<&[CarouselItem]> {
        self.items.get(&category).map(Vec::as_slice)
    }

    /// Categories present in the document, in page order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::all()
            .iter()
            .copied()
            .filter(|c| self.items.contains_key(c))
    }

    /// Top-level keys that matched no category
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown_keys
    }

    /// Known keys whose value could not be parsed as items
    pub fn invalid_keys(&self) -> &[String] {
        &self.invalid_keys
    }

    /// Total number of items across categories
    pub fn item_count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "recommendItems": [
            {"img": "a.jpg", "title": "Jeju", "description": "Island"},
            {"img": "b.jpg", "title": "Busan", "description": "Beach"}
        ],
        "amazingDeals": [],
        "hotLeisure": null,
        "promoBanner": {"text": "ignored"}
    }"#;

    #[test]
    fn parses_known_categories() {
        let catalog = Catalog::from_json(SAMPLE).expect("valid catalog");
        assert_eq!(catalog.items(Category::Recommended).map(<[_]>::len), Some(2));
        assert_eq!(catalog.items(Category::Deals).map(<[_]>::len), Some(0));
        assert!(catalog.items(Category::Leisure).is_none());
        assert!(catalog.items(Category::Trending).is_none());
        assert_eq!(catalog.item_count(), 2);
    }

    #[test]
    fn keeps_unknown_keys_by_name() {
        let catalog = Catalog::from_json(SAMPLE).expect("valid catalog");
        assert_eq!(catalog.unknown_keys(), &["promoBanner".to_string()]);
    }

    #[test]
    fn categories_follow_page_order() {
        let catalog = Catalog::default()
            .with_items(Category::MonthlyLeisure, vec![CarouselItem::new("m", "M", "")])
            .with_items(Category::Recommended, vec![CarouselItem::new("r", "R", "")]);
        let order: Vec<_> = catalog.categories().collect();
        assert_eq!(order, vec![Category::Recommended, Category::MonthlyLeisure]);
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(matches!(Catalog::from_json("[1, 2]"), Err(Error::Invalid { .. })));
    }

    #[test]
    fn malformed_category_leaves_others_intact() {
        let text = r#"{
            "recommendItems": [{"img": "a.jpg", "title": "Jeju", "description": "Island"}],
            "amazingDeals": [{"img": "b.jpg", "title": 7}],
            "trendingDestinations": "soon"
        }"#;
        let catalog = Catalog::from_json(text).expect("document still parses");
        assert_eq!(catalog.items(Category::Recommended).map(<[_]>::len), Some(1));
        assert!(catalog.items(Category::Deals).is_none());
        assert!(catalog.items(Category::Trending).is_none());
        assert_eq!(
            catalog.invalid_keys(),
            &["amazingDeals".to_string(), "trendingDestinations".to_string()]
        );
        assert!(catalog.unknown_keys().is_empty());
    }

    #[test]
    fn item_without_title_still_renders() {
        let text = r#"{"amazingDeals": [{"img": "b.jpg", "description": "no title"}]}"#;
        let catalog = Catalog::from_json(text).expect("valid catalog");
        let items = catalog.items(Category::Deals).expect("deals parsed");
        assert_eq!(items.len(), 1);
        assert!(items[0].title.is_empty());
        assert!(catalog.invalid_keys().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Catalog::from_json("{not json"), Err(Error::Json { .. })));
    }
}
