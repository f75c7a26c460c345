//! CarouselItem - A Single Card's Content

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// One card shown by a carousel
///
/// Items have no identity beyond their position in the category array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    /// Image URL (`img` in the data file, `image` also accepted)
    #[serde(rename = "img", alias = "image")]
    pub image: String,
    /// Card title
    #[serde(default)]
    pub title: String,
    /// Short description under the title
    #[serde(default)]
    pub description: String,
}

impl CarouselItem {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn title_text(&self) -> SharedString {
        SharedString::from(self.title.clone())
    }

    pub fn description_text(&self) -> SharedString {
        SharedString::from(self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_img_field() {
        let item: CarouselItem = serde_json::from_str(
            r#"{"img": "https://cdn.example.com/jeju.jpg", "title": "Jeju", "description": "Island escape"}"#,
        )
        .expect("valid item");
        assert_eq!(item.image, "https://cdn.example.com/jeju.jpg");
        assert_eq!(item.title, "Jeju");
    }

    #[test]
    fn accepts_image_alias_and_missing_description() {
        let item: CarouselItem =
            serde_json::from_str(r#"{"image": "a.png", "title": "Busan"}"#).expect("valid item");
        assert_eq!(item.image, "a.png");
        assert!(item.description.is_empty());
    }

    #[test]
    fn missing_title_defaults_to_empty() {
        let item: CarouselItem =
            serde_json::from_str(r#"{"img": "a.png", "description": "x"}"#).expect("valid item");
        assert!(item.title.is_empty());
    }

    #[test]
    fn rejects_item_without_image() {
        let result = serde_json::from_str::<CarouselItem>(r#"{"title": "Busan"}"#);
        assert!(result.is_err());
    }
}
