//! Category - The Item Categories Shown on the Landing Page
//!
//! Each category owns one section of the page. The section handle and the
//! JSON key are stable: the catalog is matched against `json_key`, and
//! carousels are mounted into the section named by `handle`.

use serde::{Deserialize, Serialize};

/// Item categories, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Recommended,
    Trending,
    Deals,
    Leisure,
    Performances,
    NeighborhoodHotels,
    MonthlyLeisure,
}

impl Category {
    /// All categories in the order their sections appear
    pub fn all() -> &'static [Category] {
        &[
            Category::Recommended,
            Category::Trending,
            Category::Deals,
            Category::Leisure,
            Category::Performances,
            Category::NeighborhoodHotels,
            Category::MonthlyLeisure,
        ]
    }

    /// Top-level key of this category in the catalog JSON
    pub fn json_key(&self) -> &'static str {
        match self {
            Category::Recommended => "recommendItems",
            Category::Trending => "trendingDestinations",
            Category::Deals => "amazingDeals",
            Category::Leisure => "hotLeisure",
            Category::Performances => "hotPerformances",
            Category::NeighborhoodHotels => "neighborhoodHotels",
            Category::MonthlyLeisure => "monthlyLeisure",
        }
    }

    /// Section handle the carousel is mounted into
    pub fn handle(&self) -> &'static str {
        match self {
            Category::Recommended => "recommend-slider",
            Category::Trending => "trending-slider",
            Category::Deals => "deal-slider",
            Category::Leisure => "leisure-slider",
            Category::Performances => "performance-slider",
            Category::NeighborhoodHotels => "neighborhood-slider",
            Category::MonthlyLeisure => "monthly-leisure-slider",
        }
    }

    /// In-page anchor id of the section
    pub fn anchor(&self) -> &'static str {
        match self {
            Category::Recommended => "recommend",
            Category::Trending => "trending",
            Category::Deals => "deals",
            Category::Leisure => "leisure",
            Category::Performances => "performances",
            Category::NeighborhoodHotels => "hotels",
            Category::MonthlyLeisure => "monthly",
        }
    }

    /// Translation key of the section title
    pub fn title_key(&self) -> &'static str {
        match self {
            Category::Recommended => "recommended",
            Category::Trending => "trending",
            Category::Deals => "deals",
            Category::Leisure => "leisure",
            Category::Performances => "performances",
            Category::NeighborhoodHotels => "neighborhood_hotels",
            Category::MonthlyLeisure => "monthly_leisure",
        }
    }

    pub fn from_json_key(key: &str) -> Option<Category> {
        Self::all().iter().copied().find(|c| c.json_key() == key)
    }

    pub fn from_anchor(anchor: &str) -> Option<Category> {
        Self::all().iter().copied().find(|c| c.anchor() == anchor)
    }
}
