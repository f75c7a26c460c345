//! Landing Model
//!
//! The ordered category sections of the landing page. Each section is either
//! its placeholder or a mounted carousel. Mounting goes through section handles
//! so a missing slot or an empty item list leaves the page untouched.

use crate::components::carousel::{CarouselFrame, CarouselState, LayoutMetrics, Recompute};
use crate::domain::{CarouselItem, Catalog, Category};

/// Disposable reference to a mounted carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselHandle {
    category: Category,
    generation: u64,
}

impl CarouselHandle {
    pub fn category(&self) -> Category {
        self.category
    }
}

/// What a section currently shows
#[derive(Debug, Clone, Default)]
pub enum SectionContent {
    #[default]
    Placeholder,
    Carousel {
        generation: u64,
        state: CarouselState,
    },
}

/// One category slot on the page
#[derive(Debug, Clone)]
pub struct Section {
    category: Category,
    content: SectionContent,
    /// Last widths measured for this section's carousel
    metrics: LayoutMetrics,
}

impl Section {
    fn new(category: Category) -> Self {
        Self {
            category,
            content: SectionContent::Placeholder,
            metrics: LayoutMetrics::default(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn handle(&self) -> &'static str {
        self.category.handle()
    }

    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    pub fn carousel(&self) -> Option<&CarouselState> {
        match &self.content {
            SectionContent::Carousel { state, .. } => Some(state),
            SectionContent::Placeholder => None,
        }
    }

    fn carousel_mut(&mut self) -> Option<&mut CarouselState> {
        match &mut self.content {
            SectionContent::Carousel { state, .. } => Some(state),
            SectionContent::Placeholder => None,
        }
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }
}

#[derive(Debug, Clone)]
pub struct LandingModel {
    sections: Vec<Section>,
    next_generation: u64,
}

impl Default for LandingModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingModel {
    /// All category sections in page order, every one showing its placeholder
    pub fn new() -> Self {
        Self::with_sections(Category::all())
    }

    /// A page that only has slots for `categories`
    pub fn with_sections(categories: &[Category]) -> Self {
        Self {
            sections: categories.iter().copied().map(Section::new).collect(),
            next_generation: 0,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }

    fn section_by_handle_mut(&mut self, handle: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.handle() == handle)
    }

    fn live_section_mut(&mut self, handle: CarouselHandle) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| {
            s.category == handle.category
                && matches!(s.content, SectionContent::Carousel { generation, .. } if generation == handle.generation)
        })
    }

    /// Mount a carousel into the section named by `section_handle`
    ///
    /// Unknown handles and empty item lists are silent no-ops.
    pub fn mount_carousel(
        &mut self,
        section_handle: &str,
        items: Vec<CarouselItem>,
        items_per_page: Option<usize>,
    ) -> Option<CarouselHandle> {
        let generation = self.next_generation;
        let Some(section) = self.section_by_handle_mut(section_handle) else {
            tracing::debug!(handle = section_handle, "No section for carousel, skipping");
            return None;
        };
        let Some(mut state) = CarouselState::create(items, items_per_page) else {
            tracing::debug!(handle = section_handle, "No items for carousel, skipping");
            return None;
        };

        // Measurements survive a remount of the same slot
        state.recompute_on_resize(section.metrics);
        section.content = SectionContent::Carousel { generation, state };
        let category = section.category;
        self.next_generation += 1;

        Some(CarouselHandle {
            category,
            generation,
        })
    }

    /// Mount one carousel per category present in `catalog`
    pub fn populate(&mut self, catalog: &Catalog, items_per_page: Option<usize>) -> Vec<CarouselHandle> {
        let mut handles = Vec::new();
        for category in Category::all() {
            let Some(items) = catalog.items(*category) else {
                continue;
            };
            if let Some(handle) = self.mount_carousel(category.handle(), items.to_vec(), items_per_page) {
                handles.push(handle);
            }
        }
        tracing::info!(mounted = handles.len(), "Landing sections populated");
        handles
    }

    /// Restore the placeholder of a mounted carousel's section
    ///
    /// Returns `false` when the handle is stale.
    pub fn dispose(&mut self, handle: CarouselHandle) -> bool {
        match self.live_section_mut(handle) {
            Some(section) => {
                section.content = SectionContent::Placeholder;
                true
            }
            None => false,
        }
    }

    /// Step forward, applying the latest measurements first
    pub fn next(&mut self, handle: CarouselHandle) -> Option<CarouselFrame> {
        self.measured_carousel_mut(handle).map(CarouselState::next)
    }

    /// Step back, applying the latest measurements first
    pub fn prev(&mut self, handle: CarouselHandle) -> Option<CarouselFrame> {
        self.measured_carousel_mut(handle).map(CarouselState::prev)
    }

    fn measured_carousel_mut(&mut self, handle: CarouselHandle) -> Option<&mut CarouselState> {
        let section = self.live_section_mut(handle)?;
        let metrics = section.metrics;
        let state = section.carousel_mut()?;
        state.recompute_on_resize(metrics);
        Some(state)
    }

    /// Record the widths measured for a section during layout
    pub fn record_metrics(&mut self, category: Category, metrics: LayoutMetrics) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.category == category) {
            section.metrics = metrics;
        }
    }

    /// Recompute every mounted carousel from its recorded measurements
    ///
    /// Returns true when any carousel changed.
    pub fn recompute_all(&mut self) -> bool {
        let mut changed = false;
        for section in &mut self.sections {
            let metrics = section.metrics;
            if let Some(state) = section.carousel_mut() {
                changed |= state.recompute_on_resize(metrics) == Recompute::Updated;
            }
        }
        changed
    }

    /// Handle of the carousel currently mounted in `category`
    pub fn handle_for(&self, category: Category) -> Option<CarouselHandle> {
        self.section(category).and_then(|s| match s.content {
            SectionContent::Carousel { generation, .. } => Some(CarouselHandle { category, generation }),
            SectionContent::Placeholder => None,
        })
    }

    pub fn mounted_count(&self) -> usize {
        self.sections.iter().filter(|s| s.carousel().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::new(format!("https://img.test/{i}.jpg"), format!("Trip {i}"), "Seoul"))
            .collect()
    }

    #[test]
    fn new_page_shows_placeholders() {
        let model = LandingModel::new();
        assert_eq!(model.sections().len(), Category::all().len());
        assert_eq!(model.mounted_count(), 0);
    }

    #[test]
    fn empty_items_leave_placeholder_untouched() {
        let mut model = LandingModel::new();
        let handle = model.mount_carousel("deal-slider", Vec::new(), Some(5));
        assert!(handle.is_none());
        let section = model.section(Category::Deals).expect("deals section");
        assert!(matches!(section.content(), SectionContent::Placeholder));
    }

    #[test]
    fn unknown_handle_is_noop() {
        let mut model = LandingModel::new();
        assert!(model.mount_carousel("missing-slider", items(3), None).is_none());
        assert_eq!(model.mounted_count(), 0);
    }

    #[test]
    fn missing_section_does_not_affect_others() {
        let mut model = LandingModel::with_sections(&[Category::Recommended]);
        let catalog = Catalog::default()
            .with_items(Category::Recommended, items(4))
            .with_items(Category::Deals, items(4));
        let handles = model.populate(&catalog, Some(2));
        assert_eq!(handles.len(), 1);
        assert_eq!(handles[0].category(), Category::Recommended);
    }

    #[test]
    fn populate_mounts_present_categories() {
        let mut model = LandingModel::new();
        let catalog = Catalog::default()
            .with_items(Category::Trending, items(7))
            .with_items(Category::Leisure, Vec::new());
        let handles = model.populate(&catalog, Some(5));

        assert_eq!(handles.len(), 1);
        let carousel = model
            .section(Category::Trending)
            .and_then(Section::carousel)
            .expect("mounted");
        assert_eq!(carousel.max_index(), 2);
        assert!(model.section(Category::Leisure).and_then(Section::carousel).is_none());
    }

    #[test]
    fn navigation_through_handle() {
        let mut model = LandingModel::new();
        let handle = model
            .mount_carousel("recommend-slider", items(7), Some(5))
            .expect("mounted");
        let indices: Vec<_> = (0..3)
            .map(|_| {
                model.next(handle);
                model.section(Category::Recommended).and_then(Section::carousel).map(|c| c.current_index())
            })
            .collect();
        assert_eq!(indices, vec![Some(1), Some(2), Some(2)]);
        assert!(model.prev(handle).is_some());
    }

    #[test]
    fn dispose_restores_placeholder() {
        let mut model = LandingModel::new();
        let handle = model
            .mount_carousel("leisure-slider", items(3), None)
            .expect("mounted");
        assert!(model.dispose(handle));
        assert!(model.section(Category::Leisure).and_then(Section::carousel).is_none());
        assert!(!model.dispose(handle));
        assert!(model.next(handle).is_none());
    }

    #[test]
    fn stale_handle_does_not_touch_remount() {
        let mut model = LandingModel::new();
        let old = model.mount_carousel("hotels", items(3), None);
        assert!(old.is_none(), "anchors are not section handles");

        let first = model
            .mount_carousel("neighborhood-slider", items(3), None)
            .expect("mounted");
        let second = model
            .mount_carousel("neighborhood-slider", items(5), None)
            .expect("remounted");
        assert!(!model.dispose(first));
        assert_eq!(model.handle_for(Category::NeighborhoodHotels), Some(second));
    }

    #[test]
    fn recorded_metrics_drive_recompute() {
        let mut model = LandingModel::new();
        model.mount_carousel("monthly-leisure-slider", items(8), None);
        assert!(!model.recompute_all(), "no measurements yet");

        model.record_metrics(
            Category::MonthlyLeisure,
            LayoutMetrics {
                viewport_width: 720.0,
                item_width: 240.0,
            },
        );
        assert!(model.recompute_all());
        let carousel = model
            .section(Category::MonthlyLeisure)
            .and_then(Section::carousel)
            .expect("mounted");
        assert_eq!(carousel.items_per_page(), 3);
        assert_eq!(carousel.max_index(), 5);
    }

    #[test]
    fn step_applies_pending_measurements() {
        use crate::components::carousel::TrackOffset;

        let mut model = LandingModel::new();
        let handle = model
            .mount_carousel("performance-slider", items(8), None)
            .expect("mounted");
        // Measured during layout, but the settle timer has not fired yet
        model.record_metrics(
            Category::Performances,
            LayoutMetrics {
                viewport_width: 960.0,
                item_width: 240.0,
            },
        );

        let frame = model.next(handle).expect("live handle");
        assert_eq!(frame.offset, TrackOffset::Pixels(240.0));
        assert!(!frame.prev.is_disabled());
        let carousel = model
            .section(Category::Performances)
            .and_then(Section::carousel)
            .expect("mounted");
        assert_eq!(carousel.items_per_page(), 4);
        assert_eq!(carousel.max_index(), 4);
    }
}
