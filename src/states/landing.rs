//! Landing State
//!
//! Owns everything the landing page shows: the category sections, drawer,
//! header mode, search alert and the scroll position of the page. Views call
//! into this entity; timers and the catalog load are tasks owned by it.

use std::sync::Arc;
use std::time::Duration;

use gpui::{Context, ScrollHandle, Task, point, px};
use tracing::{debug, error, info, trace};

use crate::components::carousel::LayoutMetrics;
use crate::constants::{ANCHOR_SCROLL_DURATION_MS, ANIMATION_FRAME_MS, LAYOUT_SETTLE_DELAY_MS};
use crate::domain::{Catalog, Category};
use crate::error::Result;
use crate::helpers::{Easing, ScrollAnimator};
use crate::services::{CatalogSource, load_catalog};
use crate::states::{
    AnchorOrigin, AnchorOutcome, CarouselHandle, DiagnosticSource, Diagnostics, DrawerEvent,
    DrawerState, HeaderMode, LandingModel, Section, follow_anchor, target_scroll_position,
};

/// Scroll container children that precede the first category section
/// (header slot, hero banner)
pub const SECTION_CHILD_OFFSET: usize = 2;

/// Catalog loading state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(Arc<str>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }
}

/// Modal alert currently shown over the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAlert {
    SearchNotImplemented,
}

pub struct LandingState {
    model: LandingModel,
    handles: Vec<CarouselHandle>,
    load_state: LoadState,
    drawer: DrawerState,
    header: HeaderMode,
    sticky_threshold: f32,
    items_per_page: Option<usize>,
    alert: Option<PageAlert>,
    diagnostics: Diagnostics,
    scroll_handle: ScrollHandle,
    animator: ScrollAnimator,
    /// Pending measurement-based recompute
    settle_task: Option<Task<()>>,
    _load_task: Option<Task<()>>,
    animation_task: Option<Task<()>>,
}

impl LandingState {
    /// `items_per_page` pins the carousel page size; `None` follows the window
    pub fn new(items_per_page: Option<usize>, sticky_threshold: f32) -> Self {
        Self {
            model: LandingModel::new(),
            handles: Vec::new(),
            load_state: LoadState::Idle,
            drawer: DrawerState::default(),
            header: HeaderMode::default(),
            sticky_threshold,
            items_per_page,
            alert: None,
            diagnostics: Diagnostics::default(),
            scroll_handle: ScrollHandle::new(),
            animator: ScrollAnimator::new(),
            settle_task: None,
            _load_task: None,
            animation_task: None,
        }
    }

    // ==================== Getters ====================

    pub fn model(&self) -> &LandingModel {
        &self.model
    }

    pub fn handles(&self) -> &[CarouselHandle] {
        &self.handles
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn header_mode(&self) -> HeaderMode {
        self.header
    }

    /// Header mode for the scroll position as laid out right now
    pub fn current_header_mode(&self) -> HeaderMode {
        HeaderMode::for_scroll(self.scroll_y(), self.sticky_threshold)
    }

    pub fn alert(&self) -> Option<PageAlert> {
        self.alert
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn scroll_handle(&self) -> &ScrollHandle {
        &self.scroll_handle
    }

    /// Current page scroll distance from the top, in pixels
    fn scroll_y(&self) -> f32 {
        -f32::from(self.scroll_handle.offset().y)
    }

    // ==================== Catalog ====================

    /// Load the catalog once from `source` and mount the carousels
    pub fn load(&mut self, source: CatalogSource, cx: &mut Context<Self>) {
        if self.load_state.is_loading() {
            debug!("Catalog load already in flight");
            return;
        }
        self.load_state = LoadState::Loading;
        cx.notify();

        let task = cx.spawn(async move |this, cx| {
            let result = cx.background_executor().spawn(load_catalog(source)).await;
            let _ = this.update(cx, |this, cx| {
                this.apply_catalog(result);
                if this.load_state == LoadState::Loaded {
                    this.schedule_recompute(cx);
                }
                cx.notify();
            });
        });
        self._load_task = Some(task);
    }

    /// Mount carousels from a loaded catalog, or record the failure
    ///
    /// A failure adds exactly one diagnostic and leaves every section on its
    /// placeholder.
    pub fn apply_catalog(&mut self, result: Result<Catalog>) {
        match result {
            Ok(catalog) => {
                for handle in self.handles.drain(..) {
                    self.model.dispose(handle);
                }
                self.handles = self.model.populate(&catalog, self.items_per_page);
                for key in catalog.invalid_keys() {
                    self.diagnostics.record(
                        DiagnosticSource::CatalogCategory,
                        format!("category `{key}` is not an array of items"),
                    );
                }
                info!(
                    carousels = self.handles.len(),
                    items = catalog.item_count(),
                    "Catalog applied"
                );
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                error!(error = %e, "Failed to load catalog");
                self.diagnostics.record(DiagnosticSource::CatalogFetch, e.to_string());
                self.load_state = LoadState::Error(e.to_string().into());
            }
        }
    }

    pub fn record_diagnostic(&mut self, source: DiagnosticSource, message: impl Into<Arc<str>>) {
        self.diagnostics.record(source, message);
    }

    // ==================== Carousels ====================

    pub fn next(&mut self, handle: CarouselHandle, cx: &mut Context<Self>) {
        if self.model.next(handle).is_some() {
            cx.notify();
        }
    }

    pub fn prev(&mut self, handle: CarouselHandle, cx: &mut Context<Self>) {
        if self.model.prev(handle).is_some() {
            cx.notify();
        }
    }

    fn metrics(&self, category: Category) -> LayoutMetrics {
        self.model
            .section(category)
            .map(Section::metrics)
            .unwrap_or_default()
    }

    /// Store the viewport width measured during layout; applied at the next recompute
    pub fn record_viewport_width(&mut self, category: Category, width: f32) {
        let metrics = LayoutMetrics {
            viewport_width: width,
            ..self.metrics(category)
        };
        self.model.record_metrics(category, metrics);
    }

    /// Store the first card's measured width; applied at the next recompute
    pub fn record_item_width(&mut self, category: Category, width: f32) {
        let metrics = LayoutMetrics {
            item_width: width,
            ..self.metrics(category)
        };
        self.model.record_metrics(category, metrics);
    }

    /// Recompute page sizes after layout has settled
    ///
    /// Replacing the pending task debounces bursts of resize events.
    pub fn schedule_recompute(&mut self, cx: &mut Context<Self>) {
        if self.settle_task.take().is_some() {
            trace!("Restarting layout settle timer");
        }
        let task = cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(LAYOUT_SETTLE_DELAY_MS))
                .await;
            let _ = this.update(cx, |this, cx| {
                if this.model.recompute_all() {
                    cx.notify();
                }
            });
        });
        self.settle_task = Some(task);
    }

    // ==================== Drawer, header, alert ====================

    pub fn apply_drawer(&mut self, event: DrawerEvent, cx: &mut Context<Self>) {
        let next = self.drawer.apply(event);
        if next != self.drawer {
            debug!(?event, from = ?self.drawer, to = ?next, "Drawer transition");
            self.drawer = next;
            cx.notify();
        }
    }

    /// Re-evaluate sticky header mode from the scroll position
    pub fn sync_header(&mut self, cx: &mut Context<Self>) {
        let mode = HeaderMode::for_scroll(self.scroll_y(), self.sticky_threshold);
        if mode != self.header {
            self.header = mode;
            cx.notify();
        }
    }

    /// User scrolled the page by hand
    pub fn on_user_scroll(&mut self, cx: &mut Context<Self>) {
        if self.animation_task.take().is_some() {
            self.animator.cancel();
        }
        self.sync_header(cx);
    }

    pub fn show_search_alert(&mut self, cx: &mut Context<Self>) {
        if self.alert.is_none() {
            self.alert = Some(PageAlert::SearchNotImplemented);
            cx.notify();
        }
    }

    pub fn dismiss_alert(&mut self, cx: &mut Context<Self>) {
        if self.alert.take().is_some() {
            cx.notify();
        }
    }

    // ==================== Anchors ====================

    /// Follow an in-page link; returns whether the click was consumed
    pub fn follow_anchor(&mut self, href: &str, origin: AnchorOrigin, cx: &mut Context<Self>) -> bool {
        match follow_anchor(href) {
            AnchorOutcome::Ignored => false,
            AnchorOutcome::NoTarget => {
                debug!(href, "Anchor names no section");
                true
            }
            AnchorOutcome::ScrollTo(category) => {
                self.scroll_to_section(category, cx);
                if origin == AnchorOrigin::Drawer {
                    self.apply_drawer(DrawerEvent::AnchorFollowedInside, cx);
                }
                true
            }
        }
    }

    fn scroll_to_section(&mut self, category: Category, cx: &mut Context<Self>) {
        let Some(index) = self.model.sections().iter().position(|s| s.category() == category) else {
            return;
        };
        let Some(bounds) = self.scroll_handle.bounds_for_item(index + SECTION_CHILD_OFFSET) else {
            debug!(?category, "Section not laid out yet");
            return;
        };

        let container_top = self.scroll_handle.bounds().top();
        let current = self.scroll_y();
        let max = f32::from(self.scroll_handle.max_offset().height);
        let target = target_scroll_position(current, f32::from(bounds.top() - container_top), max);

        self.animator.start(
            current,
            target,
            Duration::from_millis(ANCHOR_SCROLL_DURATION_MS),
            Easing::EaseOut,
        );

        let task = cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(ANIMATION_FRAME_MS))
                    .await;
                let running = this
                    .update(cx, |this, cx| this.step_animation(cx))
                    .unwrap_or(false);
                if !running {
                    break;
                }
            }
        });
        self.animation_task = Some(task);
    }

    fn step_animation(&mut self, cx: &mut Context<Self>) -> bool {
        let Some(y) = self.animator.tick() else {
            return false;
        };
        self.scroll_handle.set_offset(point(px(0.), px(-y)));
        self.sync_header(cx);
        cx.notify();
        self.animator.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CarouselItem;
    use crate::services::interpret_response;

    fn catalog() -> Catalog {
        let items = (0..6)
            .map(|i| CarouselItem::new(format!("{i}.jpg"), format!("Stay {i}"), ""))
            .collect();
        Catalog::default().with_items(Category::NeighborhoodHotels, items)
    }

    #[test]
    fn failed_fetch_records_one_diagnostic_and_renders_nothing() {
        let mut state = LandingState::new(None, 100.0);
        state.apply_catalog(interpret_response(500, ""));

        assert_eq!(state.diagnostics().len(), 1);
        assert_eq!(state.diagnostics().count(DiagnosticSource::CatalogFetch), 1);
        assert!(state.load_state().is_error());
        assert_eq!(state.model().mounted_count(), 0);
        assert!(state.handles().is_empty());
    }

    #[test]
    fn loaded_catalog_mounts_carousels() {
        let mut state = LandingState::new(Some(4), 100.0);
        state.apply_catalog(Ok(catalog()));

        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.handles().len(), 1);
        assert!(state.diagnostics().is_empty());
        let carousel = state
            .model()
            .section(Category::NeighborhoodHotels)
            .and_then(Section::carousel)
            .expect("mounted");
        assert_eq!(carousel.max_index(), 2);
    }

    #[test]
    fn malformed_category_does_not_block_the_others() {
        let text = r#"{
            "recommendItems": [
                {"img": "a.jpg", "title": "Jeju", "description": "Island"},
                {"img": "b.jpg", "title": "Busan", "description": "Beach"}
            ],
            "amazingDeals": [{"img": "c.jpg", "title": ["not", "text"]}],
            "hotLeisure": [{"img": "d.jpg", "description": "untitled"}]
        }"#;
        let mut state = LandingState::new(None, 100.0);
        state.apply_catalog(Catalog::from_json(text));

        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.model().mounted_count(), 2);
        assert!(state.model().section(Category::Recommended).and_then(Section::carousel).is_some());
        assert!(state.model().section(Category::Leisure).and_then(Section::carousel).is_some());
        assert!(state.model().section(Category::Deals).and_then(Section::carousel).is_none());
        assert_eq!(state.diagnostics().count(DiagnosticSource::CatalogCategory), 1);
        assert_eq!(state.diagnostics().count(DiagnosticSource::CatalogFetch), 0);
    }

    #[test]
    fn reapplying_replaces_previous_carousels() {
        let mut state = LandingState::new(None, 100.0);
        state.apply_catalog(Ok(catalog()));
        let first = state.handles()[0];
        state.apply_catalog(Ok(catalog()));

        assert_eq!(state.handles().len(), 1);
        assert_ne!(state.handles()[0], first);
        assert_eq!(state.model().mounted_count(), 1);
    }

    #[test]
    fn partial_measurements_merge() {
        let mut state = LandingState::new(None, 100.0);
        state.apply_catalog(Ok(catalog()));
        state.record_viewport_width(Category::NeighborhoodHotels, 960.0);
        state.record_item_width(Category::NeighborhoodHotels, 240.0);

        assert!(state.model.recompute_all());
        let carousel = state
            .model()
            .section(Category::NeighborhoodHotels)
            .and_then(Section::carousel)
            .expect("mounted");
        assert_eq!(carousel.items_per_page(), 4);
    }

    #[test]
    fn starts_closed_static_without_alert() {
        let state = LandingState::new(None, 100.0);
        assert_eq!(state.drawer(), DrawerState::Closed);
        assert_eq!(state.header_mode(), HeaderMode::Static);
        assert_eq!(state.alert(), None);
        assert_eq!(state.load_state(), &LoadState::Idle);
    }
}
