//! Carousel State
//!
//! Pagination math for a single carousel. Everything here is pure: the view
//! renders a [`CarouselFrame`] and feeds measurements back through
//! [`CarouselState::recompute_on_resize`].

use std::sync::Arc;

use crate::constants::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::CarouselItem;

/// How the number of visible items is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePolicy {
    /// Constant page size; the track moves by percentages of the viewport
    Fixed,
    /// Page size follows the measured widths; the track moves by pixels
    Responsive,
}

/// Enabled state of a navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Enabled,
    Disabled,
}

impl ControlState {
    fn disabled_when(disabled: bool) -> Self {
        if disabled {
            ControlState::Disabled
        } else {
            ControlState::Enabled
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, ControlState::Disabled)
    }
}

/// Horizontal translation of the track, always towards the left
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackOffset {
    /// Percent of the viewport width
    Percent(f32),
    /// Absolute pixels
    Pixels(f32),
}

/// Everything the view needs to draw one carousel position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    pub offset: TrackOffset,
    pub prev: ControlState,
    pub next: ControlState,
}

/// Widths measured from the last layout pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutMetrics {
    pub viewport_width: f32,
    pub item_width: f32,
}

/// Result of a recomputation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// Measurements unusable (zero width before layout) or policy is fixed
    Skipped,
    /// Page math recomputed, nothing changed
    Unchanged,
    /// Page size or index changed
    Updated,
}

/// Carousel state for one category section
#[derive(Debug, Clone)]
pub struct CarouselState {
    items: Arc<[CarouselItem]>,
    current_index: usize,
    items_per_page: usize,
    max_index: usize,
    policy: PagePolicy,
    /// Last usable item width, used for pixel translation
    item_width: f32,
}

impl CarouselState {
    /// Create a carousel over `items`
    ///
    /// Returns `None` for an empty item list. A supplied `items_per_page`
    /// selects the fixed policy; `None` selects the responsive policy,
    /// starting from a default estimate until the first measurement.
    pub fn create(items: Vec<CarouselItem>, items_per_page: Option<usize>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let (policy, per_page) = match items_per_page {
            Some(n) => (PagePolicy::Fixed, n.max(1)),
            None => (PagePolicy::Responsive, DEFAULT_ITEMS_PER_PAGE),
        };

        let mut state = Self {
            items: items.into(),
            current_index: 0,
            items_per_page: per_page,
            max_index: 0,
            policy,
            item_width: 0.0,
        };
        state.max_index = state.compute_max_index();
        Some(state)
    }

    fn compute_max_index(&self) -> usize {
        self.items.len().saturating_sub(self.items_per_page)
    }

    // ==================== Getters ====================

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn policy(&self) -> PagePolicy {
        self.policy
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    // ==================== Navigation ====================

    /// Move one item forward; no-op at `max_index`
    pub fn next(&mut self) -> CarouselFrame {
        if self.can_go_next() {
            self.current_index += 1;
        }
        self.frame()
    }

    /// Move one item back; no-op at 0
    pub fn prev(&mut self) -> CarouselFrame {
        if self.can_go_previous() {
            self.current_index -= 1;
        }
        self.frame()
    }

    /// Recompute page size from fresh measurements
    pub fn recompute_on_resize(&mut self, metrics: LayoutMetrics) -> Recompute {
        if self.policy == PagePolicy::Fixed {
            return Recompute::Skipped;
        }
        if metrics.item_width <= 0.0 || metrics.viewport_width <= 0.0 {
            tracing::trace!(?metrics, "Skipping carousel recompute before layout");
            return Recompute::Skipped;
        }

        let per_page = ((metrics.viewport_width / metrics.item_width).round() as usize).max(1);
        let before = (self.items_per_page, self.current_index, self.item_width);

        self.item_width = metrics.item_width;
        self.items_per_page = per_page;
        self.max_index = self.compute_max_index();
        if self.current_index > self.max_index {
            self.current_index = self.max_index;
        }

        if before == (self.items_per_page, self.current_index, self.item_width) {
            Recompute::Unchanged
        } else {
            tracing::debug!(
                items_per_page = self.items_per_page,
                max_index = self.max_index,
                current_index = self.current_index,
                "Carousel page size recomputed"
            );
            Recompute::Updated
        }
    }

    // ==================== Rendering ====================

    /// Visual position for the current state
    pub fn frame(&self) -> CarouselFrame {
        let offset = match self.policy {
            PagePolicy::Fixed => {
                TrackOffset::Percent(self.current_index as f32 * (100.0 / self.items_per_page as f32))
            }
            PagePolicy::Responsive => TrackOffset::Pixels(self.current_index as f32 * self.item_width),
        };

        CarouselFrame {
            offset,
            prev: ControlState::disabled_when(self.current_index == 0),
            next: ControlState::disabled_when(self.current_index >= self.max_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::new(format!("img-{i}.jpg"), format!("Item {i}"), ""))
            .collect()
    }

    fn responsive(n: usize, per_page: f32) -> CarouselState {
        let mut state = CarouselState::create(items(n), None).expect("non-empty");
        state.recompute_on_resize(LayoutMetrics {
            viewport_width: per_page * 200.0,
            item_width: 200.0,
        });
        state
    }

    #[test]
    fn empty_items_create_nothing() {
        assert!(CarouselState::create(Vec::new(), Some(3)).is_none());
        assert!(CarouselState::create(Vec::new(), None).is_none());
    }

    #[test]
    fn create_starts_at_zero_with_prev_disabled() {
        for n in 1..=8 {
            for per_page in 0..=n {
                let state = CarouselState::create(items(n), Some(per_page)).expect("non-empty");
                assert_eq!(state.current_index(), 0);
                assert!(state.frame().prev.is_disabled());
            }
        }
    }

    #[test]
    fn zero_items_per_page_is_raised_to_one() {
        let state = CarouselState::create(items(4), Some(0)).expect("non-empty");
        assert_eq!(state.items_per_page(), 1);
        assert_eq!(state.max_index(), 3);
    }

    #[test]
    fn seven_items_five_per_page() {
        let mut state = CarouselState::create(items(7), Some(5)).expect("non-empty");
        assert_eq!(state.max_index(), 2);

        let mut seen = vec![state.current_index()];
        for _ in 0..3 {
            state.next();
            seen.push(state.current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 2]);
        assert!(state.frame().next.is_disabled());
        assert!(!state.frame().prev.is_disabled());
    }

    #[test]
    fn page_wider_than_items_disables_both_controls() {
        let state = CarouselState::create(items(3), Some(5)).expect("non-empty");
        assert_eq!(state.max_index(), 0);
        let frame = state.frame();
        assert!(frame.prev.is_disabled());
        assert!(frame.next.is_disabled());
    }

    #[test]
    fn prev_at_zero_is_noop() {
        let mut state = CarouselState::create(items(6), Some(2)).expect("non-empty");
        let frame = state.prev();
        assert_eq!(state.current_index(), 0);
        assert!(frame.prev.is_disabled());
        assert!(!frame.next.is_disabled());
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut state = CarouselState::create(items(9), Some(4)).expect("non-empty");
        // Deterministic walk mixing both directions
        let moves = "nnpnnnnnnppppppnpnpnnnnnnnpp";
        for m in moves.chars() {
            match m {
                'n' => state.next(),
                _ => state.prev(),
            };
            assert!(state.current_index() <= state.max_index());
        }
    }

    #[test]
    fn frame_is_idempotent() {
        let mut state = CarouselState::create(items(7), Some(3)).expect("non-empty");
        state.next();
        assert_eq!(state.frame(), state.frame());
    }

    #[test]
    fn fixed_policy_translates_by_percent() {
        let mut state = CarouselState::create(items(7), Some(4)).expect("non-empty");
        state.next();
        state.next();
        assert_eq!(state.frame().offset, TrackOffset::Percent(50.0));
    }

    #[test]
    fn fixed_policy_ignores_resize() {
        let mut state = CarouselState::create(items(7), Some(5)).expect("non-empty");
        let result = state.recompute_on_resize(LayoutMetrics {
            viewport_width: 600.0,
            item_width: 200.0,
        });
        assert_eq!(result, Recompute::Skipped);
        assert_eq!(state.items_per_page(), 5);
        assert_eq!(state.max_index(), 2);
    }

    #[test]
    fn responsive_translates_by_pixels() {
        let mut state = responsive(10, 4.0);
        state.next();
        state.next();
        assert_eq!(state.frame().offset, TrackOffset::Pixels(400.0));
    }

    #[test]
    fn zero_width_measurement_is_skipped() {
        let mut state = CarouselState::create(items(7), None).expect("non-empty");
        let before = state.clone();
        let result = state.recompute_on_resize(LayoutMetrics {
            viewport_width: 1000.0,
            item_width: 0.0,
        });
        assert_eq!(result, Recompute::Skipped);
        assert_eq!(state.items_per_page(), before.items_per_page());
        assert_eq!(state.max_index(), before.max_index());
    }

    #[test]
    fn responsive_page_size_rounds() {
        let mut state = CarouselState::create(items(10), None).expect("non-empty");
        state.recompute_on_resize(LayoutMetrics {
            viewport_width: 1100.0,
            item_width: 240.0,
        });
        // 4.58 rounds to 5
        assert_eq!(state.items_per_page(), 5);
        assert_eq!(state.max_index(), 5);
    }

    #[test]
    fn shrinking_page_keeps_index_when_still_valid() {
        // 7 items at 5 per page: max index 2
        let mut state = responsive(7, 5.0);
        state.next();
        state.next();
        assert_eq!((state.current_index(), state.max_index()), (2, 2));

        let result = state.recompute_on_resize(LayoutMetrics {
            viewport_width: 600.0,
            item_width: 200.0,
        });
        assert_eq!(result, Recompute::Updated);
        assert_eq!(state.items_per_page(), 3);
        assert_eq!(state.max_index(), 4);
        assert_eq!(state.current_index(), 2);
        assert!(!state.frame().next.is_disabled());
    }

    #[test]
    fn growing_page_clamps_index() {
        let mut state = responsive(7, 3.0);
        for _ in 0..4 {
            state.next();
        }
        assert_eq!(state.current_index(), 4);

        state.recompute_on_resize(LayoutMetrics {
            viewport_width: 1200.0,
            item_width: 200.0,
        });
        assert_eq!(state.items_per_page(), 6);
        assert_eq!(state.max_index(), 1);
        assert_eq!(state.current_index(), 1);
        assert!(state.frame().next.is_disabled());
    }

    #[test]
    fn identical_measurement_is_unchanged() {
        let mut state = responsive(7, 3.0);
        let result = state.recompute_on_resize(LayoutMetrics {
            viewport_width: 600.0,
            item_width: 200.0,
        });
        assert_eq!(result, Recompute::Unchanged);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = CarouselState::create(items(7), Some(2)).expect("non-empty");
        let b = CarouselState::create(items(7), Some(2)).expect("non-empty");
        a.next();
        assert_eq!(a.current_index(), 1);
        assert_eq!(b.current_index(), 0);
    }
}
