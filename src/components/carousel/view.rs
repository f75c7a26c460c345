//! Carousel View
//!
//! Viewport, track and navigation controls for one mounted carousel.

use gpui::{
    AnyElement, App, Bounds, Entity, IntoElement, ParentElement, Pixels, RenderOnce, SharedString,
    StyledImage, Window, canvas, div, img, prelude::*, px, relative,
};
use gpui_component::{
    Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

use crate::components::carousel::{CarouselState, ControlState, PagePolicy, TrackOffset};
use crate::constants::{CARD_GUTTER, CARD_IMAGE_HEIGHT, CARD_SLOT_WIDTH};
use crate::domain::CarouselItem;
use crate::states::{CarouselHandle, LandingState, i18n_common};
use crate::theme::colors::WayfareColors;

#[derive(IntoElement)]
pub struct Carousel {
    handle: CarouselHandle,
    state: CarouselState,
    landing: Entity<LandingState>,
}

impl Carousel {
    pub fn new(handle: CarouselHandle, state: CarouselState, landing: Entity<LandingState>) -> Self {
        Self {
            handle,
            state,
            landing,
        }
    }

    fn render_card(
        item: &CarouselItem,
        policy: PagePolicy,
        per_page: usize,
        probe: Option<AnyElement>,
    ) -> impl IntoElement {
        let image: SharedString = item.image.clone().into();

        div()
            .relative()
            .flex_shrink_0()
            .map(|el| match policy {
                PagePolicy::Fixed => el.w(relative(1.0 / per_page as f32)),
                PagePolicy::Responsive => el.w(px(CARD_SLOT_WIDTH)),
            })
            .px(px(CARD_GUTTER / 2.0))
            .child(
                v_flex()
                    .bg(WayfareColors::content_bg())
                    .rounded_lg()
                    .overflow_hidden()
                    .border_1()
                    .border_color(WayfareColors::border())
                    .child(
                        img(image)
                            .w_full()
                            .h(px(CARD_IMAGE_HEIGHT))
                            .object_fit(gpui::ObjectFit::Cover)
                            .with_fallback(|| {
                                div()
                                    .w_full()
                                    .h(px(CARD_IMAGE_HEIGHT))
                                    .bg(WayfareColors::image_placeholder())
                                    .into_any_element()
                            }),
                    )
                    .child(
                        v_flex()
                            .p_3()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(15.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(WayfareColors::text_primary())
                                    .truncate()
                                    .child(item.title_text()),
                            )
                            .child(
                                Label::new(item.description_text())
                                    .text_sm()
                                    .text_color(WayfareColors::text_secondary()),
                            ),
                    ),
            )
            .children(probe)
    }

    fn render_control(
        &self,
        direction: &'static str,
        control: ControlState,
        cx: &App,
    ) -> impl IntoElement {
        let handle = self.handle;
        let landing = self.landing.clone();
        let is_next = direction == "next";
        let (icon, label_key) = if is_next {
            (IconName::ChevronRight, "next")
        } else {
            (IconName::ChevronLeft, "previous")
        };

        Button::new(SharedString::from(format!("{}-{direction}", handle.category().handle())))
            .icon(icon)
            .small()
            .ghost()
            .tooltip(i18n_common(cx, label_key))
            .disabled(control.is_disabled())
            .bg(if control.is_disabled() {
                WayfareColors::control_disabled_bg()
            } else {
                WayfareColors::control_bg()
            })
            .rounded_full()
            .on_click(move |_, _, cx| {
                landing.update(cx, |state, cx| {
                    if is_next {
                        state.next(handle, cx);
                    } else {
                        state.prev(handle, cx);
                    }
                });
            })
    }
}

impl RenderOnce for Carousel {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let frame = self.state.frame();
        let policy = self.state.policy();
        let per_page = self.state.items_per_page();
        let category = self.handle.category();

        let viewport_probe = {
            let landing = self.landing.clone();
            canvas(
                move |bounds: Bounds<Pixels>, _window, cx| {
                    landing.update(cx, |state, _| {
                        state.record_viewport_width(category, f32::from(bounds.size.width));
                    });
                },
                |_, _, _, _| {},
            )
            .absolute()
            .size_full()
        };

        let item_probe = {
            let landing = self.landing.clone();
            canvas(
                move |bounds: Bounds<Pixels>, _window, cx| {
                    landing.update(cx, |state, _| {
                        state.record_item_width(category, f32::from(bounds.size.width));
                    });
                },
                |_, _, _, _| {},
            )
            .absolute()
            .size_full()
        };

        // The first card's slot is measured for the responsive page size
        let mut item_probe = Some(item_probe.into_any_element());
        let cards: Vec<_> = self
            .state
            .items()
            .iter()
            .map(|item| Self::render_card(item, policy, per_page, item_probe.take()))
            .collect();

        let track = h_flex()
            .relative()
            .w_full()
            .items_start()
            .map(|el| match frame.offset {
                TrackOffset::Pixels(x) => el.left(px(-x)),
                TrackOffset::Percent(p) => el.left(relative(-p / 100.0)),
            })
            .children(cards);

        h_flex()
            .id(SharedString::from(category.handle()))
            .w_full()
            .items_center()
            .gap_2()
            .child(self.render_control("prev", frame.prev, cx))
            .child(
                div()
                    .relative()
                    .flex_1()
                    .overflow_hidden()
                    .child(viewport_probe)
                    .child(track),
            )
            .child(self.render_control("next", frame.next, cx))
    }
}
