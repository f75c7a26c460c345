//! Landing Page View
//!
//! The scrolling page: header slot, hero with the search box, one section per
//! category, footer. Drawer, pinned header and alert are layered on top.

use std::time::Duration;

use gpui::{
    AnyElement, Context, Entity, Subscription, Task, Window, div, prelude::*, px,
};
use gpui_component::{
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
    v_flex,
};
use rust_i18n::t;

use crate::components::carousel::{Carousel, CarouselState};
use crate::components::composite::modal::AlertModal;
use crate::components::layout::drawer::NavDrawer;
use crate::components::layout::header::PageHeader;
use crate::constants::HEADER_HEIGHT;
use crate::domain::Category;
use crate::states::{
    CarouselHandle, LandingState, PageAlert, SectionContent, WayfareGlobalStore, i18n_common,
    i18n_search, i18n_sections, update_app_state_and_save,
};
use crate::theme::colors::WayfareColors;

/// Quiet period before resized window bounds are persisted
const BOUNDS_SAVE_DELAY_MS: u64 = 500;

/// What a section renders this frame
enum SectionView {
    Placeholder,
    Carousel(CarouselHandle, CarouselState),
}

pub struct LandingPage {
    landing: Entity<LandingState>,
    search_input: Entity<InputState>,
    _bounds_save_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl LandingPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<WayfareGlobalStore>();
        let landing = store.landing_state();
        let app_state = store.app_state();

        let search_input = cx.new(|cx| {
            let locale = cx.global::<WayfareGlobalStore>().read(cx).locale().to_string();
            let placeholder = t!("search.placeholder", locale = &locale).to_string();
            InputState::new(window, cx).placeholder(placeholder)
        });

        let mut subscriptions = Vec::new();
        subscriptions.push(cx.observe(&landing, |_this, _model, cx| cx.notify()));
        // Locale changes re-render every label
        subscriptions.push(cx.observe(&app_state, |_this, _model, cx| cx.notify()));
        subscriptions.push(cx.observe_window_bounds(window, |this, window, cx| {
            this.on_window_resized(window, cx);
        }));

        Self {
            landing,
            search_input,
            _bounds_save_task: None,
            _subscriptions: subscriptions,
        }
    }

    fn on_window_resized(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.landing.update(cx, |state, cx| state.schedule_recompute(cx));

        let bounds = window.bounds();
        self._bounds_save_task = Some(cx.spawn(async move |_this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(BOUNDS_SAVE_DELAY_MS))
                .await;
            let _ = cx.update(|cx| {
                update_app_state_and_save(cx, "save_window_bounds", move |state, _cx| {
                    state.set_bounds(bounds);
                });
            });
        }));
    }

    fn render_hero(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let landing = self.landing.clone();

        v_flex()
            .w_full()
            .py_12()
            .px_6()
            .gap_4()
            .items_center()
            .bg(WayfareColors::hero_bg())
            .child(
                div()
                    .text_size(px(28.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(WayfareColors::text_light())
                    .child(i18n_common(cx, "app_title")),
            )
            .child(
                h_flex()
                    .w(px(560.0))
                    .gap_2()
                    .p_2()
                    .rounded_lg()
                    .bg(WayfareColors::content_bg())
                    .child(Input::new(&self.search_input).flex_1())
                    .child(
                        Button::new("search-button")
                            .primary()
                            .label(i18n_search(cx, "button"))
                            .on_click(move |_, _, cx| {
                                landing.update(cx, |state, cx| state.show_search_alert(cx));
                            }),
                    ),
            )
    }

    fn render_section(
        &self,
        category: Category,
        view: SectionView,
        loading: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content: AnyElement = match view {
            SectionView::Carousel(handle, state) => {
                Carousel::new(handle, state, self.landing.clone()).into_any_element()
            }
            SectionView::Placeholder => {
                let key = if loading { "loading" } else { "empty_section" };
                div()
                    .h(px(80.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(WayfareColors::text_muted())
                    .child(i18n_common(cx, key))
                    .into_any_element()
            }
        };

        v_flex()
            .id(category.anchor())
            .w_full()
            .px_6()
            .py_6()
            .gap_3()
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(WayfareColors::text_primary())
                    .child(i18n_sections(cx, category.title_key())),
            )
            .child(content)
    }
}

impl Render for LandingPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.landing.read(cx);
        let header_mode = state.current_header_mode();
        let drawer = state.drawer();
        let alert = state.alert();
        let loading = state.load_state().is_loading();
        let scroll_handle = state.scroll_handle().clone();
        let sections: Vec<(Category, SectionView)> = state
            .model()
            .sections()
            .iter()
            .map(|section| {
                let view = match (section.content(), state.model().handle_for(section.category())) {
                    (SectionContent::Carousel { state: carousel, .. }, Some(handle)) => {
                        SectionView::Carousel(handle, carousel.clone())
                    }
                    _ => SectionView::Placeholder,
                };
                (section.category(), view)
            })
            .collect();

        let hero = self.render_hero(cx);
        let section_elements: Vec<_> = sections
            .into_iter()
            .map(|(category, view)| self.render_section(category, view, loading, cx).into_any_element())
            .collect();

        let scroll_landing = self.landing.clone();
        let alert_landing = self.landing.clone();

        // Child order inside the scroll container must match SECTION_CHILD_OFFSET
        let page = v_flex()
            .id("page-scroll")
            .size_full()
            .overflow_y_scroll()
            .track_scroll(&scroll_handle)
            .on_scroll_wheel(move |_event, _window, cx| {
                scroll_landing.update(cx, |state, cx| state.on_user_scroll(cx));
            })
            .map(|el| {
                if header_mode.is_sticky() {
                    el.child(div().h(px(HEADER_HEIGHT)).flex_shrink_0())
                } else {
                    el.child(PageHeader::new(header_mode, self.landing.clone()))
                }
            })
            .child(hero)
            .children(section_elements)
            .child(
                div()
                    .w_full()
                    .py_8()
                    .flex()
                    .justify_center()
                    .text_sm()
                    .text_color(WayfareColors::text_muted())
                    .child(i18n_common(cx, "footer")),
            );

        div()
            .size_full()
            .relative()
            .bg(WayfareColors::background())
            .child(page)
            .when(header_mode.is_sticky(), |el| {
                el.child(
                    div()
                        .absolute()
                        .top_0()
                        .left_0()
                        .right_0()
                        .child(PageHeader::new(header_mode, self.landing.clone())),
                )
            })
            .child(NavDrawer::new(drawer, self.landing.clone()))
            .when_some(alert, |el, alert| match alert {
                PageAlert::SearchNotImplemented => el.child(
                    AlertModal::new(
                        i18n_search(cx, "alert_title"),
                        i18n_search(cx, "not_implemented"),
                        i18n_common(cx, "close"),
                    )
                    .on_close(move |cx| {
                        alert_landing.update(cx, |state, cx| state.dismiss_alert(cx));
                    }),
                ),
            })
    }
}
