//! Drawer Component
//!
//! Slide-out navigation panel and the overlay behind it. The drawer sits at
//! its closed offset off-screen and moves to 0 when open.

use gpui::{
    App, Entity, IntoElement, ParentElement, RenderOnce, SharedString, Window, div, prelude::*,
    px,
};
use gpui_component::{
    IconName,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use crate::components::primitives::nav_link::NavLink;
use crate::constants::{DRAWER_WIDTH, HEADER_HEIGHT};
use crate::domain::Category;
use crate::states::{AnchorOrigin, DrawerEvent, DrawerState, LandingState, i18n_common, i18n_nav};
use crate::theme::colors::WayfareColors;

#[derive(IntoElement)]
pub struct NavDrawer {
    state: DrawerState,
    landing: Entity<LandingState>,
}

impl NavDrawer {
    pub fn new(state: DrawerState, landing: Entity<LandingState>) -> Self {
        Self { state, landing }
    }
}

impl RenderOnce for NavDrawer {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let overlay_landing = self.landing.clone();
        let close_landing = self.landing.clone();

        let links = Category::all().iter().map(|category| {
            let anchor = category.anchor();
            NavLink::new(
                SharedString::from(format!("drawer-link-{anchor}")),
                format!("#{anchor}"),
                i18n_nav(cx, anchor),
                AnchorOrigin::Drawer,
                self.landing.clone(),
            )
            .text_color(WayfareColors::text_light())
            .hover_bg(WayfareColors::hover_dark())
        });

        div()
            .absolute()
            .inset_0()
            .when(self.state.overlay_active(), |el| {
                el.child(
                    div()
                        .id("drawer-overlay")
                        .absolute()
                        .inset_0()
                        .bg(WayfareColors::overlay())
                        .on_click(move |_, _, cx| {
                            overlay_landing.update(cx, |state, cx| {
                                state.apply_drawer(DrawerEvent::OverlayClicked, cx);
                            });
                        }),
                )
            })
            .child(
                v_flex()
                    .id("drawer")
                    .absolute()
                    .top_0()
                    .bottom_0()
                    .left(px(self.state.left_offset()))
                    .w(px(DRAWER_WIDTH))
                    .bg(WayfareColors::drawer_bg())
                    .shadow_lg()
                    .occlude()
                    .child(
                        h_flex()
                            .h(px(HEADER_HEIGHT))
                            .px_4()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_color(WayfareColors::text_light())
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(i18n_nav(cx, "title")),
                            )
                            .child(
                                Button::new("close-drawer")
                                    .icon(IconName::Close)
                                    .ghost()
                                    .tooltip(i18n_common(cx, "close"))
                                    .on_click(move |_, _, cx| {
                                        close_landing.update(cx, |state, cx| {
                                            state.apply_drawer(DrawerEvent::CloseRequested, cx);
                                        });
                                    }),
                            ),
                    )
                    .child(v_flex().px_2().gap_1().children(links)),
            )
    }
}
