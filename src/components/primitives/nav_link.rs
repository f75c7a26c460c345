//! NavLink Component
//!
//! An in-page anchor link. Clicks resolve the href through the landing state
//! and stop propagation only when the link was consumed.

use gpui::{
    App, ElementId, Entity, IntoElement, ParentElement, Rgba, RenderOnce, SharedString, Window,
    div, prelude::*, px,
};

use crate::states::{AnchorOrigin, LandingState};

#[derive(IntoElement)]
pub struct NavLink {
    id: ElementId,
    href: SharedString,
    label: SharedString,
    origin: AnchorOrigin,
    landing: Entity<LandingState>,
    text_color: Option<Rgba>,
    hover_bg: Option<Rgba>,
}

impl NavLink {
    pub fn new(
        id: impl Into<ElementId>,
        href: impl Into<SharedString>,
        label: impl Into<SharedString>,
        origin: AnchorOrigin,
        landing: Entity<LandingState>,
    ) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            label: label.into(),
            origin,
            landing,
            text_color: None,
            hover_bg: None,
        }
    }

    pub fn text_color(mut self, color: Rgba) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn hover_bg(mut self, color: Rgba) -> Self {
        self.hover_bg = Some(color);
        self
    }
}

impl RenderOnce for NavLink {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let href = self.href;
        let origin = self.origin;
        let landing = self.landing;

        div()
            .id(self.id)
            .px_3()
            .py_1()
            .rounded_md()
            .text_size(px(14.0))
            .cursor_pointer()
            .when_some(self.text_color, |el, color| el.text_color(color))
            .when_some(self.hover_bg, |el, color| el.hover(move |s| s.bg(color)))
            .on_click(move |_event, _window, cx| {
                let consumed = landing.update(cx, |state, cx| state.follow_anchor(&href, origin, cx));
                if consumed {
                    cx.stop_propagation();
                }
            })
            .child(self.label)
    }
}
