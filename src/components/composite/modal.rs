//! Alert Modal
//!
//! A blocking message dialog over a dimmed backdrop, dismissed by its close
//! control or its confirm button.

use gpui::{
    App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString, Window, div,
    prelude::*, px,
};
use gpui_component::button::{Button, ButtonVariants};
use std::rc::Rc;

use crate::theme::colors::WayfareColors;

#[derive(IntoElement)]
pub struct AlertModal {
    title: SharedString,
    message: SharedString,
    confirm_label: SharedString,
    on_close: Option<Rc<dyn Fn(&mut App) + 'static>>,
}

impl AlertModal {
    pub fn new(
        title: impl Into<SharedString>,
        message: impl Into<SharedString>,
        confirm_label: impl Into<SharedString>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            on_close: None,
        }
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for AlertModal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;
        let on_close_button = on_close.clone();

        // Backdrop swallows clicks so the page below stays inert
        div()
            .id("alert-backdrop")
            .absolute()
            .inset_0()
            .bg(WayfareColors::overlay())
            .flex()
            .items_center()
            .justify_center()
            .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
            .child(
                div()
                    .id("alert-dialog")
                    .bg(WayfareColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(360.0))
                    .max_w(px(520.0))
                    .flex()
                    .flex_col()
                    .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(WayfareColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(WayfareColors::text_primary())
                                    .child(self.title),
                            )
                            .child(
                                div()
                                    .id("alert-close")
                                    .size(px(24.0))
                                    .rounded_sm()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(WayfareColors::text_muted())
                                    .text_size(px(16.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(WayfareColors::hover()))
                                    .when_some(on_close, |el, handler| {
                                        el.on_click(move |_event: &ClickEvent, _window, cx| {
                                            handler(cx);
                                        })
                                    })
                                    .child("×"),
                            ),
                    )
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .text_color(WayfareColors::text_secondary())
                            .child(self.message),
                    )
                    .child(
                        div().px_6().pb_4().flex().justify_end().child(
                            Button::new("alert-confirm")
                                .primary()
                                .label(self.confirm_label)
                                .when_some(on_close_button, |el, handler| {
                                    el.on_click(move |_, _, cx| handler(cx))
                                }),
                        ),
                    ),
            )
    }
}
