//! Header Component
//!
//! Brand, menu button, section links and the language switcher. The page
//! decides whether the bar scrolls with the content or is pinned.

use gpui::{
    App, Corner, Entity, IntoElement, ParentElement, RenderOnce, SharedString, Window, div,
    prelude::*, px,
};
use gpui_component::{
    Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    menu::{DropdownMenu, PopupMenu},
};

use crate::assets::CustomIconName;
use crate::components::primitives::nav_link::NavLink;
use crate::constants::HEADER_HEIGHT;
use crate::domain::Category;
use crate::states::{
    AnchorOrigin, DrawerEvent, HeaderMode, LandingState, LocaleAction, WayfareGlobalStore,
    i18n_common, i18n_nav,
};
use crate::theme::colors::WayfareColors;

#[derive(IntoElement)]
pub struct PageHeader {
    mode: HeaderMode,
    landing: Entity<LandingState>,
}

impl PageHeader {
    pub fn new(mode: HeaderMode, landing: Entity<LandingState>) -> Self {
        Self { mode, landing }
    }

    fn render_locale_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let locale = cx.global::<WayfareGlobalStore>().read(cx).locale();

        menu.label(i18n_common(cx, "language"))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .menu_with_check("한국어", locale == "ko", Box::new(LocaleAction::Ko))
    }
}

impl RenderOnce for PageHeader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let open_landing = self.landing.clone();

        let links = Category::all().iter().map(|category| {
            let anchor = category.anchor();
            NavLink::new(
                SharedString::from(format!("header-link-{anchor}")),
                format!("#{anchor}"),
                i18n_nav(cx, anchor),
                AnchorOrigin::Header,
                self.landing.clone(),
            )
            .text_color(WayfareColors::text_light())
            .hover_bg(WayfareColors::hover_dark())
        });

        h_flex()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_shrink_0()
            .px_4()
            .gap_4()
            .items_center()
            .justify_between()
            .bg(WayfareColors::header_bg())
            .when(self.mode.is_sticky(), |el| el.shadow_md())
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::new("open-drawer")
                            .icon(IconName::Menu)
                            .ghost()
                            .tooltip(i18n_common(cx, "menu"))
                            .on_click(move |_, _, cx| {
                                open_landing.update(cx, |state, cx| {
                                    state.apply_drawer(DrawerEvent::OpenRequested, cx);
                                });
                            }),
                    )
                    // The brand link points at "#" and is never consumed
                    .child(
                        NavLink::new(
                            "brand-link",
                            "#",
                            i18n_common(cx, "app_title"),
                            AnchorOrigin::Header,
                            self.landing.clone(),
                        )
                        .text_color(WayfareColors::text_light()),
                    )
                    .child(Icon::from(CustomIconName::Compass).text_color(WayfareColors::accent())),
            )
            .child(div().flex_1().overflow_hidden().child(h_flex().gap_1().children(links)))
            .child(
                Button::new("locale-switch")
                    .icon(Icon::from(CustomIconName::Languages))
                    .small()
                    .ghost()
                    .tooltip(i18n_common(cx, "language"))
                    .dropdown_menu(move |menu, window, cx| Self::render_locale_menu(menu, window, cx))
                    .anchor(Corner::TopRight),
            )
    }
}
