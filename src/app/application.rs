//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{DrawerAction, MenuAction, new_key_bindings};
use crate::states::{
    DiagnosticSource, DrawerEvent, LandingState, LocaleAction, WayfareAppState, WayfareGlobalStore,
    update_app_state_and_save,
};
use crate::views::LandingPage;

fn register_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &DrawerAction, cx: &mut App| {
        let event = match action {
            DrawerAction::Open => DrawerEvent::OpenRequested,
            DrawerAction::Close => DrawerEvent::CloseRequested,
        };
        let landing = cx.global::<WayfareGlobalStore>().landing_state();
        landing.update(cx, |state, cx| state.apply_drawer(event, cx));
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = action.code().to_string();
        info!(locale = %locale, "Switching locale");
        update_app_state_and_save(cx, "set_locale", move |state, _cx| {
            state.set_locale(locale);
        });
    });
}

/// Run the Wayfare application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let (app_state, settings_error) = match WayfareAppState::try_load() {
            Ok(state) => (state, None),
            Err(e) => {
                error!(error = %e, "Falling back to default settings");
                (WayfareAppState::new(), Some(e.to_string()))
            }
        };

        let source = app_state.catalog_source().clone();
        let bounds = app_state.bounds().cloned().unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });
        let landing = cx.new(|_cx| {
            LandingState::new(app_state.items_per_page(), app_state.sticky_threshold())
        });
        let app_state = cx.new(|_cx| app_state);
        cx.set_global(WayfareGlobalStore::new(app_state, landing.clone()));

        landing.update(cx, |state, cx| {
            if let Some(message) = settings_error {
                state.record_diagnostic(DiagnosticSource::Settings, message);
            }
            state.load(source, cx);
        });

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Wayfare")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let page = cx.new(|cx| LandingPage::new(window, cx));
            let view: AnyView = page.into();
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
