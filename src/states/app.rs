//! Application State
//!
//! Persisted settings (locale, window bounds, catalog source, carousel and
//! header tuning) plus the global store that hands them to views.

use crate::constants::STICKY_HEADER_THRESHOLD;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::CatalogSource;
use crate::states::LandingState;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

// ==================== Actions ====================

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Ko,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Ko => "ko",
        }
    }
}

// ==================== Persisted State ====================

const CONFIG_FILE_NAME: &str = "wayfare.toml";
const SUPPORTED_LOCALES: [&str; 2] = ["en", "ko"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub source: CatalogSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselSettings {
    /// Pins the page size; absent means the page size follows the window
    pub items_per_page: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderSettings {
    #[serde(default = "default_sticky_threshold")]
    pub sticky_threshold: f32,
}

fn default_sticky_threshold() -> f32 {
    STICKY_HEADER_THRESHOLD
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            sticky_threshold: STICKY_HEADER_THRESHOLD,
        }
    }
}

/// Persisted application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WayfareAppState {
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    #[serde(default)]
    catalog: CatalogSettings,
    #[serde(default)]
    carousel: CarouselSettings,
    #[serde(default)]
    header: HeaderSettings,
}

impl WayfareAppState {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let mut state = Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                state.locale = Some(lang.to_string());
            }
        }

        Ok(state)
    }

    /// Parse settings text; blank text yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    /// Active locale, falling back to English for unsupported languages
    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some(locale) if SUPPORTED_LOCALES.contains(&locale) => locale,
            _ => "en",
        }
    }

    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog.source
    }

    pub fn items_per_page(&self) -> Option<usize> {
        self.carousel.items_per_page
    }

    pub fn sticky_threshold(&self) -> f32 {
        self.header.sticky_threshold
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<WayfareGlobalStore>()`
#[derive(Clone)]
pub struct WayfareGlobalStore {
    app_state: Entity<WayfareAppState>,
    landing_state: Entity<LandingState>,
}

impl WayfareGlobalStore {
    pub fn new(app_state: Entity<WayfareAppState>, landing_state: Entity<LandingState>) -> Self {
        Self {
            app_state,
            landing_state,
        }
    }

    pub fn app_state(&self) -> Entity<WayfareAppState> {
        self.app_state.clone()
    }

    pub fn landing_state(&self) -> Entity<LandingState> {
        self.landing_state.clone()
    }

    pub fn read<'a>(&self, cx: &'a App) -> &'a WayfareAppState {
        self.app_state.read(cx)
    }

    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut WayfareAppState, &mut Context<WayfareAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for WayfareGlobalStore {}

// ==================== Persistence ====================

/// Save settings to disk
pub fn save_app_state(state: &WayfareAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update settings and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut WayfareAppState, &App) + Send + 'static,
{
    let store = cx.global::<WayfareGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_file_yields_defaults() {
        let state = WayfareAppState::parse("  \n").expect("defaults");
        assert_eq!(state.catalog_source(), &CatalogSource::Bundled);
        assert_eq!(state.items_per_page(), None);
        assert_eq!(state.sticky_threshold(), STICKY_HEADER_THRESHOLD);
        assert_eq!(state.locale(), "en");
    }

    #[test]
    fn parses_all_sections() {
        let text = r#"
locale = "ko"

[catalog]
source = { url = "https://travel.example.com/data.json" }

[carousel]
items_per_page = 4

[header]
sticky_threshold = 150.0
"#;
        let state = WayfareAppState::parse(text).expect("valid settings");
        assert_eq!(state.locale(), "ko");
        assert_eq!(state.items_per_page(), Some(4));
        assert_eq!(state.sticky_threshold(), 150.0);
        assert!(matches!(state.catalog_source(), CatalogSource::Url { url } if url.ends_with("data.json")));
    }

    #[test]
    fn unsupported_locale_falls_back() {
        let state = WayfareAppState::parse(r#"locale = "fr""#).expect("valid settings");
        assert_eq!(state.locale(), "en");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(WayfareAppState::parse("locale = ").is_err());
    }

    #[test]
    fn settings_survive_a_save_cycle() {
        let mut state = WayfareAppState::parse("[carousel]\nitems_per_page = 3\n").expect("valid");
        state.set_locale("ko".to_string());
        let text = toml::to_string(&state).expect("serializes");
        let reloaded = WayfareAppState::parse(&text).expect("reparses");
        assert_eq!(reloaded.locale(), "ko");
        assert_eq!(reloaded.items_per_page(), Some(3));
    }
}
