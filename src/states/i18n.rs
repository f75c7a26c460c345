//! Internationalization Helpers
//!
//! Translate strings for the current locale, one helper per namespace.

use super::WayfareGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<WayfareGlobalStore>().read(cx).locale();
    t!(format!("common.{key}"), locale = locale).to_string().into()
}

/// Get translated string from "nav" namespace
pub fn i18n_nav(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<WayfareGlobalStore>().read(cx).locale();
    t!(format!("nav.{key}"), locale = locale).to_string().into()
}

/// Get translated string from "sections" namespace
pub fn i18n_sections(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<WayfareGlobalStore>().read(cx).locale();
    t!(format!("sections.{key}"), locale = locale).to_string().into()
}

/// Get translated string from "search" namespace
pub fn i18n_search(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<WayfareGlobalStore>().read(cx).locale();
    t!(format!("search.{key}"), locale = locale).to_string().into()
}

#[cfg(test)]
mod tests {
    use rust_i18n::t;

    #[test]
    fn both_locales_have_the_search_alert() {
        let en = t!("search.not_implemented", locale = "en").to_string();
        let ko = t!("search.not_implemented", locale = "ko").to_string();
        assert!(en.contains("not implemented"));
        assert!(ko.contains("구현되지 않았습니다"));
    }

    #[test]
    fn section_titles_exist_for_every_category() {
        for category in crate::domain::Category::all() {
            let key = format!("sections.{}", category.title_key());
            let text = t!(&key, locale = "en").to_string();
            assert!(!text.contains(&key), "missing translation for {key}");
        }
    }
}
