//! Embedded assets for Wayfare
//!
//! Uses rust-embed to bundle icons and the default catalog at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Path of the catalog document served when no other source is configured
pub const BUNDLED_CATALOG_PATH: &str = "data/catalog.json";

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Component icons first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// The catalog document compiled into the binary
pub fn bundled_catalog() -> crate::error::Result<String> {
    let file = Assets::get(BUNDLED_CATALOG_PATH).ok_or_else(|| crate::error::Error::MissingAsset {
        path: BUNDLED_CATALOG_PATH.to_string(),
    })?;
    decode_catalog(&file.data)
}

fn decode_catalog(bytes: &[u8]) -> crate::error::Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| crate::error::Error::Invalid {
            message: format!("{BUNDLED_CATALOG_PATH} is not valid UTF-8: {e}"),
        })
}

/// Icons bundled with the app, on top of gpui-component's set
pub enum CustomIconName {
    /// Brand mark in the header
    Compass,
    /// Locale switch
    Languages,
}

impl CustomIconName {
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Compass => "icons/compass.svg",
            CustomIconName::Languages => "icons/languages.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}
