//! Embedded assets for Jisrubyy Web
//!
//! Uses rust-embed to bundle brand images at compile time, layered over the
//! gpui-component icon set.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "brand/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Brand images win over component icons of the same name
        Self::get(path)
            .or_else(|| ComponentAssets::get(path))
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .chain(ComponentAssets::iter())
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

/// Brand images shipped with the app
#[derive(Debug, Clone, Copy)]
pub enum BrandImage {
    /// Round brand logo
    Logo,
    /// "Buy me a coffee" button
    Donation,
}

impl BrandImage {
    /// Asset path of the image
    pub fn path(self) -> SharedString {
        match self {
            BrandImage::Logo => "brand/logo.svg",
            BrandImage::Donation => "brand/donation.svg",
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_images_are_embedded() {
        for image in [BrandImage::Logo, BrandImage::Donation] {
            assert!(Assets::get(&image.path()).is_some(), "{image:?} missing");
        }
    }

    #[test]
    fn lists_brand_directory() {
        let listed = Assets.list("brand/").expect("list brand assets");
        assert!(listed.iter().any(|p| p.ends_with("/logo.svg")));
        assert!(listed.iter().all(|p| p.starts_with("brand/")));
    }

    #[test]
    fn unknown_asset_is_an_error() {
        assert!(Assets.load("brand/missing.svg").is_err());
        assert!(matches!(Assets.load(""), Ok(None)));
    }
}
