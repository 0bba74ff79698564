//! Input for the language dropdown view.
//!
//! The view itself is a host concern; this module only prepares the data it
//! consumes: the resolved catalog, the record matching the active locale, and
//! flag icon references with a guaranteed fallback.

use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::LocaleRecord;
use crate::config::SwitcherConfig;

/// Placeholder icon identifier used when no flag asset matches a region.
pub const GENERIC_FLAG_ICON: &str = "language";

/// Everything the dropdown view needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuContext {
    /// Record matching the active locale, if it appears in the catalog.
    pub current_language: Option<LocaleRecord>,
    /// The full catalog, in configured order.
    pub other_languages: Vec<LocaleRecord>,
    pub show_flags: bool,
    /// Rendered as a floating overlay (auth pages) instead of inline.
    pub floating: bool,
}

/// Build the menu context for the active locale.
pub fn menu_context(config: &SwitcherConfig, active_locale: &str, floating: bool) -> MenuContext {
    let locales = config.resolve_locales();
    let current_language = locales.iter().find(|r| r.code == active_locale).cloned();
    MenuContext {
        current_language,
        other_languages: locales,
        show_flags: config.show_flags,
        floating,
    }
}

/// Resolver from region identifier to a flag icon reference.
///
/// May fail per-code; rendering goes through [`flag_icon`], which substitutes
/// the generic placeholder instead of erroring the page.
pub trait FlagAssets: Send + Sync {
    fn icon_for(&self, region: &str) -> Option<String>;
}

/// Flag icon reference for a region, falling back to the generic placeholder.
pub fn flag_icon(assets: &dyn FlagAssets, region: &str) -> String {
    assets
        .icon_for(region)
        .unwrap_or_else(|| GENERIC_FLAG_ICON.to_string())
}

/// Flag assets stored as `{region}.svg` files in a directory.
#[derive(Debug, Clone)]
pub struct FsFlagAssets {
    root: PathBuf,
}

impl FsFlagAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FlagAssets for FsFlagAssets {
    fn icon_for(&self, region: &str) -> Option<String> {
        let path = self.root.join(format!("{region}.svg"));
        if path.is_file() {
            path.to_str().map(str::to_string)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config() -> SwitcherConfig {
        SwitcherConfig::new().locales(["en", "fr", "de"])
    }

    // ==================== MenuContext Tests ====================

    #[test]
    fn test_current_language_matches_active_locale() {
        let context = menu_context(&test_config(), "fr", false);
        let current = context.current_language.expect("current language");
        assert_eq!(current.code, "fr");
        assert_eq!(current.name, "Français");
    }

    #[test]
    fn test_active_locale_outside_catalog_has_no_current() {
        let context = menu_context(&test_config(), "ja", false);
        assert!(context.current_language.is_none());
        // The catalog itself is unaffected.
        assert_eq!(context.other_languages.len(), 3);
    }

    #[test]
    fn test_catalog_order_is_configured_order() {
        let context = menu_context(&test_config(), "en", false);
        let codes: Vec<_> = context
            .other_languages
            .iter()
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(codes, vec!["en", "fr", "de"]);
    }

    #[test]
    fn test_flags_and_floating_passed_through() {
        let config = test_config().show_flags(false);
        let context = menu_context(&config, "en", true);
        assert!(!context.show_flags);
        assert!(context.floating);
    }

    #[test]
    fn test_context_serializes_for_templates() {
        let context = menu_context(&test_config(), "en", false);
        let json = serde_json::to_value(&context).expect("serialize");
        assert_eq!(json["current_language"]["code"], "en");
        assert_eq!(json["other_languages"][1]["name"], "Français");
    }

    // ==================== Flag Asset Tests ====================

    #[test]
    fn test_missing_asset_falls_back_to_placeholder() {
        let tmp = TempDir::new().expect("temp dir");
        let assets = FsFlagAssets::new(tmp.path());
        assert_eq!(flag_icon(&assets, "zz"), GENERIC_FLAG_ICON);
    }

    #[test]
    fn test_existing_asset_is_used() {
        let tmp = TempDir::new().expect("temp dir");
        std::fs::write(tmp.path().join("fr.svg"), "<svg/>").expect("write");
        let assets = FsFlagAssets::new(tmp.path());
        let icon = flag_icon(&assets, "fr");
        assert!(icon.ends_with("fr.svg"));
    }
}
