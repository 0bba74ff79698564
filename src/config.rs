use std::fmt;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::catalog::{self, FsLocaleScanner, LocaleInput, LocaleRecord, LocaleScanner};

/// How long a switched locale is remembered via cookie across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RememberPreference {
    /// Do not persist the choice beyond the session.
    #[default]
    None,
    /// Persist with a non-expiring cookie.
    Forever,
    /// Persist for the given number of days.
    Days(u32),
}

impl RememberPreference {
    /// Parse an environment value: unset/empty -> `None`, `forever` ->
    /// `Forever`, a number -> `Days(n)`.
    fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(RememberPreference::None);
        }
        if value.eq_ignore_ascii_case("forever") {
            return Ok(RememberPreference::Forever);
        }
        match value.parse::<u32>() {
            Ok(days) => Ok(RememberPreference::Days(days)),
            Err(_) => bail!(
                "invalid REMEMBER_LOCALE value: {value:?} (expected 'forever' or a number of days)"
            ),
        }
    }
}

/// Configuration for the locale switcher.
///
/// Built once at startup (fluent builder or [`SwitcherConfig::from_env`]) and
/// injected into both the middleware and the switch handler, so the
/// remember-preference set during setup is visible at request time without
/// any process-wide global.
#[derive(Clone)]
pub struct SwitcherConfig {
    /// Application default locale, used when neither session nor cookie
    /// carries a preference.
    pub default_locale: String,
    /// Cookie persistence for switched locales.
    pub remember: RememberPreference,
    /// Whether the rendered menu shows flag icons.
    pub show_flags: bool,
    /// Configured locales; resolved freshly on every catalog request.
    pub locales: Vec<LocaleInput>,
    /// Fallback source of locale codes when no locales are configured.
    pub scanner: Option<Arc<dyn LocaleScanner>>,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            remember: RememberPreference::None,
            show_flags: true,
            locales: Vec::new(),
            scanner: None,
        }
    }
}

impl fmt::Debug for SwitcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitcherConfig")
            .field("default_locale", &self.default_locale)
            .field("remember", &self.remember)
            .field("show_flags", &self.show_flags)
            .field("locales", &self.locales)
            .field("scanner", &self.scanner.as_ref().map(|_| ".."))
            .finish()
    }
}

impl SwitcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configured locales.
    pub fn locales<I, T>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LocaleInput>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    /// Configure locales through a deferred supplier, re-evaluated on every
    /// resolution (e.g. reading enabled locales from a database).
    pub fn locales_with<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Vec<LocaleInput> + Send + Sync + 'static,
    {
        self.locales = vec![LocaleInput::deferred(supplier)];
        self
    }

    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn show_flags(mut self, show: bool) -> Self {
        self.show_flags = show;
        self
    }

    /// Remember the selected locale in a cookie.
    pub fn remember_locale(mut self, remember: RememberPreference) -> Self {
        self.remember = remember;
        self
    }

    /// Discover locales from a directory of per-locale subdirectories when
    /// none are configured explicitly.
    pub fn scan_directory(mut self, root: impl Into<std::path::PathBuf>) -> Self {
        self.scanner = Some(Arc::new(FsLocaleScanner::new(root)));
        self
    }

    pub fn with_scanner(mut self, scanner: Arc<dyn LocaleScanner>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// Resolve the configured locales into a display-ready catalog.
    pub fn resolve_locales(&self) -> Vec<LocaleRecord> {
        catalog::resolve_locales(&self.locales, self.scanner.as_deref())
    }

    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        config.default_locale =
            std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());

        if let Ok(codes) = std::env::var("LOCALES") {
            config.locales = codes
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(LocaleInput::code)
                .collect();
        }

        if let Ok(dir) = std::env::var("LOCALES_DIR") {
            config.scanner = Some(Arc::new(FsLocaleScanner::new(dir)));
        }

        config.remember =
            RememberPreference::parse(&std::env::var("REMEMBER_LOCALE").unwrap_or_default())
                .context("REMEMBER_LOCALE not understood")?;

        config.show_flags = std::env::var("SHOW_FLAGS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== RememberPreference Tests ====================

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(
            RememberPreference::parse("").unwrap(),
            RememberPreference::None
        );
        assert_eq!(
            RememberPreference::parse("  ").unwrap(),
            RememberPreference::None
        );
    }

    #[test]
    fn test_parse_forever() {
        assert_eq!(
            RememberPreference::parse("forever").unwrap(),
            RememberPreference::Forever
        );
        assert_eq!(
            RememberPreference::parse("FOREVER").unwrap(),
            RememberPreference::Forever
        );
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(
            RememberPreference::parse("7").unwrap(),
            RememberPreference::Days(7)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(RememberPreference::parse("sometimes").is_err());
    }

    // ==================== Builder Tests ====================

    #[test]
    fn test_defaults() {
        let config = SwitcherConfig::new();
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.remember, RememberPreference::None);
        assert!(config.show_flags);
        assert!(config.locales.is_empty());
        assert!(config.scanner.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = SwitcherConfig::new()
            .locales(["en", "fr", "de"])
            .default_locale("fr")
            .show_flags(false)
            .remember_locale(RememberPreference::Days(30));

        assert_eq!(config.default_locale, "fr");
        assert_eq!(config.remember, RememberPreference::Days(30));
        assert!(!config.show_flags);
        assert_eq!(config.locales.len(), 3);
    }

    #[test]
    fn test_resolve_goes_through_catalog() {
        let config = SwitcherConfig::new().locales(["tr"]);
        let records = config.resolve_locales();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Türkçe");
        assert_eq!(records[0].flag, "tr");
    }

    #[test]
    fn test_locales_with_supplier_is_live() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = SwitcherConfig::new().locales_with(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            vec!["en".into()]
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        config.resolve_locales();
        config.resolve_locales();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
