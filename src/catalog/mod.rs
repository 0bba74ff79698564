//! Locale catalog resolution.
//!
//! Takes user-supplied locale configuration (bare codes, partial records, or
//! a deferred supplier) and produces a fully-enriched, display-ready catalog.
//! Missing names and flags are filled from the static lookup tables, with
//! deterministic fallback derivation for unknown codes. When the
//! configuration is empty, available locales are discovered through a
//! [`LocaleScanner`].

mod scanner;
mod tables;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use scanner::{FsLocaleScanner, LocaleScanner, ScanError};

/// A fully-enriched locale entry, ready for menu rendering.
///
/// Every record produced by [`resolve_locales`] has all three fields
/// populated; partial records never escape the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRecord {
    /// Locale code, e.g. `"en"` or `"zh_CN"`.
    pub code: String,
    /// Human-readable display name, e.g. `"Deutsch"`.
    pub name: String,
    /// Lowercase region identifier used to pick a flag icon, e.g. `"de"`.
    pub flag: String,
}

/// Deferred locale supplier, invoked freshly on every resolution call.
pub type LocaleSupplier = Arc<dyn Fn() -> Vec<LocaleInput> + Send + Sync>;

/// One element of the locale configuration.
///
/// Mirrors the three shapes a caller may configure: a bare code, a partial
/// record, or a zero-argument supplier producing a sequence of the former
/// two. Suppliers are re-invoked on every resolution and never cached, so
/// configuration read from a database stays live.
#[derive(Clone)]
pub enum LocaleInput {
    /// A bare locale code; name and flag are derived during resolution.
    Code(String),
    /// A partial record; absent fields are derived during resolution,
    /// explicit fields are never overwritten.
    Record {
        code: String,
        name: Option<String>,
        flag: Option<String>,
    },
    /// A deferred supplier evaluated at resolution time.
    Deferred(LocaleSupplier),
}

impl LocaleInput {
    /// Shorthand for a bare-code input.
    pub fn code(code: impl Into<String>) -> Self {
        LocaleInput::Code(code.into())
    }

    /// Shorthand for a deferred supplier input.
    pub fn deferred<F>(supplier: F) -> Self
    where
        F: Fn() -> Vec<LocaleInput> + Send + Sync + 'static,
    {
        LocaleInput::Deferred(Arc::new(supplier))
    }
}

impl fmt::Debug for LocaleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleInput::Code(code) => f.debug_tuple("Code").field(code).finish(),
            LocaleInput::Record { code, name, flag } => f
                .debug_struct("Record")
                .field("code", code)
                .field("name", name)
                .field("flag", flag)
                .finish(),
            LocaleInput::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for LocaleInput {
    fn from(code: &str) -> Self {
        LocaleInput::Code(code.to_string())
    }
}

impl From<String> for LocaleInput {
    fn from(code: String) -> Self {
        LocaleInput::Code(code)
    }
}

/// Resolve the locale configuration into an ordered, fully-enriched catalog.
///
/// Deferred suppliers are invoked now, once per call. If the flattened
/// configuration is empty, the scanner is queried once for available locale
/// directories (entries literally named `vendor` are excluded) and each
/// remaining name is enriched as a bare code. An absent or unreadable
/// directory source yields an empty catalog, not an error.
///
/// Input order is preserved; it dictates menu display order.
pub fn resolve_locales(inputs: &[LocaleInput], scanner: Option<&dyn LocaleScanner>) -> Vec<LocaleRecord> {
    let mut flat = Vec::new();
    flatten_into(inputs, &mut flat);

    if !flat.is_empty() {
        return flat.into_iter().map(enrich).collect();
    }

    let Some(scanner) = scanner else {
        return Vec::new();
    };

    scanner
        .scan()
        .into_iter()
        .filter(|name| name != "vendor")
        .map(|code| enrich(Partial {
            code,
            name: None,
            flag: None,
        }))
        .collect()
}

/// A normalized, not-yet-enriched entry.
struct Partial {
    code: String,
    name: Option<String>,
    flag: Option<String>,
}

fn flatten_into(inputs: &[LocaleInput], out: &mut Vec<Partial>) {
    for input in inputs {
        match input {
            LocaleInput::Code(code) => out.push(Partial {
                code: code.clone(),
                name: None,
                flag: None,
            }),
            LocaleInput::Record { code, name, flag } => out.push(Partial {
                code: code.clone(),
                name: name.clone(),
                flag: flag.clone(),
            }),
            LocaleInput::Deferred(supplier) => {
                let produced = supplier();
                flatten_into(&produced, out);
            }
        }
    }
}

fn enrich(partial: Partial) -> LocaleRecord {
    let name = partial
        .name
        .unwrap_or_else(|| display_name(&partial.code));
    let flag = partial
        .flag
        .unwrap_or_else(|| region_for(&partial.code));
    LocaleRecord {
        code: partial.code,
        name,
        flag,
    }
}

/// Display name for a code: table entry, or first letter uppercased with the
/// rest lowercased (`xx` -> `Xx`).
pub fn display_name(code: &str) -> String {
    if let Some(name) = tables::language_name(code) {
        return name.to_string();
    }
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Region identifier for a code: table entry, or the lowercase of the first
/// two characters of the code.
pub fn region_for(code: &str) -> String {
    if let Some(region) = tables::region_code(code) {
        return region.to_string();
    }
    code.chars().take(2).flat_map(char::to_lowercase).collect()
}
