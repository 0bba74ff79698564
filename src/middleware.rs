//! Per-request locale resolution.
//!
//! On every request the effective locale is decided by a fixed precedence:
//! session value, then preference cookie (which is promoted back into the
//! session), then the application default. The result is applied to the
//! request as an [`ActiveLocale`] extension; the middleware never rejects or
//! short-circuits a request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::AppState;

/// Session key holding the active locale.
pub const SESSION_LOCALE_KEY: &str = "locale";

/// Cookie carrying the remembered locale preference.
pub const LOCALE_COOKIE: &str = "locale_preference";

/// Session handle for the current request.
///
/// Persistence mechanics live with the host: it inserts a `Session` into the
/// request extensions for session-capable requests (and stores it between
/// requests however it likes). A request without this extension is treated as
/// session-less and simply gets the application default locale.
#[derive(Debug, Clone, Default)]
pub struct Session {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.lock().unwrap().insert(key.into(), value.into());
    }

    /// The session-scoped active locale, if one has been stored.
    pub fn locale(&self) -> Option<String> {
        self.get(SESSION_LOCALE_KEY)
    }

    pub fn set_locale(&self, code: impl Into<String>) {
        self.insert(SESSION_LOCALE_KEY, code);
    }
}

/// The locale in effect for the current request, inserted as a request
/// extension for the rest of the pipeline to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLocale(pub String);

impl ActiveLocale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decide the effective locale for a request.
///
/// Precedence: session > cookie > default. A cookie-only preference is
/// promoted into the session for the remainder of the session. Without a
/// session the default applies as-is, cookie or not.
pub fn resolve_active_locale(
    default_locale: &str,
    session: Option<&Session>,
    cookie_locale: Option<&str>,
) -> String {
    let Some(session) = session else {
        return default_locale.to_string();
    };

    if let Some(locale) = session.locale() {
        return locale;
    }

    if let Some(locale) = cookie_locale {
        session.set_locale(locale);
        return locale.to_string();
    }

    default_locale.to_string()
}

/// Axum middleware applying the effective locale to the request.
pub async fn set_locale(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session = request.extensions().get::<Session>().cloned();
    let cookie_locale = jar.get(LOCALE_COOKIE).map(|c| c.value().to_string());

    let locale = resolve_active_locale(
        &state.config.default_locale,
        session.as_ref(),
        cookie_locale.as_deref(),
    );
    debug!("Active locale for request: {}", locale);

    request.extensions_mut().insert(ActiveLocale(locale));
    next.run(request).await
}
