//! The locale-switch route.
//!
//! `GET /switch-language/{code}` stores the chosen locale in the session,
//! optionally queues a preference cookie, emits a [`LocaleChanged`]
//! notification and redirects back to the referring page. The incoming code
//! is not validated; unknown codes are stored verbatim and simply enrich via
//! the catalog fallback rules wherever the menu is later rendered.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::middleware::from_fn_with_state;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Extension, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

use crate::config::{RememberPreference, SwitcherConfig};
use crate::events::{LocaleChanged, LocaleEvents};
use crate::middleware::{set_locale, Session, LOCALE_COOKIE};

/// Shared state injected into the middleware and the switch handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<SwitcherConfig>,
    pub events: LocaleEvents,
}

impl AppState {
    pub fn new(config: SwitcherConfig) -> Self {
        Self {
            config: Arc::new(config),
            events: LocaleEvents::new(),
        }
    }
}

/// Build the switcher router: the switch route behind the locale middleware.
///
/// Hosts with their own routes apply [`set_locale`] to those as well, via
/// `axum::middleware::from_fn_with_state` with the same state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/switch-language/:code", get(switch_language))
        .layer(from_fn_with_state(state.clone(), set_locale))
        .with_state(state)
}

/// Handle a locale switch.
pub async fn switch_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
    session: Option<Extension<Session>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> (CookieJar, Redirect) {
    let old_locale = session
        .as_ref()
        .and_then(|Extension(s)| s.locale())
        .or_else(|| Some(state.config.default_locale.clone()));

    if let Some(Extension(session)) = &session {
        session.set_locale(&code);
    }

    let jar = match preference_cookie(state.config.remember, &code) {
        Some(cookie) => jar.add(cookie),
        None => jar,
    };

    state.events.emit(LocaleChanged {
        new_locale: code,
        old_locale,
    });

    let back = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");

    (jar, Redirect::to(back))
}

/// Cookie to queue for a switched locale, if remembering is enabled.
///
/// `Forever` carries no expiry; `Days(n)` expires after `n*24*60` minutes.
fn preference_cookie(remember: RememberPreference, code: &str) -> Option<Cookie<'static>> {
    let cookie = Cookie::build((LOCALE_COOKIE, code.to_string())).path("/");
    match remember {
        RememberPreference::None => None,
        RememberPreference::Forever => Some(cookie.build()),
        RememberPreference::Days(days) => Some(
            cookie
                .max_age(Duration::minutes(i64::from(days) * 24 * 60))
                .build(),
        ),
    }
}
