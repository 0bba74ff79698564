//! Locale selection and persistence for axum web applications.
//!
//! Lets a user pick a display language from a menu, persists the choice
//! across requests (session, optionally cookie) and notifies other parts of
//! the application when the active locale changes.
//!
//! - [`catalog`] resolves partial locale configuration into a fully-enriched,
//!   display-ready catalog.
//! - [`middleware`] decides the effective locale per request
//!   (session > cookie > default) and applies it as a request extension.
//! - [`switch`] hosts the `GET /switch-language/{code}` route.
//! - [`events`] broadcasts [`LocaleChanged`] notifications.
//! - [`menu`] prepares the dropdown view input, flag fallback included.

pub mod catalog;
pub mod config;
pub mod events;
pub mod menu;
pub mod middleware;
pub mod switch;

pub use catalog::{resolve_locales, LocaleInput, LocaleRecord, LocaleScanner};
pub use config::{RememberPreference, SwitcherConfig};
pub use events::{LocaleChanged, LocaleEvents};
pub use menu::{menu_context, MenuContext};
pub use middleware::{set_locale, ActiveLocale, Session};
pub use switch::{router, AppState};
