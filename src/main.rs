use anyhow::Result;
use axum::extract::State;
use axum::middleware::from_fn_with_state;
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use locale_switcher::menu::{flag_icon, FsFlagAssets};
use locale_switcher::{menu_context, set_locale, ActiveLocale, AppState, Session, SwitcherConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_switcher=info".parse()?),
        )
        .init();

    info!("Starting locale switcher demo server");

    // Load configuration from environment
    let config = SwitcherConfig::from_env()?;
    let state = AppState::new(config);

    // Observe locale changes (the host would hook analytics or cache
    // invalidation here).
    let mut changes = state.events.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = changes.recv().await {
            info!(
                "Observed locale change: {:?} -> {}",
                event.old_locale, event.new_locale
            );
        }
    });

    // One shared session for the whole demo; a real host inserts a
    // per-visitor session from its own store.
    let session = Session::new();

    let app = locale_switcher::router(state.clone())
        .merge(
            Router::new()
                .route("/", get(index))
                .layer(from_fn_with_state(state.clone(), set_locale))
                .with_state(state),
        )
        .layer(Extension(session))
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Minimal page rendering the language menu.
async fn index(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveLocale>,
) -> Html<String> {
    let context = menu_context(&state.config, active.as_str(), false);
    let assets = FsFlagAssets::new("assets/flags");

    let current = context
        .current_language
        .as_ref()
        .map(|r| r.name.as_str())
        .unwrap_or_else(|| active.as_str());

    let items: String = context
        .other_languages
        .iter()
        .map(|language| {
            let flag = if context.show_flags {
                format!(
                    "<span class=\"flag\">[{}]</span> ",
                    flag_icon(&assets, &language.flag)
                )
            } else {
                String::new()
            };
            format!(
                "<li>{}<a href=\"/switch-language/{}\">{}</a></li>\n",
                flag, language.code, language.name
            )
        })
        .collect();

    Html(format!(
        "<h1>Current language: {current}</h1>\n<ul>\n{items}</ul>\n"
    ))
}
