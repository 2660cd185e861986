use std::{
    env, fs,
    io::{self, ErrorKind},
    net::SocketAddr,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use axum::{extract::State, routing::get, Json, Router};
use shared::{Settings, SettingsError};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_SETTINGS_PATH: &str = "portfolio.json";

/// Errors concerning the settings document.
#[derive(Debug, Error)]
enum LoadError {
    #[error("could not read settings: {0}")]
    Io(#[from] io::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings are out of range: {0}")]
    Invalid(#[from] SettingsError),
}

#[derive(Clone)]
struct AppState {
    settings: Arc<Settings>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let addr: SocketAddr = match env::var("PORTFOLIO_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
    {
        Ok(addr) => addr,
        Err(err) => {
            error!("invalid PORTFOLIO_ADDR: {err}");
            return ExitCode::FAILURE;
        }
    };

    let settings_path = env::var("PORTFOLIO_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));

    let settings = match load_settings(&settings_path) {
        Ok(settings) => settings,
        Err(err) => {
            error!("could not load {}: {err}", settings_path.display());
            return ExitCode::FAILURE;
        }
    };

    let state = AppState {
        settings: Arc::new(settings),
    };

    let app = Router::new()
        .nest_service("/static", ServeDir::new("static"))
        .nest_service("/pkg", ServeDir::new("pkg"))
        .route_service("/", ServeFile::new("html/index.html"))
        .route("/settings", get(get_settings))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state);

    info!("serving portfolio on http://{addr}");

    if let Err(err) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        error!("server stopped: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.as_ref().clone())
}

/// Reads and validates the settings document, falling back to defaults when it does not exist.
fn load_settings(path: &Path) -> Result<Settings, LoadError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("{} not found, serving default settings", path.display());
            return Ok(Settings::default());
        }
        Err(err) => return Err(err.into()),
    };

    let settings: Settings = serde_json::from_str(&text)?;

    Ok(settings.validated()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("portfolio-{}-{name}.json", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_serves_defaults() {
        let path = env::temp_dir().join("portfolio-does-not-exist.json");

        assert_eq!(load_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let path = scratch("partial", r#"{ "mail": { "address": "me@example.com" } }"#);
        let settings = load_settings(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.mail.address, "me@example.com");
        assert_eq!(settings.particles.max_count, 140);
    }

    #[test]
    fn invalid_file_is_rejected() {
        let path = scratch("invalid", r#"{ "cursor": { "damping": 2.0 } }"#);
        let result = load_settings(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(LoadError::Invalid(SettingsError::Damping(damping))) if damping == 2.0
        ));

        let path = scratch("malformed", "{ particles");
        let result = load_settings(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn unreadable_path_keeps_the_io_error() {
        let path = env::temp_dir();

        assert!(matches!(load_settings(&path), Err(LoadError::Io(_))));
    }
}
