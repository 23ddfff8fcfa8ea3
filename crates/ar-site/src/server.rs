//! HTTP server: settings, logging, router and health check

use axum::{routing::get, Json, Router};
use leptos::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::fileserv::file_and_error_handler;

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Directory served under `/assets` (logos, images)
    pub assets_dir: String,
    pub log_filter: String,
}

impl SiteSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            assets_dir: lookup("ASSETS_DIR").unwrap_or_else(|| "assets".to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "ar_site=info,ar_core=info,tower_http=info".to_string()),
        }
    }
}

pub fn init_tracing(settings: &SiteSettings) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub brands: Vec<&'static str>,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        brands: ar_core::config::COMPANIES.iter().map(|c| c.id).collect(),
    })
}

pub fn router(leptos_options: LeptosOptions, settings: &SiteSettings) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route("/health", get(health_check))
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/assets", ServeDir::new(&settings.assets_dir))
        .fallback(file_and_error_handler)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = SiteSettings::from_lookup(|_| None);
        assert_eq!(settings.assets_dir, "assets");
        assert!(settings.log_filter.starts_with("ar_site=info"));
    }

    #[test]
    fn test_settings_overrides() {
        let settings = SiteSettings::from_lookup(|key| match key {
            "ASSETS_DIR" => Some("/srv/assets".to_string()),
            "RUST_LOG" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(settings.assets_dir, "/srv/assets");
        assert_eq!(settings.log_filter, "debug");
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.brands, vec!["bosch", "siemens", "lg", "samsung"]);
    }

    #[tokio::test]
    async fn test_health_check_json_shape() {
        let Json(health) = health_check().await;
        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["brands"].as_array().map(Vec::len), Some(4));
    }
}
