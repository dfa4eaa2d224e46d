//! # HTTP Server
//!
//! Main HTTP server combining the root and user routers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::ServerConfig;
use super::errors::ApiError;
use super::root_routes::root_routes;
use super::user_routes::{user_routes, UsersState};

/// HTTP server for the user store
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty store
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_state(config, Arc::new(UsersState::new()))
    }

    /// Create a new HTTP server over an existing store
    pub fn with_state(config: ServerConfig, state: Arc<UsersState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, state: Arc<UsersState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parse_origins(&config.cors_origins)))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(root_routes())
            .merge(user_routes(state))
            .fallback(fallback_handler)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(addr = %listener.local_addr()?, "user server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("user server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse configured CORS origins, skipping (and logging) invalid entries
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin.escape_debug(), error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

async fn fallback_handler() -> ApiError {
    ApiError::RouteNotFound
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = ServerConfig::with_port(8080);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_router_applies_origin_list() {
        use axum::body::Body;
        use axum::http::{header, Request, StatusCode};
        use tower::ServiceExt;

        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..ServerConfig::default()
        };
        let router = HttpServer::with_config(config).router();

        let allowed = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(allowed.status(), StatusCode::OK);
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );

        let other = router
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(other
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn test_invalid_origins_are_skipped() {
        let origins = vec![
            "http://bad\norigin".to_string(),
            "http://localhost:3000".to_string(),
        ];

        let parsed = parse_origins(&origins);
        assert_eq!(parsed, vec![HeaderValue::from_static("http://localhost:3000")]);
    }
}
