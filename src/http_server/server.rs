//! # HTTP Server
//!
//! Combines the subscription and health routers behind one CORS layer.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};
use crate::store::RecordStore;

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, not_found_handler};
use super::subscription_routes::{subscription_routes, SubscriptionsState};

/// HTTP server for the subscriptions API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with default configuration
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server over `store` with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<RecordStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<RecordStore>) -> Router {
        let subscriptions_state = Arc::new(SubscriptionsState::new(store));

        Router::new()
            .merge(health_routes())
            .merge(subscription_routes(subscriptions_state))
            .fallback(not_found_handler)
            .layer(Self::cors_layer(config))
    }

    /// Permissive CORS unless origins are configured
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if config.cors_origins.is_empty() {
            return layer.allow_origin(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
