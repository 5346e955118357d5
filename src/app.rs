//! Application wiring: config → collaborators → service → web server.

use crate::config::Config;
use crate::state::AppState;
use crate::suggest::cache::SuggestionCache;
use crate::suggest::client::HttpSuggestClient;
use crate::suggest::roles::StaticRoleResolver;
use crate::suggest::service::{PopularWordService, QueryLimits};
use crate::web::create_router;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Main application struct containing all necessary components
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    /// Create a new App instance with all necessary components initialized
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let client = HttpSuggestClient::new(&config.suggest_base_url)
            .context("Failed to create suggest client")?;
        let resolver = StaticRoleResolver::new(config.default_role_list());

        // Size and expiry are read once here; reconfiguring means building
        // a new cache instance.
        let cache = SuggestionCache::new(
            config.popular_word_cache_size,
            Duration::from_secs(config.popular_word_cache_expire_minutes * 60),
        );
        info!(
            max_entries = config.popular_word_cache_size,
            expire_minutes = config.popular_word_cache_expire_minutes,
            "popular word cache initialized"
        );

        let word_service = PopularWordService::new(
            cache,
            Arc::new(client),
            Arc::new(resolver),
            QueryLimits {
                size: config.popular_word_size,
                window_size: config.popular_word_window_size,
            },
        );

        let app_state = AppState::new(word_service, &config);
        Ok(App { config, app_state })
    }

    /// Bind the listener and serve the API until shutdown is signalled.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let router = create_router(self.app_state);
        let addr = format!("0.0.0.0:{}", self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!(addr = %addr, "web server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Web server exited with an error")
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
