//! Application Startup
//!
//! Store selection, service wiring and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{CityInfoService, CityInfoServiceImpl};
use crate::config::{CorsSettings, Settings, StoreBackend};
use crate::domain::services::Notifier;
use crate::domain::ResourceStore;
use crate::infrastructure::database;
use crate::infrastructure::mail::LocalMailNotifier;
use crate::infrastructure::repositories::{InMemoryResourceStore, PgResourceStore};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn CityInfoService>,
    pub store: Arc<dyn ResourceStore>,
}

impl AppState {
    /// Wire the city info service over `store`.
    pub fn new(store: Arc<dyn ResourceStore>, notifier: Arc<dyn Notifier>) -> Self {
        let service = Arc::new(CityInfoServiceImpl::new(Arc::clone(&store), notifier));
        Self { service, store }
    }
}

/// Router with the request tracing and CORS layers applied
pub fn build_router(state: AppState, cors_settings: &CorsSettings) -> Router {
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(cors_settings))
}

/// Open the resource store selected by `settings.store.backend`.
pub async fn connect_store(settings: &Settings) -> Result<Arc<dyn ResourceStore>> {
    match settings.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory resource store");
            Ok(Arc::new(InMemoryResourceStore::seeded()))
        }
        StoreBackend::Postgres => {
            let url = settings
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;
            let pool = database::create_pool(&settings.database, url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Database connection pool created");
            Ok(Arc::new(PgResourceStore::new(pool)))
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let store = connect_store(&settings).await?;
        let notifier: Arc<dyn Notifier> = Arc::new(LocalMailNotifier::new(&settings.mail));
        let state = AppState::new(store, notifier);

        let router = build_router(state, &settings.cors);

        // Bind to address
        let addr = settings
            .server
            .socket_addr()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
