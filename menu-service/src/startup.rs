use crate::config::{MenuConfig, MongoConfig};
use crate::handlers;
use crate::services::{DocumentStore, MongoStore};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, metrics_middleware, request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: MenuConfig,
    /// `None` when the store is not configured or the client could not be
    /// built; store-backed routes then answer 500.
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn new(config: MenuConfig, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.store.as_ref().ok_or_else(|| {
            tracing::warn!("Store-backed route called without a database");
            AppError::StoreUnavailable
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/api/hello", get(handlers::hello))
        .route(
            "/api/menu",
            get(handlers::list_menu).post(handlers::create_menu_item),
        )
        .route("/api/menu/seed", post(handlers::seed_menu))
        .route("/test", get(handlers::test_database))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>),
        )
        .layer(from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Connects to MongoDB when configured. Any failure leaves the service in
/// the degraded state instead of aborting startup.
pub async fn connect_store(config: &MongoConfig) -> Option<MongoStore> {
    let (Some(uri), Some(database)) = (config.uri.as_deref(), config.database.as_deref()) else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set; running without a database");
        return None;
    };

    match MongoStore::connect(uri, database).await {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::warn!("Database unavailable, store-backed routes disabled: {}", e);
            None
        }
    }
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: MenuConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.mongodb).await;

        if let Some(mongo) = store.clone() {
            // Index creation waits on server selection; keep it off the startup path.
            tokio::spawn(async move {
                if let Err(e) = mongo.initialize_indexes().await {
                    tracing::warn!("Failed to initialize database indexes: {}", e);
                }
            });
        }

        let state = AppState::new(
            config.clone(),
            store.map(|s| Arc::new(s) as Arc<dyn DocumentStore>),
        );

        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
