use menu_service::config::MenuConfig;
use menu_service::services::init_metrics;
use menu_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = MenuConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "menu-service",
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    // After tracing so recorder failures are logged, before any metric is recorded
    init_metrics();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(
        port = app.port(),
        database_available = app.state().store.is_some(),
        "menu-service started"
    );

    app.run_until_stopped().await
}
