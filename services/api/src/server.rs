use crate::infra::AppState;
use crate::routes::compatibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lovematch::config::AppConfig;
use lovematch::error::AppError;
use lovematch::telemetry;
use tower_http::cors::CorsLayer;
use tracing::info;

pub(crate) async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(prometheus_handle);

    let app = compatibility_routes()
        .layer(Extension(app_state.clone()))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.mark_ready();

    info!(?config.environment, %addr, "compatibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
