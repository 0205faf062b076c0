use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemorySessionStore};
use crate::routes::with_session_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use yojna_mitra::config::AppConfig;
use yojna_mitra::error::AppError;
use yojna_mitra::matching::MatchEngine;
use yojna_mitra::sessions::SessionService;
use yojna_mitra::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(config.catalog_path.as_deref())?;
    info!(programs = catalog.len(), "catalog loaded");

    let service = Arc::new(SessionService::new(
        Arc::new(InMemorySessionStore::default()),
        Arc::new(catalog),
        Arc::new(MatchEngine::new(config.matching.clone())),
        config.sessions.default_locale,
        config.sessions.typing_delay,
    ));

    let app = with_session_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "yojna mitra service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
