use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use deposit_advisor::config::AppConfig;
use deposit_advisor::dashboard::{DashboardService, SessionStore};
use deposit_advisor::error::AppError;
use deposit_advisor::scoring::{ModelHandle, ProbabilityModel};
use deposit_advisor::segmentation::SegmentationEngine;
use deposit_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{error, info};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(model) = args.model.take() {
        config.model.path = model;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let handle = ModelHandle::new(config.model.path.clone());
    let model = handle.acquire().map_err(|err| {
        error!(path = %handle.path().display(), error = %err, "model artifact failed to load");
        err
    })?;
    let description = model.describe();

    let dashboard = Arc::new(DashboardService::new(
        model,
        SegmentationEngine::new(config.segmentation),
        SessionStore::new(config.session.idle_timeout()),
    ));

    let app = with_dashboard_routes(dashboard)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model = %description.name,
        numeric = description.numeric_features,
        categorical = description.categorical_features,
        medium_threshold = config.segmentation.medium(),
        high_threshold = config.segmentation.high(),
        "deposit advisor dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
