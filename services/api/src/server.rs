use crate::cli::ServeArgs;
use crate::infra::{AppState, LoggingApplicantRepository};
use crate::routes::with_application_routes;
use applicant_classifier::config::AppConfig;
use applicant_classifier::error::AppError;
use applicant_classifier::telemetry;
use applicant_classifier::workflows::admissions::ApplicantService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let repository = Arc::new(LoggingApplicantRepository);
    let applicant_service = Arc::new(ApplicantService::new(
        repository,
        config.classification.clone(),
    ));

    let app = with_application_routes(applicant_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        in_state = %config.classification.in_state,
        "applicant classifier ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
