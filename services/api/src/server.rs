use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryJobBoard, LoggingPushSink, SimulatedPaymentGateway};
use crate::routes::with_service_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use findx_employer::config::AppConfig;
use findx_employer::error::AppError;
use findx_employer::telemetry;
use findx_employer::workflows::broadcast::{broadcast_router, NotificationGateway};
use findx_employer::workflows::posting::{
    catalog_router, posting_router, JobPostingService, PostingCatalog, SubmissionPipeline,
};
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(PostingCatalog::load(
        config.taxonomy.csv_path.as_deref(),
        config.taxonomy.unmapped_policy,
    )?);

    let app = with_service_routes(employer_routes(&config, catalog))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "findx employer service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Posting sessions, reference data and the broadcast console on one router.
pub(crate) fn employer_routes(config: &AppConfig, catalog: Arc<PostingCatalog>) -> Router {
    let pipeline = SubmissionPipeline::new(
        Arc::new(SimulatedPaymentGateway::default()),
        Arc::new(InMemoryJobBoard::default()),
        config.posting.retry_policy(),
    );
    let postings = Arc::new(
        JobPostingService::new(
            Arc::clone(&catalog),
            Arc::new(pipeline),
            config.posting.currency.clone(),
        )
        .with_session_ttl(config.posting.session_ttl),
    );
    let notifications = Arc::new(NotificationGateway::new(
        Arc::new(LoggingPushSink),
        config.broadcast.batch_size,
    ));

    posting_router(postings)
        .merge(catalog_router(catalog))
        .merge(broadcast_router(notifications))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use findx_employer::config::{
        AppEnvironment, BroadcastConfig, PostingConfig, ServerConfig, TaxonomyConfig,
        TelemetryConfig,
    };
    use findx_employer::workflows::taxonomy::UnmappedCategoryPolicy;
    use tower::ServiceExt;

    fn config() -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            taxonomy: TaxonomyConfig {
                csv_path: None,
                unmapped_policy: UnmappedCategoryPolicy::ShowAll,
            },
            posting: PostingConfig::default(),
            broadcast: BroadcastConfig::default(),
        }
    }

    #[tokio::test]
    async fn employer_routes_mount_every_surface() {
        let catalog = Arc::new(PostingCatalog::standard(UnmappedCategoryPolicy::ShowAll));
        let app = employer_routes(&config(), catalog);

        for (method, uri, expected) in [
            ("GET", "/api/v1/categories", StatusCode::OK),
            ("GET", "/api/v1/pricing", StatusCode::OK),
            ("POST", "/api/v1/postings", StatusCode::CREATED),
            ("GET", "/api/v1/broadcast/tokens", StatusCode::OK),
        ] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request builds");
            let response = app.clone().oneshot(request).await.expect("route executes");
            assert_eq!(response.status(), expected, "{method} {uri}");
        }
    }
}
