use crate::cli::ServeArgs;
use crate::infra::{catalog_repository, AppState};
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skinkit::config::AppConfig;
use skinkit::error::AppError;
use skinkit::telemetry;
use skinkit::workflows::skincare::analysis::{AnalysisStore, TtlAnalysisStore};
use skinkit::workflows::skincare::catalog::CatalogRepository;
use skinkit::workflows::skincare::SkinAnalysisService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

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

    let catalog = catalog_repository(args.catalog.as_deref())?;
    let product_count = catalog.snapshot()?.len();
    let store = Arc::new(TtlAnalysisStore::new(config.analysis.ttl()));
    let analysis_service = Arc::new(SkinAnalysisService::new(
        store,
        Arc::new(catalog),
        config.analysis.recommendation,
    ));
    spawn_purge_task(analysis_service.clone());

    let app = with_analysis_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        product_count,
        ttl_secs = config.analysis.ttl_secs,
        "skin analysis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn spawn_purge_task<S, C>(service: Arc<SkinAnalysisService<S, C>>)
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(err) = service.purge_expired() {
                warn!(error = %err, "expired analysis purge failed");
            }
        }
    });
}
