use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seo_analyzer::config::Config;
use seo_analyzer::fetch::PageFetcher;
use seo_analyzer::state::AppState;
use seo_analyzer::store::AnalysisStore;

#[tokio::main]
async fn main() {
    // JSON logs in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("seo_analyzer=info,seo_analyzer_server=info,tower_http=info")
    });

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 SEO Analyzer starting...");

    let config = Config::from_env().expect("Failed to load configuration");
    info!("📝 Configuration loaded");

    if config.allow_private_hosts {
        tracing::warn!("⚠️  ALLOW_PRIVATE_HOSTS is set: private and loopback targets will be fetched");
    }

    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        info!("🔒 CORS: restrictive (production mode)");
        CorsLayer::new()
    };

    let fetcher = PageFetcher::new(&config).expect("Failed to build HTTP client");

    let app_state = AppState {
        store: AnalysisStore::with_ttl(config.cache_ttl),
        fetcher,
        recent_limit_max: config.recent_limit_max,
    };

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = seo_analyzer::app(app_state)
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(prometheus_layer)
        .layer(cors);

    let addr = config.server_addr();
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
