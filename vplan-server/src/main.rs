use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vplan_server::cache::CacheConfig;
use vplan_server::config::ServerConfig;
use vplan_server::extract::ExtractorChain;
use vplan_server::iserv::{CookieSource, PlanClient};
use vplan_server::plan::PlanService;
use vplan_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Credentials are re-read per request: environment first, then the file
    let cookies = CookieSource::new(&config.cookies_file);

    let client = PlanClient::new(config.client.clone()).expect("Failed to create plan client");

    let extractors = ExtractorChain::with_defaults();
    info!(extractors = ?extractors.names(), "pdf extraction ready");

    let plan = PlanService::new(client, extractors, cookies, &CacheConfig::default());

    let cookie_count = plan.cookie_count();
    if cookie_count == 0 {
        warn!("no IServ cookies configured yet; plan checks will fail until they are");
    } else {
        info!(count = cookie_count, "IServ cookies found");
    }

    // Build app state and router
    let state = AppState::new(plan);
    let app = create_router(state);

    let addr = config.socket_addr();
    info!("Vertretungsplan API listening on http://{addr}");
    info!("  GET  /            - Status");
    info!("  GET  /api/health  - Health check");
    info!("  POST /api/check   - Check the plan for a class");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
