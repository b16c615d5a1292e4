use transit_gateway::config::GatewayConfig;
use transit_gateway::telemetry;
use transit_gateway::web::{AppState, create_router};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = GatewayConfig::from_env()?;

    if config.railway.accept_invalid_certs {
        warn!(
            base_url = %config.railway.base_url,
            "TLS certificate verification is disabled for the railway client"
        );
    }

    let state = AppState::from_config(&config)?;
    let app = create_router(state, &config.static_dir);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Transit gateway listening on http://{addr}");
    info!("  GET  /api/                   - API liveness");
    info!("  GET  /cr/next-train-to-hk    - Shenzhen North to Hong Kong West Kowloon");
    info!("  GET  /mtr/next-train-to-hh   - Austin to Hung Hom");
    info!("  GET  /mtr/next-train-to-aus  - Hung Hom to Austin");

    axum::serve(listener, app).await?;
    Ok(())
}
