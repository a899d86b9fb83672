use menu_server::{api, utils, Config, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    utils::init_logger(&config.log_level);

    tracing::info!(
        environment = %config.environment,
        "Spice Garden menu server starting"
    );

    // 2. Seed state from the data source
    let state = ServerState::initialize(&config).await?;

    // 3. Serve
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, api::build_app(state)).await?;
    Ok(())
}
