use shareit::{
    gateway::{
        client::ShareItClient, config::Config, error::GatewayError, router::router,
        state::GatewayState,
    },
    telemetry::{init_tracing, shutdown_signal},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let client = ShareItClient::new(config.server_url.clone())?;

    let app = router()
        .with_state(GatewayState::new(client))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.gateway_addr).await?;
    tracing::info!(
        "ShareIt gateway listening on {}, forwarding to {}",
        listener.local_addr()?,
        config.server_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ShareIt gateway stopped");
    Ok(())
}
