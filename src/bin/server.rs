use shareit::{
    server::{
        config::Config, error::AppError, router::router, startup::connect_to_database,
        state::AppState,
    },
    telemetry::{init_tracing, shutdown_signal},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let db = connect_to_database(&config).await?;

    let app = router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("ShareIt server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ShareIt server stopped");
    Ok(())
}
