use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use videogame_api_rest::app;
use videogame_shared::{
    config::{ApplicationConfiguration, LogFormat},
    SharedError,
};
use videogame_store::{in_memory, startup_records::startup_records, state::initialize};

#[tokio::main]
async fn main() -> Result<(), SharedError> {
    let configuration = ApplicationConfiguration::new()?;

    let tracing_subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    match configuration.log_format {
        LogFormat::Json => tracing_subscriber.json().init(),
        LogFormat::Text => tracing_subscriber.init(),
    }

    configuration.log();

    let state = in_memory::videogame_state(&configuration.catalog);

    if configuration.catalog.seed {
        initialize(&state, startup_records()).await;
    }

    let listener = tokio::net::TcpListener::bind(&configuration.http.address).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state, &configuration))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for the shutdown signal: {}", err);
        // Without a signal handler the server keeps running until the process is killed.
        std::future::pending::<()>().await;
    }

    info!("Shutting down ...");
}
