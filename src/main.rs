use clap::Parser;
use std::io;
use tokio::net::TcpListener;

mod cli;
mod data;
mod http;
mod logging;

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args);

    let cors_policy = http::cors::CorsPolicy::from_args(&args)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    tracing::info!(
        allowed_origins = ?cors_policy.allowed_origins(),
        allow_credentials = cors_policy.allow_credentials(),
        "Initialized CORS policy."
    );
    let router = http::router::new(&cors_policy);

    let listener = TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down."),
        Err(error) => {
            tracing::error!(%error, "Failed to listen for Ctrl-C, running until killed.");
            std::future::pending::<()>().await;
        }
    }
}
