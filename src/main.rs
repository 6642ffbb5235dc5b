mod cli;
mod error;
mod http_probe;
mod ping;
mod pong;

pub mod prelude {
    pub use crate::error::*;
    pub use tracing::{debug, error, info, warn};
}

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dotenvy::dotenv;
use prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(
            match tracing_subscriber::EnvFilter::try_from_default_env() {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("info"),
            },
        )
        .init();
    info!(
        "{} v{}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Pong { host, port } => {
            info!("Starting pong service");
            serve(pong::router(), &host, port).await?;
        }
        cli::Commands::Ping {
            host,
            port,
            pong_host,
            pong_port,
        } => {
            let pong_url = format!("http://{}:{}", pong_host, pong_port);
            let state = Arc::new(ping::PingState::new(pong_url));

            info!("Starting ping service");
            info!("Pong service assumed to be reachable at {}", state.pong_url);

            // Startup diagnostic only; the ping service serves requests
            // whether or not pong is up.
            let probe_state = state.clone();
            tokio::spawn(async move {
                let ready = http_probe::wait_server_ready(
                    &probe_state.client,
                    &probe_state.pong_url,
                    Duration::from_secs(2),
                )
                .await;
                if ready.is_err() {
                    warn!(
                        "Pong service at {} did not answer its health check",
                        probe_state.pong_url
                    );
                }
            });

            serve(ping::router(state), &host, port).await?;
        }
    }

    Ok(())
}

async fn serve(app: axum::Router, host: &str, port: u16) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
