use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pingpong")]
#[command(version, about = "Ping pong demo system", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// One process runs exactly one role; the subcommand makes ping/pong
/// selection mutually exclusive by construction.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the pong service
    Pong {
        /// Host to bind to
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Start the ping service
    Ping {
        /// Host to bind to
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,

        /// Host (valid DNS name or IP) of the pong service
        #[arg(long, env = "PONG_HOST", default_value = "localhost")]
        pong_host: String,

        /// Port of the pong service
        #[arg(long, env = "PONG_PORT", default_value_t = 8080)]
        pong_port: u16,
    },
}
