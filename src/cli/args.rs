use crate::http::ServerConfig;
use clap::Parser;
use std::net::IpAddr;

/// Serve a single lock-free bank account over HTTP
#[derive(Parser, Debug)]
#[command(name = "bank-account")]
#[command(about = "Serve a single lock-free bank account over HTTP", long_about = None)]
pub struct CliArgs {
    /// Listening port
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        default_value_t = 8080,
        help = "Listening port"
    )]
    pub port: u16,

    /// Address to bind the listener to
    #[arg(
        long = "host",
        value_name = "ADDR",
        default_value = "0.0.0.0",
        help = "Address to bind the listener to"
    )]
    pub host: IpAddr,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log filter used when RUST_LOG is not set (e.g. 'debug', 'bank_account=trace')"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    ///
    /// Unset values fall back to the defaults of `ServerConfig`; invalid values
    /// are replaced by the defaults with a warning.
    pub fn to_server_config(&self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig::new(
            self.host,
            self.port,
            self.workers.unwrap_or(default.workers),
        )
    }
}
