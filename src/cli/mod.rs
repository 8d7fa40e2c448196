use crate::http::cors;
use clap::Parser;
use http::HeaderValue;
use std::net::SocketAddr;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:4000")]
    pub listen_address: SocketAddr,
    /// Origin allowed to make credentialed cross-origin requests. Repeatable.
    #[arg(long = "allowed-origin")]
    #[arg(default_value = "http://localhost:3000")]
    #[arg(value_parser = cors::parse_origin)]
    pub allowed_origins: Vec<HeaderValue>,
    /// Log at `debug` level unless `RUST_LOG` says otherwise.
    #[arg(long)]
    pub debug: bool,
}
