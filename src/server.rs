use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(version, about = "Serves the Hearth booking front end")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to, overriding the Leptos `site-addr`
    #[arg(long, env = "SITE_ADDR")]
    pub site_addr: Option<SocketAddr>,
    /// Tracing filter directives, e.g. `info,hearth=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

pub fn init_logging(filter: &str) -> Result<()> {
    let filter_layer =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;

    let fmt_layer = fmt::layer()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .boxed();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_addr_is_optional() {
        let config = ServerConfig::try_parse_from(["hearth", "--log-filter", "debug"]).unwrap();
        assert_eq!(config.site_addr, None);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn site_addr_parses() {
        let config = ServerConfig::try_parse_from([
            "hearth",
            "--site-addr",
            "127.0.0.1:8080",
            "--log-filter",
            "info",
        ])
        .unwrap();
        assert_eq!(config.site_addr, Some("127.0.0.1:8080".parse().unwrap()));
    }

    #[test]
    fn bad_site_addr_is_rejected() {
        assert!(ServerConfig::try_parse_from(["hearth", "--site-addr", "nowhere"]).is_err());
    }
}
