#![allow(non_snake_case)]

mod app;
mod context;
mod pages;
mod sample;
mod theme;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use storefront_core::{LoggingBuilder, StorefrontConfig};

/// Storefront - design system preview shell
#[derive(Parser, Debug)]
#[command(name = "storefront-desktop")]
#[command(about = "Storefront - grocery storefront UI kit on the desktop")]
struct Args {
    /// Config file (JSON); defaults to <config dir>/storefront/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Currency symbol prefixed to prices
    #[arg(long)]
    currency: Option<String>,

    /// Log filter directive, used when RUST_LOG is unset
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn resolve_config(&self) -> anyhow::Result<StorefrontConfig> {
        let mut config = match &self.config {
            Some(path) => StorefrontConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => StorefrontConfig::load_or_default().context("loading default config")?,
        };
        if let Some(symbol) = &self.currency {
            config.currency_symbol = symbol.clone();
        }
        if let Some(filter) = &self.log_filter {
            config.log_filter = filter.clone();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    LoggingBuilder::new()
        .with_filter(config.log_filter.clone())
        .init()
        .context("installing log subscriber")?;

    tracing::info!(
        store = %config.store_name,
        currency = %config.currency_symbol,
        "starting storefront"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.store_name)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "currency_symbol": "€", "store_name": "Corner Market" }"#).unwrap();

        let args = Args::parse_from([
            "storefront-desktop",
            "--config",
            path.to_str().unwrap(),
            "--currency",
            "£",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.store_name, "Corner Market");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let args = Args::parse_from(["storefront-desktop", "--config", "/nonexistent/storefront.json"]);
        assert!(args.resolve_config().is_err());
    }
}
