//! Console logging setup.
//!
//! ```ignore
//! use storefront_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("storefront=debug")
//!     .init()?;
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::{StorefrontError, StorefrontResult};

/// Builder for the global tracing subscriber.
#[derive(Clone, Debug)]
pub struct LoggingBuilder {
    filter: String,
    with_target: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            with_target: true,
        }
    }

    /// Set the fallback filter (e.g., "storefront=info,storefront_ui=debug").
    /// `RUST_LOG` takes precedence when set.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Hide the module target in console output.
    pub fn without_target(mut self) -> Self {
        self.with_target = false;
        self
    }

    /// Resolve the effective filter
    pub fn env_filter(&self) -> StorefrontResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.filter)
                .map_err(|e| StorefrontError::Logging(format!("invalid filter '{}': {e}", self.filter))),
        }
    }

    /// Install the global subscriber. Fails if one is already installed.
    pub fn init(self) -> StorefrontResult<()> {
        let filter = self.env_filter()?;
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(self.with_target))
            .try_init()
            .map_err(|e| StorefrontError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_reports_logging_error() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = LoggingBuilder::new()
            .with_filter("storefront=notalevel")
            .env_filter()
            .unwrap_err();
        assert!(matches!(err, StorefrontError::Logging(_)));
    }

    #[test]
    fn default_filter_parses() {
        assert!(LoggingBuilder::default().env_filter().is_ok());
    }

    #[test]
    fn second_init_fails() {
        // Whichever test runs first may own the global subscriber
        let _ = LoggingBuilder::new().init();
        assert!(LoggingBuilder::new().init().is_err());
    }
}
