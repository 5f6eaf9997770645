//! Tracing initialization for the `jsgo` binary.
//!
//! Logs go to stderr; stdout carries emitted text. `RUST_LOG` wins over the
//! configured level.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::{err_msg, Result};

pub fn init(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| err_msg!(Config, "invalid log level `{}`: {}", config.level, e))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr);
        registry.with(fmt_layer).try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        registry.with(fmt_layer).try_init()
    };

    installed.map_err(|e| err_msg!(Config, "failed to install log subscriber: {}", e))
}
