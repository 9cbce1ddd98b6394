//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;
use crate::error::{OrderError, Result};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `settings.log_filter`. Fails if a subscriber is
/// already installed.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .map_err(|e| OrderError::Config {
            key: "MELON_LOG_FILTER".to_string(),
            message: e.to_string(),
        })?;

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if settings.log_json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer.compact()).try_init()
    };

    installed.map_err(|e| OrderError::Config {
        key: "tracing".to_string(),
        message: e.to_string(),
    })
}
