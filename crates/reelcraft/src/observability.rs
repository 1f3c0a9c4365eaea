//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output settings for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is unset (e.g., "info", "reelcraft=debug")
    pub level: String,
    /// Emit JSON lines
    pub json: bool,
}

impl LogSettings {
    /// Settings with the given fallback filter and text output.
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            json: false,
        }
    }

    /// Enable JSON-formatted logs.
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self::new("info")
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. Logs go to stderr so
/// that command output on stdout stays machine-readable.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(settings: &LogSettings) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.level))?;

    let fmt_layer = if settings.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
