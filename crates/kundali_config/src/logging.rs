//! Tracing subscriber setup.
//!
//! The filter comes from explicit directives, then `RUST_LOG`, then the
//! default directive. Output goes to stderr so stdout stays clean for JSON.

use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt as tracing_fmt};

use crate::error::ConfigError;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingOutput {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Filter directives such as `kundali_locate=debug,info`.
    pub directives: Option<String>,
    pub default_directive: String,
    pub include_targets: bool,
    pub ansi: bool,
    pub output: TracingOutput,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_local()
    }
}

impl TracingConfig {
    /// Human-readable, coloured output.
    pub fn for_local() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: true,
            output: TracingOutput::Compact,
        }
    }

    /// JSON lines without ANSI codes.
    pub fn for_ci() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: false,
            output: TracingOutput::Json,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut config = if settings.log_json {
            Self::for_ci()
        } else {
            Self::for_local()
        };
        config.directives = settings.log_directives.clone();
        config
    }

    pub fn resolve_filter(&self) -> Result<EnvFilter, ConfigError> {
        match &self.directives {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|err| ConfigError::InvalidFilter(err.to_string())),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive.clone()))),
        }
    }

    fn layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = tracing_fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(self.include_targets);
        match self.output {
            TracingOutput::Pretty => Box::new(layer.pretty().with_ansi(self.ansi)),
            TracingOutput::Compact => Box::new(layer.compact().with_ansi(self.ansi)),
            TracingOutput::Json => Box::new(layer.json().with_ansi(false)),
        }
    }

    /// Install as the process-wide subscriber. Fails if one is already set.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter = self.resolve_filter()?;
        Registry::default().with(self.layer()).with(filter).try_init()?;
        Ok(())
    }
}
