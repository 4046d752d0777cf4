//! Settings and logging setup shared by the facade and the CLI.

pub mod error;
pub mod logging;
pub mod settings;

pub use error::ConfigError;
pub use logging::{TracingConfig, TracingOutput};
pub use settings::Settings;
