//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `convey_core::api` instead of reaching into internal modules.

pub use crate::config::{load_default, load_path, AppConfig, LoggingConfig, SinkConfig, StageConfig};
pub use crate::error::{CliError, ParseFailure, StageError};
pub use crate::parse::{DecimalParser, TokenParser};
pub use crate::sink::{start_sink, STDOUT_PATH};
pub use crate::source::spawn_source;
pub use crate::stage::spawn_stage;
