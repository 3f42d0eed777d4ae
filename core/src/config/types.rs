use serde::{Deserialize, Serialize};

use crate::sink::STDOUT_PATH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub stage: StageConfig,

    #[serde(default)]
    pub sink: SinkConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Capacity of the token channel feeding the stage.
    #[serde(default = "default_input_capacity")]
    pub input_capacity: usize,

    /// Capacity of the integer channel between the stage and the sink.
    #[serde(default = "default_output_capacity")]
    pub output_capacity: usize,
}

fn default_input_capacity() -> usize {
    256
}

fn default_output_capacity() -> usize {
    256
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            input_capacity: default_input_capacity(),
            output_capacity: default_output_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Output destination: "stdout:" or a file path opened in append mode.
    #[serde(default = "default_sink_path")]
    pub path: String,
}

fn default_sink_path() -> String {
    STDOUT_PATH.to_string()
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            path: default_sink_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "convey_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}
