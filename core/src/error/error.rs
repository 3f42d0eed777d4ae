use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("stage failed: {0}")]
    Stage(#[from] StageError),
    #[error("config error: {0}")]
    Config(String),
    #[error("task failed: {0}")]
    Task(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum StageError {
    #[error("stream io error: {stream} {source}")]
    StreamIo {
        stream: &'static str,
        source: std::io::Error,
    },
}
