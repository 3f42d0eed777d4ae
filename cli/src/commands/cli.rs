use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "convey",
    about = "Reads text tokens from stdin, one per line, and writes the ones that parse as integers"
)]
pub struct Args {
    /// Explicit config file; bypasses the default search
    /// (~/.convey/config.toml, then ./config.toml).
    #[arg(long)]
    pub config: Option<String>,

    /// Output destination: "stdout:" or a file path (append mode).
    #[arg(long)]
    pub output: Option<String>,

    /// Capacity of the token channel feeding the stage.
    #[arg(long)]
    pub input_capacity: Option<usize>,

    /// Capacity of the integer channel between the stage and the sink.
    #[arg(long)]
    pub output_capacity: Option<usize>,

    /// Disable console logging. Diagnostics still reach the log file when
    /// file logging is enabled; otherwise logging is turned off entirely.
    #[arg(long)]
    pub quiet: bool,
}
