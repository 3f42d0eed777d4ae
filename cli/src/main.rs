use clap::Parser;
mod commands;
use commands::cli;
use convey_core::config;
use convey_core::error::CliError;
use convey_core::parse::DecimalParser;
use convey_core::sink;
use convey_core::source;
use convey_core::stage;
use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();

    let mut cfg = match args.config.as_deref() {
        Some(path) => config::load_path(std::path::Path::new(path))
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => config::load_default().map_err(|e| CliError::Config(e.to_string()))?,
    };

    if let Some(path) = args.output {
        cfg.sink.path = path;
    }
    if let Some(n) = args.input_capacity {
        cfg.stage.input_capacity = n;
    }
    if let Some(n) = args.output_capacity {
        cfg.stage.output_capacity = n;
    }
    if args.quiet {
        cfg.logging.console = false;
        if !cfg.logging.file {
            cfg.logging.enabled = false;
        }
    }

    init_tracing(&cfg.logging).map_err(CliError::Config)?;

    let (token_tx, token_rx) = mpsc::channel::<String>(cfg.stage.input_capacity.max(1));
    let (int_tx, sink_task) = sink::start_sink(&cfg.sink, cfg.stage.output_capacity.max(1));

    let source_task = source::spawn_source(tokio::io::stdin(), token_tx);
    let stage_task = stage::spawn_stage(token_rx, int_tx, DecimalParser);

    let bytes_in = source_task
        .await
        .map_err(|e| CliError::Task(e.to_string()))??;
    let forwarded = stage_task
        .await
        .map_err(|e| CliError::Task(e.to_string()))?;
    let written = sink_task
        .await
        .map_err(|e| CliError::Task(e.to_string()))??;

    tracing::debug!(
        "pipeline drained ({} bytes in, {} forwarded, {} written)",
        bytes_in,
        forwarded,
        written
    );

    Ok(0)
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: stream IO error
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Stage(_) => 20,
        CliError::Io(_) => 20,
        CliError::Task(_) => 50,
        CliError::Anyhow(_) => 50,
    }
}

fn init_tracing(logging: &config::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("convey"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("convey.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
