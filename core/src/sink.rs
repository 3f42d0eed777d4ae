//! Output writer draining the stage's integer channel to a line-oriented
//! destination: stdout or an append-mode file.

use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::SinkConfig;
use crate::error::StageError;

/// Sentinel path selecting the standard output stream.
pub const STDOUT_PATH: &str = "stdout:";

/// Starts the sink writer task and returns the sender side of its channel.
///
/// Sends into the returned channel block while the sink is behind, so a
/// parsed integer is never dropped. The task ends once every sender is
/// gone and the channel has drained; the handle resolves to the number of
/// values written.
pub fn start_sink(
    cfg: &SinkConfig,
    capacity: usize,
) -> (mpsc::Sender<i64>, JoinHandle<Result<u64, StageError>>) {
    let (tx, mut rx) = mpsc::channel::<i64>(capacity);
    let path = cfg.path.clone();

    let task = tokio::spawn(async move {
        let mut writer: Box<dyn tokio::io::AsyncWrite + Unpin + Send> = if path == STDOUT_PATH {
            Box::new(tokio::io::stdout())
        } else {
            let file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await
                .map_err(|e| StageError::StreamIo {
                    stream: "sink",
                    source: e,
                })?;
            Box::new(file)
        };

        let mut written = 0u64;
        while let Some(value) = rx.recv().await {
            let line = format!("{value}\n");
            writer
                .write_all(line.as_bytes())
                .await
                .map_err(|e| StageError::StreamIo {
                    stream: "sink",
                    source: e,
                })?;
            writer.flush().await.map_err(|e| StageError::StreamIo {
                stream: "sink",
                source: e,
            })?;
            written += 1;
        }

        Ok(written)
    });

    (tx, task)
}
