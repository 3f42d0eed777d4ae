//! The converter stage: a single worker draining tokens from an input
//! channel and forwarding successful integer parses to an output channel.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::parse::TokenParser;

/// Spawns the converter stage.
///
/// Per iteration the stage awaits one token, parses it, and either sends
/// the integer downstream (suspending while the output channel is full)
/// or emits the fixed diagnostic line and drops the token. A malformed
/// token never terminates the stage and never blocks the pipeline.
///
/// The stage runs until the producer closes the input channel; the
/// returned handle resolves to the total count of integers forwarded.
pub fn spawn_stage<P>(
    mut input: mpsc::Receiver<String>,
    output: mpsc::Sender<i64>,
    parser: P,
) -> JoinHandle<u64>
where
    P: TokenParser + 'static,
{
    tokio::spawn(async move {
        let mut forwarded = 0u64;

        while let Some(token) = input.recv().await {
            match parser.parse_token(&token) {
                Ok(value) => {
                    if output.send(value).await.is_err() {
                        // consumer side closed
                        break;
                    }
                    forwarded += 1;
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                }
            }
        }

        forwarded
    })
}
