use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use convey_core::parse::DecimalParser;
use convey_core::stage::spawn_stage;

/// Captures WARN-level diagnostic emissions during a stage run.
#[derive(Clone, Default)]
pub struct DiagnosticLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl DiagnosticLog {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for DiagnosticLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }

        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.messages.lock().unwrap().push(message);
        }
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

pub struct StageRun {
    pub outputs: Vec<i64>,
    pub forwarded: u64,
    pub diagnostics: Vec<String>,
}

/// Feeds `tokens` through a freshly spawned stage and collects everything
/// observable: forwarded integers, the stage's own count, and the
/// diagnostics emitted along the way.
pub async fn run_stage(tokens: &[&str]) -> StageRun {
    let diag = DiagnosticLog::default();
    let subscriber = tracing_subscriber::registry().with(diag.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let capacity = tokens.len().max(1);
    let (token_tx, token_rx) = mpsc::channel::<String>(capacity);
    let (int_tx, mut int_rx) = mpsc::channel::<i64>(capacity);

    let stage = spawn_stage(token_rx, int_tx, DecimalParser);

    for token in tokens {
        token_tx
            .send((*token).to_string())
            .await
            .expect("stage input open");
    }
    drop(token_tx);

    let forwarded = stage.await.expect("stage task");

    let mut outputs = Vec::new();
    while let Some(value) = int_rx.recv().await {
        outputs.push(value);
    }

    StageRun {
        outputs,
        forwarded,
        diagnostics: diag.messages(),
    }
}
