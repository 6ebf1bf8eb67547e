use std::sync::{mpsc, Arc};

use catalog_core::{Effect, ErrorInfo, ErrorKind, Msg};
use catalog_engine::{EngineError, EngineEvent, EngineHandle, EventSink, FailureKind, FetchSettings};
use engine_logging::engine_info;

use super::commands::Command;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    /// Engine completions come back on `tx` as browse messages.
    pub fn new(settings: FetchSettings, tx: mpsc::Sender<Command>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(CommandSink { tx }))?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage(context) => {
                    engine_info!(
                        "FetchPage request_id={} page={} search={:?} genre={:?}",
                        context.request_id,
                        context.page,
                        context.snapshot.search_query(),
                        context.snapshot.genre()
                    );
                    self.engine.fetch_page(context);
                }
            }
        }
    }
}

struct CommandSink {
    tx: mpsc::Sender<Command>,
}

impl EventSink for CommandSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(Command::Browse(event_to_msg(event)));
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { context, result } => match result {
            Ok(page) => Msg::PageLoaded { context, page },
            Err(err) => Msg::PageFailed {
                context,
                error: ErrorInfo::new(map_failure(&err.kind), err.message),
            },
        },
    }
}

fn map_failure(kind: &FailureKind) -> ErrorKind {
    match kind {
        FailureKind::HttpStatus(code) => ErrorKind::HttpStatus(*code),
        FailureKind::Timeout => ErrorKind::Timeout,
        FailureKind::Decode | FailureKind::TooLarge { .. } => ErrorKind::InvalidResponse,
        FailureKind::InvalidUrl | FailureKind::Network => ErrorKind::Network,
    }
}
