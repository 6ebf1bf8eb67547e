use std::sync::{mpsc, Arc};
use std::thread;

use catalog_core::FetchRequestContext;
use engine_logging::{engine_debug, engine_warn};

use crate::gateway::{FetchGateway, FetchSettings, ReqwestGateway};
use crate::{EngineError, EngineEvent};

/// Receives engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchPage(FetchRequestContext),
}

/// Runs fetches on a background tokio runtime.
///
/// Dispatches run concurrently and report in completion order. Nothing is
/// cancelled once dispatched.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let gateway = ReqwestGateway::new(settings).map_err(EngineError::Client)?;
        Self::with_gateway(Arc::new(gateway), sink)
    }

    pub fn with_gateway(
        gateway: Arc<dyn FetchGateway>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("catalog-fetch")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let gateway = gateway.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(gateway.as_ref(), command, sink.as_ref()).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch_page(&self, context: FetchRequestContext) {
        if self.cmd_tx.send(EngineCommand::FetchPage(context)).is_err() {
            engine_warn!("Engine stopped; fetch dropped");
        }
    }
}

async fn handle_command(gateway: &dyn FetchGateway, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::FetchPage(context) => {
            let result = gateway.fetch_page(&context.snapshot, context.page).await;
            match &result {
                Ok(page) => engine_debug!(
                    "Fetched request_id={} page={} items={} has_more={}",
                    context.request_id,
                    context.page,
                    page.items.len(),
                    page.has_more
                ),
                Err(err) => engine_warn!(
                    "Fetch request_id={} page={} failed: {}",
                    context.request_id,
                    context.page,
                    err
                ),
            }
            sink.emit(EngineEvent::PageFetched { context, result });
        }
    }
}
