use std::sync::{mpsc, Arc};
use std::time::Duration;

use catalog_core::{
    update, BrowseSession, CatalogPage, Effect, ErrorInfo, ErrorKind, FetchRequestContext,
    FilterSnapshot, Item, Msg, PageNumber,
};
use catalog_engine::{
    ChannelEventSink, EngineEvent, EngineHandle, FailureKind, FetchError, FetchGateway,
};

/// Answers after a per-genre delay so completions can be reordered on purpose.
struct DelayedGateway;

#[async_trait::async_trait]
impl FetchGateway for DelayedGateway {
    async fn fetch_page(
        &self,
        snapshot: &FilterSnapshot,
        page: PageNumber,
    ) -> Result<CatalogPage, FetchError> {
        let (delay, base_id) = match snapshot.genre() {
            None => (300, 0),
            Some(_) => (20, 100),
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if snapshot.search_text() == "fail" {
            return Err(FetchError {
                kind: FailureKind::Network,
                message: "unreachable".to_string(),
            });
        }
        let first = base_id + u64::from(page) * 10;
        Ok(CatalogPage {
            items: vec![Item::new(first, "a"), Item::new(first + 1, "b")],
            has_more: true,
            total_count: None,
        })
    }
}

fn start_engine() -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::with_gateway(
        Arc::new(DelayedGateway),
        Arc::new(ChannelEventSink::new(tx)),
    )
    .expect("engine");
    (engine, rx)
}

fn recv(rx: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    rx.recv_timeout(Duration::from_secs(5)).expect("engine event")
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { context, result } => match result {
            Ok(page) => Msg::PageLoaded { context, page },
            Err(err) => Msg::PageFailed {
                context,
                error: ErrorInfo::new(ErrorKind::Network, err.message),
            },
        },
    }
}

fn context_of(effects: Vec<Effect>) -> FetchRequestContext {
    match effects.into_iter().next() {
        Some(Effect::FetchPage(context)) => context,
        None => panic!("expected a fetch"),
    }
}

#[test]
fn superseded_fetch_still_completes_after_newer_one() {
    let (engine, rx) = start_engine();
    let (state, effects) = update(BrowseSession::new(), Msg::SessionStarted);
    let old = context_of(effects);
    engine.fetch_page(old.clone());

    let (state, effects) = update(state, Msg::GenreSelected(Some("Gothic".to_string())));
    let new = context_of(effects);
    engine.fetch_page(new.clone());

    let first = recv(&rx);
    let second = recv(&rx);
    let order: Vec<_> = [&first, &second]
        .iter()
        .map(|event| match event {
            EngineEvent::PageFetched { context, .. } => context.request_id,
        })
        .collect();
    assert_eq!(order, vec![new.request_id, old.request_id]);

    let (state, _) = update(state, to_msg(first));
    let (state, _) = update(state, to_msg(second));
    let ids: Vec<_> = state.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![110, 111]);
    assert_eq!(state.active_filter().genre(), Some("Gothic"));
}

#[test]
fn failures_are_reported_as_events() {
    let (engine, rx) = start_engine();
    let (state, effects) = update(
        BrowseSession::new(),
        Msg::FilterChanged(FilterSnapshot::new("fail", Some("Any".to_string()))),
    );
    engine.fetch_page(context_of(effects));

    let event = recv(&rx);
    match &event {
        EngineEvent::PageFetched { result, .. } => {
            assert_eq!(result.as_ref().unwrap_err().kind, FailureKind::Network);
        }
    }

    let (state, _) = update(state, to_msg(event));
    assert!(state.view().error.is_some());
    assert!(state.items().is_empty());
}
