use engine_logging::{engine_debug, engine_error, engine_trace};

use crate::{
    BrowseError, BrowsePhase, BrowseSession, Effect, FilterSnapshot, Msg, PageNumber, RequestId,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BrowseSession, msg: Msg) -> (BrowseSession, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            if state.is_started() {
                Vec::new()
            } else {
                dispatch(&mut state, 1)
            }
        }
        Msg::FilterChanged(filter) => change_filter(&mut state, filter),
        Msg::SearchTextChanged(text) => {
            let filter = state.active_filter().with_search_text(text);
            change_filter(&mut state, filter)
        }
        Msg::GenreSelected(genre) => {
            let filter = state.active_filter().with_genre(genre);
            change_filter(&mut state, filter)
        }
        Msg::FiltersCleared => change_filter(&mut state, FilterSnapshot::default()),
        Msg::MoreRequested => {
            if state.can_load_more() {
                let page = state.cursor();
                dispatch(&mut state, page)
            } else {
                engine_trace!("Load more refused in phase {:?}", state.phase());
                Vec::new()
            }
        }
        Msg::RetryRequested => {
            if state.phase() == BrowsePhase::Error {
                let page = state.cursor();
                dispatch(&mut state, page)
            } else {
                Vec::new()
            }
        }
        Msg::PageLoaded { context, page } => {
            match state.apply_page(&context, page) {
                Ok(added) => {
                    engine_debug!(
                        "Merged request_id={} page={} added={}",
                        context.request_id,
                        context.page,
                        added
                    );
                }
                Err(err) => log_discard(context.request_id, &err),
            }
            Vec::new()
        }
        Msg::PageFailed { context, error } => {
            if let Err(err) = state.apply_failure(&context, error) {
                log_discard(context.request_id, &err);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn change_filter(state: &mut BrowseSession, filter: FilterSnapshot) -> Vec<Effect> {
    if !state.reset_to(filter) {
        return Vec::new();
    }
    dispatch(state, 1)
}

fn dispatch(state: &mut BrowseSession, page: PageNumber) -> Vec<Effect> {
    match state.dispatch(page) {
        Ok(effect) => vec![effect],
        Err(err) => {
            // Admission checks above make this unreachable.
            engine_error!("Pagination invariant violated: {}", err);
            Vec::new()
        }
    }
}

fn log_discard(request_id: RequestId, err: &BrowseError) {
    engine_debug!("Completion request_id={} ignored: {}", request_id, err);
}
