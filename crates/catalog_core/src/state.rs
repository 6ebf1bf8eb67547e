use engine_logging::engine_debug;

use crate::view_model::{BrowsePhase, BrowseState};
use crate::{
    genre_options, BrowseError, CatalogPage, Effect, ErrorInfo, FetchOutcome,
    FetchRequestContext, FilterSnapshot, FilterState, Item, ItemId, PageNumber,
    PaginationController, RequestId, ResultStore, StaleReason,
};

/// Owned state of one browsing session. Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseSession {
    filter: FilterState,
    pagination: PaginationController,
    store: ResultStore,
    error: Option<ErrorInfo>,
    total_count: Option<u64>,
    started: bool,
    last_request_id: RequestId,
    dirty: bool,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that will start on `filter` instead of the empty filter.
    pub fn with_filter(filter: FilterSnapshot) -> Self {
        Self {
            filter: FilterState::new(filter),
            ..Self::default()
        }
    }

    pub fn view(&self) -> BrowseState {
        BrowseState {
            phase: self.phase(),
            items: self.store.items().to_vec(),
            loading: self.pagination.is_loading(),
            has_more: self.pagination.has_more(),
            error: self.error.clone(),
            active_filter: self.filter.current().clone(),
            genre_options: genre_options(self.store.items()),
            next_page: self.pagination.page(),
            total_count: self.total_count,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> BrowsePhase {
        if let Some(page) = self.pagination.in_flight_page() {
            BrowsePhase::Loading { page }
        } else if self.error.is_some() {
            BrowsePhase::Error
        } else if self.started {
            BrowsePhase::Ready
        } else {
            BrowsePhase::Idle
        }
    }

    pub fn active_filter(&self) -> &FilterSnapshot {
        self.filter.current()
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_started(&self) -> bool {
        self.started
    }

    pub(crate) fn can_load_more(&self) -> bool {
        self.phase() == BrowsePhase::Ready && self.pagination.can_load_more()
    }

    /// Swaps in a value-different filter and wipes everything loaded for the
    /// old one. Returns `false` for an equal filter.
    pub(crate) fn reset_to(&mut self, filter: FilterSnapshot) -> bool {
        if !self.filter.set(filter) {
            return false;
        }
        self.pagination.reset();
        self.store.clear();
        self.error = None;
        self.total_count = None;
        self.mark_dirty();
        true
    }

    /// Claims the single-flight slot for `page` and builds the fetch effect.
    pub(crate) fn dispatch(&mut self, page: PageNumber) -> Result<Effect, BrowseError> {
        let request_id = self.last_request_id + 1;
        self.pagination.begin_fetch(request_id, page)?;
        self.last_request_id = request_id;
        self.started = true;
        self.mark_dirty();

        let snapshot = self.filter.current().clone();
        engine_debug!(
            "Dispatch request_id={} page={} search={:?} genre={:?}",
            request_id,
            page,
            snapshot.search_query(),
            snapshot.genre()
        );
        Ok(Effect::FetchPage(FetchRequestContext {
            request_id,
            snapshot,
            page,
        }))
    }

    /// The current cursor page, for retry and load-more.
    pub(crate) fn cursor(&self) -> PageNumber {
        self.pagination.page()
    }

    /// Stale-response guard.
    pub(crate) fn validate(&self, context: &FetchRequestContext) -> Result<(), BrowseError> {
        if context.snapshot != *self.filter.current() {
            return Err(BrowseError::StaleResponse(StaleReason::FilterChanged));
        }
        self.pagination
            .check_pending(context.request_id, context.page)
            .map_err(BrowseError::StaleResponse)
    }

    /// Merges a validated page. Returns how many new items became visible.
    pub(crate) fn apply_page(
        &mut self,
        context: &FetchRequestContext,
        page: CatalogPage,
    ) -> Result<usize, BrowseError> {
        self.validate(context)?;
        self.pagination.complete_fetch(FetchOutcome::Succeeded {
            has_more: page.has_more,
        });
        let added = if context.page == 1 {
            self.store.replace(page.items)
        } else {
            self.store.append(page.items)
        };
        if page.total_count.is_some() {
            self.total_count = page.total_count;
        }
        self.error = None;
        self.mark_dirty();
        Ok(added)
    }

    /// Records a validated failure. Loaded items stay untouched.
    pub(crate) fn apply_failure(
        &mut self,
        context: &FetchRequestContext,
        error: ErrorInfo,
    ) -> Result<(), BrowseError> {
        self.validate(context)?;
        self.pagination.complete_fetch(FetchOutcome::Failed);
        self.error = Some(error);
        self.mark_dirty();
        Ok(())
    }
}
