use crate::{BrowseError, FilterSnapshot, StaleReason};

/// 1-based catalog page number.
pub type PageNumber = u32;

/// Monotonic id stamped on every dispatched fetch.
pub type RequestId = u64;

/// Everything captured when a fetch is dispatched. Travels with the request
/// and comes back with its completion so the result can be checked against
/// the session as it is *then*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequestContext {
    pub request_id: RequestId,
    pub snapshot: FilterSnapshot,
    pub page: PageNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFetch {
    request_id: RequestId,
    page: PageNumber,
}

/// How an admitted fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Succeeded { has_more: bool },
    Failed,
}

/// Pagination cursor plus the single-flight slot.
///
/// `page` is the page the next fetch will ask for. It only moves forward on
/// success, so a failed fetch is retried with the same page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    page: PageNumber,
    has_more: bool,
    in_flight: Option<PendingFetch>,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self {
            page: 1,
            has_more: true,
            in_flight: None,
        }
    }
}

impl PaginationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to page 1. Forgets the in-flight fetch; its completion becomes stale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn page(&self) -> PageNumber {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_page(&self) -> Option<PageNumber> {
        self.in_flight.map(|pending| pending.page)
    }

    /// Admission rule for scroll-triggered loads.
    pub fn can_load_more(&self) -> bool {
        !self.is_loading() && self.has_more
    }

    pub fn begin_fetch(
        &mut self,
        request_id: RequestId,
        for_page: PageNumber,
    ) -> Result<(), BrowseError> {
        if let Some(pending) = self.in_flight {
            return Err(BrowseError::AlreadyLoading {
                requested: for_page,
                in_flight: pending.page,
            });
        }
        self.in_flight = Some(PendingFetch {
            request_id,
            page: for_page,
        });
        Ok(())
    }

    /// Checks that a completion belongs to the fetch currently in flight.
    pub fn check_pending(
        &self,
        request_id: RequestId,
        page: PageNumber,
    ) -> Result<(), StaleReason> {
        match self.in_flight {
            None => Err(StaleReason::NotPending),
            Some(pending) if pending.request_id != request_id || pending.page != page => {
                Err(StaleReason::Superseded)
            }
            Some(_) => Ok(()),
        }
    }

    /// Clears the in-flight slot and returns the page that completed.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) -> Option<PageNumber> {
        let pending = self.in_flight.take()?;
        if let FetchOutcome::Succeeded { has_more } = outcome {
            self.has_more = self.has_more && has_more;
            self.page = pending.page + 1;
        }
        Some(pending.page)
    }
}
