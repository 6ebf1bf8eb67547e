use crate::{CatalogPage, ErrorInfo, FetchRequestContext, FilterSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Browsing session mounted; loads page 1 of the active filter.
    SessionStarted,
    /// Replace the active filter wholesale.
    FilterChanged(FilterSnapshot),
    /// User edited the search box.
    SearchTextChanged(String),
    /// User picked a genre, or "all genres" with `None`.
    GenreSelected(Option<String>),
    /// User clicked Clear Filters.
    FiltersCleared,
    /// The list end came into view.
    MoreRequested,
    /// User asked to retry after a failed fetch.
    RetryRequested,
    /// Engine delivered a page.
    PageLoaded {
        context: FetchRequestContext,
        page: CatalogPage,
    },
    /// Engine reported a failed fetch.
    PageFailed {
        context: FetchRequestContext,
        error: ErrorInfo,
    },
    /// Input that maps to nothing, such as a blank line.
    NoOp,
}
