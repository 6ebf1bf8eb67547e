use crate::{ErrorInfo, FilterSnapshot, Item, PageNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowsePhase {
    #[default]
    Idle,
    Loading {
        page: PageNumber,
    },
    Ready,
    Error,
}

/// What the presentation layer observes. Rebuilt on every read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseState {
    pub phase: BrowsePhase,
    pub items: Vec<Item>,
    pub loading: bool,
    pub has_more: bool,
    pub error: Option<ErrorInfo>,
    pub active_filter: FilterSnapshot,
    /// Genres present in `items`, not in the whole catalog.
    pub genre_options: Vec<String>,
    pub next_page: PageNumber,
    pub total_count: Option<u64>,
    pub dirty: bool,
}

impl BrowseState {
    /// Nothing loaded, nothing loading and no error: the "no books found" case.
    pub fn is_empty_result(&self) -> bool {
        self.phase == BrowsePhase::Ready && self.items.is_empty()
    }
}
