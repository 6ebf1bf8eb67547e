/// Immutable search criteria for one fetch cycle.
///
/// Compared by value: two snapshots with the same text and genre are the same filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterSnapshot {
    search_text: String,
    genre: Option<String>,
}

impl FilterSnapshot {
    /// A blank genre is treated as "all genres".
    pub fn new(search_text: impl Into<String>, genre: Option<String>) -> Self {
        Self {
            search_text: search_text.into(),
            genre: genre.filter(|g| !g.trim().is_empty()),
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Search text as sent to the catalog; `None` when blank.
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn with_search_text(&self, search_text: impl Into<String>) -> Self {
        Self::new(search_text, self.genre.clone())
    }

    pub fn with_genre(&self, genre: Option<String>) -> Self {
        Self::new(self.search_text.clone(), genre)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_query().is_none() && self.genre.is_none()
    }
}

/// Holds the active filter snapshot and replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    current: FilterSnapshot,
}

impl FilterState {
    pub fn new(initial: FilterSnapshot) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &FilterSnapshot {
        &self.current
    }

    /// Returns `false` without touching state when `next` equals the current snapshot.
    pub fn set(&mut self, next: FilterSnapshot) -> bool {
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_genre_means_all_genres() {
        let snapshot = FilterSnapshot::new("", Some("  ".to_string()));
        assert_eq!(snapshot.genre(), None);
        assert_eq!(snapshot, FilterSnapshot::default());
    }

    #[test]
    fn search_query_is_trimmed_and_omitted_when_blank() {
        assert_eq!(FilterSnapshot::new("  dracula ", None).search_query(), Some("dracula"));
        assert_eq!(FilterSnapshot::new("   ", None).search_query(), None);
    }

    #[test]
    fn setting_equal_snapshot_is_rejected() {
        let mut state = FilterState::new(FilterSnapshot::new("poe", None));
        assert!(!state.set(FilterSnapshot::new(String::from("poe"), None)));
        assert!(state.set(FilterSnapshot::new("poe", Some("Gothic".to_string()))));
        assert_eq!(state.current().genre(), Some("Gothic"));
    }

    #[test]
    fn builders_keep_the_other_field() {
        let base = FilterSnapshot::new("austen", Some("Romance".to_string()));
        assert_eq!(base.with_genre(None).search_text(), "austen");
        assert_eq!(base.with_search_text("").genre(), Some("Romance"));
        assert!(base.with_search_text("").with_genre(None).is_unfiltered());
    }
}
