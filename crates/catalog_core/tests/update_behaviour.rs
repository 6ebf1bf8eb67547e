use std::sync::Once;

use catalog_core::{
    update, BrowsePhase, BrowseSession, CatalogPage, Effect, FetchRequestContext, FilterSnapshot,
    Item, Msg,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn fetch_context(effects: &[Effect]) -> FetchRequestContext {
    match effects {
        [Effect::FetchPage(context)] => context.clone(),
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

fn page(ids: &[u64], has_more: bool) -> CatalogPage {
    CatalogPage {
        items: ids
            .iter()
            .map(|id| Item::new(*id, format!("Book {id}")))
            .collect(),
        has_more,
        total_count: None,
    }
}

fn item_ids(state: &BrowseSession) -> Vec<u64> {
    state.items().iter().map(|item| item.id).collect()
}

#[test]
fn session_start_fetches_first_page_of_empty_filter() {
    init_logging();
    let (mut state, effects) = update(BrowseSession::new(), Msg::SessionStarted);

    let context = fetch_context(&effects);
    assert_eq!(context.page, 1);
    assert_eq!(context.snapshot, FilterSnapshot::default());
    assert_eq!(state.phase(), BrowsePhase::Loading { page: 1 });
    assert!(state.view().loading);
    assert!(state.consume_dirty());
}

#[test]
fn second_session_start_is_ignored() {
    init_logging();
    let (state, _) = update(BrowseSession::new(), Msg::SessionStarted);
    let (next, effects) = update(state.clone(), Msg::SessionStarted);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn first_page_populates_ready_state() {
    init_logging();
    let (state, effects) = update(BrowseSession::new(), Msg::SessionStarted);
    let context = fetch_context(&effects);

    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            context,
            page: page(&[1, 2], true),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.phase, BrowsePhase::Ready);
    assert_eq!(item_ids(&state), vec![1, 2]);
    assert!(view.has_more);
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.next_page, 2);
}

#[test]
fn equal_filter_does_not_reset_or_refetch() {
    init_logging();
    let (state, effects) = update(BrowseSession::new(), Msg::SessionStarted);
    let (mut state, _) = update(
        state,
        Msg::PageLoaded {
            context: fetch_context(&effects),
            page: page(&[1, 2], true),
        },
    );
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::FilterChanged(FilterSnapshot::new(String::new(), None)),
    );
    assert!(effects.is_empty());
    assert_eq!(item_ids(&state), vec![1, 2]);
    assert!(!state.consume_dirty());

    let (state, effects) = update(state, Msg::GenreSelected(Some(String::new())));
    assert!(effects.is_empty());
    assert_eq!(item_ids(&state), vec![1, 2]);
}

#[test]
fn filter_change_clears_items_and_fetches_page_one() {
    init_logging();
    let (state, effects) = update(BrowseSession::new(), Msg::SessionStarted);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            context: fetch_context(&effects),
            page: page(&[1, 2], true),
        },
    );

    let (state, effects) = update(state, Msg::SearchTextChanged("dracula".to_string()));

    let context = fetch_context(&effects);
    assert_eq!(context.page, 1);
    assert_eq!(context.snapshot.search_text(), "dracula");
    let view = state.view();
    assert!(view.items.is_empty());
    assert_eq!(view.phase, BrowsePhase::Loading { page: 1 });
    assert_eq!(view.active_filter.search_text(), "dracula");
    assert!(view.genre_options.is_empty());
}

#[test]
fn filter_change_before_start_starts_session() {
    init_logging();
    let (state, effects) = update(
        BrowseSession::new(),
        Msg::GenreSelected(Some("Gothic Fiction".to_string())),
    );
    assert_eq!(fetch_context(&effects).snapshot.genre(), Some("Gothic Fiction"));

    let (_state, effects) = update(state, Msg::SessionStarted);
    assert!(effects.is_empty());
}

#[test]
fn clear_filters_returns_to_unfiltered_catalog() {
    init_logging();
    let start = BrowseSession::with_filter(FilterSnapshot::new(
        "poe",
        Some("Gothic Fiction".to_string()),
    ));
    let (state, effects) = update(start, Msg::SessionStarted);
    assert_eq!(fetch_context(&effects).snapshot.search_text(), "poe");

    let (state, effects) = update(state, Msg::FiltersCleared);
    assert!(fetch_context(&effects).snapshot.is_unfiltered());
    assert!(state.active_filter().is_unfiltered());

    let (_state, effects) = update(state, Msg::FiltersCleared);
    assert!(effects.is_empty());
}

#[test]
fn genre_options_come_from_loaded_items_only() {
    init_logging();
    let (state, effects) = update(BrowseSession::new(), Msg::SessionStarted);
    let first = CatalogPage {
        items: vec![
            Item::new(1, "Dracula").with_genres(["Gothic Fiction", "Horror"]),
            Item::new(2, "Emma").with_genres(["Romance"]),
        ],
        has_more: true,
        total_count: Some(70_000),
    };
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            context: fetch_context(&effects),
            page: first,
        },
    );
    assert_eq!(
        state.view().genre_options,
        vec!["Gothic Fiction", "Horror", "Romance"]
    );
    assert_eq!(state.view().total_count, Some(70_000));

    let (state, effects) = update(state, Msg::MoreRequested);
    let second = CatalogPage {
        items: vec![Item::new(3, "Carmilla").with_genres(["Vampires", "Horror"])],
        has_more: true,
        total_count: Some(70_000),
    };
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            context: fetch_context(&effects),
            page: second,
        },
    );
    assert_eq!(
        state.view().genre_options,
        vec!["Gothic Fiction", "Horror", "Romance", "Vampires"]
    );
}

#[test]
fn empty_first_page_reports_no_results() {
    init_logging();
    let (state, effects) = update(
        BrowseSession::new(),
        Msg::SearchTextChanged("zzzz".to_string()),
    );
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            context: fetch_context(&effects),
            page: page(&[], false),
        },
    );

    let view = state.view();
    assert!(view.is_empty_result());
    assert!(!view.has_more);
}
