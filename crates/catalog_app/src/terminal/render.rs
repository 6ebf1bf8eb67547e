use catalog_core::{BrowsePhase, BrowseState, Item};

use super::shelf::SavedBook;

pub fn render(view: &BrowseState) -> Vec<String> {
    let filter = &view.active_filter;
    let mut lines = vec![format!(
        "Filter: search={:?} genre={}",
        filter.search_text(),
        filter.genre().unwrap_or("All Genres")
    )];

    let count = view.items.len();
    let noun = if count == 1 { "Book" } else { "Books" };
    let mut found = format!("{count} {noun} Found");
    if let Some(total) = view.total_count {
        found.push_str(&format!(" (of {total} in catalog)"));
    }
    lines.push(found);

    lines.extend(view.items.iter().map(item_line));

    match view.phase {
        BrowsePhase::Idle => lines.push("Idle.".to_string()),
        BrowsePhase::Loading { page } => lines.push(format!("Loading page {page}...")),
        BrowsePhase::Ready if view.is_empty_result() => lines.push(
            "No books found matching your criteria. Type `clear` to reset filters.".to_string(),
        ),
        BrowsePhase::Ready if view.has_more => lines.push(format!(
            "More books available: type `more` to load page {}.",
            view.next_page
        )),
        BrowsePhase::Ready => lines.push("End of results.".to_string()),
        BrowsePhase::Error => {}
    }

    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}. Type `retry` to try again."));
    }
    lines
}

pub fn render_genres(view: &BrowseState) -> Vec<String> {
    if view.genre_options.is_empty() {
        return vec!["No genres among loaded books yet.".to_string()];
    }
    let mut lines = vec!["Genres among loaded books:".to_string()];
    lines.extend(view.genre_options.iter().map(|genre| format!("  {genre}")));
    lines
}

pub fn render_saved(saved: &[SavedBook]) -> Vec<String> {
    if saved.is_empty() {
        return vec!["No saved books.".to_string()];
    }
    let mut lines = vec![format!("{} saved for offline reading:", saved.len())];
    lines.extend(
        saved
            .iter()
            .map(|book| format!("  #{} {} by {}", book.id, book.title, authors(&book.authors))),
    );
    lines
}

fn item_line(item: &Item) -> String {
    format!("  #{} {} by {}", item.id, item.title, authors(&item.authors))
}

fn authors(names: &[String]) -> String {
    if names.is_empty() {
        "Unknown author".to_string()
    } else {
        names.join("; ")
    }
}
