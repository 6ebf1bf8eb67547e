use catalog_core::{CatalogPage, Item};
use serde::Deserialize;

use crate::{FailureKind, FetchError};

#[derive(Debug, Deserialize)]
struct WirePage {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next: Option<String>,
    results: Vec<WireBook>,
}

#[derive(Debug, Deserialize)]
struct WireBook {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Vec<WirePerson>,
    #[serde(default)]
    bookshelves: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WirePerson {
    name: String,
}

impl From<WireBook> for Item {
    fn from(book: WireBook) -> Self {
        Item::new(book.id, book.title)
            .with_authors(book.authors.into_iter().map(|person| person.name))
            .with_genres(book.bookshelves)
    }
}

/// Decodes one catalog listing. More pages exist iff `next` is non-null.
pub fn decode_page(bytes: &[u8]) -> Result<CatalogPage, FetchError> {
    let wire: WirePage = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    Ok(CatalogPage {
        has_more: wire.next.is_some(),
        total_count: wire.count,
        items: wire.results.into_iter().map(Item::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "count": 2,
        "next": "https://gutendex.com/books/?page=2",
        "previous": null,
        "results": [
            {
                "id": 84,
                "title": "Frankenstein; Or, The Modern Prometheus",
                "authors": [{"name": "Shelley, Mary Wollstonecraft", "birth_year": 1797, "death_year": 1851}],
                "subjects": ["Gothic fiction", "Monsters -- Fiction"],
                "bookshelves": ["Gothic Fiction", "Science Fiction by Women"],
                "download_count": 80000
            },
            {
                "id": 345,
                "title": "Dracula",
                "authors": [{"name": "Stoker, Bram"}],
                "bookshelves": ["Gothic Fiction", "Gothic Fiction"]
            }
        ]
    }"#;

    #[test]
    fn listing_maps_to_items() {
        let page = decode_page(LISTING.as_bytes()).unwrap();

        assert!(page.has_more);
        assert_eq!(page.total_count, Some(2));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, 84);
        assert_eq!(page.items[0].authors, vec!["Shelley, Mary Wollstonecraft"]);
        assert!(page.items[0].genres.contains("Science Fiction by Women"));
        assert_eq!(page.items[1].genres.len(), 1);
    }

    #[test]
    fn null_next_means_last_page() {
        let page = decode_page(br#"{"count": 0, "next": null, "results": []}"#).unwrap();
        assert!(!page.has_more);
        assert!(page.items.is_empty());
    }

    #[test]
    fn missing_results_is_a_decode_error() {
        let err = decode_page(br#"{"detail": "Invalid page."}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::Decode);
    }
}
