use catalog_core::{FilterSnapshot, PageNumber};
use url::Url;

/// `<base>?page=<n>[&search=<text>][&topic=<genre>]`, form-encoded.
/// Blank search text and "all genres" are left out.
pub fn page_url(base: &Url, snapshot: &FilterSnapshot, page: PageNumber) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("page", &page.to_string());
        if let Some(search) = snapshot.search_query() {
            pairs.append_pair("search", search);
        }
        if let Some(genre) = snapshot.genre() {
            pairs.append_pair("topic", genre);
        }
    }
    url
}
