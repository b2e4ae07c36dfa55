//! Persisting the current page.
//!
//! The paginator only knows the [`ViewStatePersistence`] trait. The stock
//! implementation mirrors the page into a URL query parameter and writes the
//! URL back through a [`History`] by replacing the current entry, so paging
//! never adds history entries. [`MemoryPersistence`] keeps the value in
//! process, the way a local storage slot would.

use crate::error::{Error, Result};
use url::Url;

/// Default name of the query parameter carrying the page number.
pub const DEFAULT_PARAM: &str = "page";

/// Storage for the paginator's view state.
pub trait ViewStatePersistence {
    /// Returns the stored raw page value, if any. The value is not validated;
    /// the paginator parses and clamps it.
    fn load(&self) -> Option<String>;

    /// Stores `page`. Page 1 is the default and is stored as "no value".
    fn store(&mut self, page: usize);
}

/// Navigation history of a browsing context.
pub trait History {
    /// The current location, as an absolute URL.
    fn location(&self) -> &str;

    /// Replaces the current entry with `url` without navigating.
    fn replace_state(&mut self, url: String);
}

/// An in-process history stack.
///
/// ```rust
/// use list_pager::persist::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new("https://example.com/posts");
/// history.replace_state("https://example.com/posts?page=2".to_string());
/// assert_eq!(history.location(), "https://example.com/posts?page=2");
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    replacements: usize,
}

impl MemoryHistory {
    /// Creates a history with a single entry.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            entries: vec![location.into()],
            replacements: 0,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times the current entry has been replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or_default()
    }

    fn replace_state(&mut self, url: String) {
        match self.entries.last_mut() {
            Some(current) => *current = url,
            None => self.entries.push(url),
        }
        self.replacements += 1;
    }
}

/// Returns the decoded value of the first `name` parameter in the query of
/// `location`. `+` and percent escapes are decoded.
///
/// ```rust
/// use list_pager::persist::read_query_param;
///
/// let href = "https://example.com/?tag=rust&page=4&page=9";
/// assert_eq!(read_query_param(href, "page").unwrap(), Some("4".to_string()));
/// assert_eq!(read_query_param(href, "missing").unwrap(), None);
/// ```
pub fn read_query_param(location: &str, name: &str) -> Result<Option<String>> {
    let url = parse_location(location)?;
    let value = url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned());
    Ok(value)
}

/// Returns `location` with the `name` parameter set to `value`, or removed
/// when `value` is `None`.
///
/// Setting replaces the first occurrence in place and drops later
/// duplicates; removing drops every occurrence. Other parameters and the
/// fragment are kept. An empty query is dropped together with its `?`.
///
/// ```rust
/// use list_pager::persist::write_query_param;
///
/// let href = "https://example.com/posts?tag=rust#top";
/// assert_eq!(
///     write_query_param(href, "page", Some("3")).unwrap(),
///     "https://example.com/posts?tag=rust&page=3#top"
/// );
/// assert_eq!(
///     write_query_param("https://example.com/posts?page=3", "page", None).unwrap(),
///     "https://example.com/posts"
/// );
/// ```
pub fn write_query_param(location: &str, name: &str, value: Option<&str>) -> Result<String> {
    let mut url = parse_location(location)?;

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (key, existing) in url.query_pairs() {
        if key != name {
            pairs.push((key.into_owned(), existing.into_owned()));
        } else if let (Some(value), false) = (value, replaced) {
            pairs.push((key.into_owned(), value.to_string()));
            replaced = true;
        }
    }
    if let (Some(value), false) = (value, replaced) {
        pairs.push((name.to_string(), value.to_string()));
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    Ok(url.into())
}

fn parse_location(location: &str) -> Result<Url> {
    Url::parse(location).map_err(|source| Error::InvalidUrl {
        url: location.to_string(),
        source,
    })
}

/// Persists the page in a query parameter of the history's location.
#[derive(Debug, Clone)]
pub struct QueryStringPersistence<H: History> {
    history: H,
    param: String,
}

impl<H: History> QueryStringPersistence<H> {
    /// Uses the default `page` parameter.
    pub fn new(history: H) -> Self {
        Self::with_param(history, DEFAULT_PARAM)
    }

    /// Uses a custom parameter name.
    pub fn with_param(history: H, param: impl Into<String>) -> Self {
        Self {
            history,
            param: param.into(),
        }
    }

    /// The underlying history.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the underlying history.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// The parameter name.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Consumes the persistence and returns the history.
    pub fn into_history(self) -> H {
        self.history
    }
}

impl<H: History> ViewStatePersistence for QueryStringPersistence<H> {
    fn load(&self) -> Option<String> {
        match read_query_param(self.history.location(), &self.param) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(%err, "ignoring unreadable location");
                None
            }
        }
    }

    fn store(&mut self, page: usize) {
        let value = (page != 1).then(|| page.to_string());
        match write_query_param(self.history.location(), &self.param, value.as_deref()) {
            Ok(url) => {
                tracing::trace!(%url, "replacing history entry");
                self.history.replace_state(url);
            }
            Err(err) => tracing::debug!(%err, page, "page not persisted"),
        }
    }
}

/// Keeps the page in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPersistence {
    value: Option<String>,
}

impl MemoryPersistence {
    /// Starts empty, which resolves to page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a raw stored value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// The raw stored value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ViewStatePersistence for MemoryPersistence {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn store(&mut self, page: usize) {
        self.value = (page != 1).then(|| page.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_decodes_plus_and_percent() {
        let href = "https://example.com/?q=a+b%21&page=%32";
        assert_eq!(read_query_param(href, "q").unwrap().as_deref(), Some("a b!"));
        assert_eq!(read_query_param(href, "page").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_read_rejects_relative_location() {
        let err = read_query_param("/posts?page=2", "page").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_write_replaces_first_occurrence_in_place() {
        let href = "https://example.com/?page=2&tag=rust&page=7";
        assert_eq!(
            write_query_param(href, "page", Some("5")).unwrap(),
            "https://example.com/?page=5&tag=rust"
        );
    }

    #[test]
    fn test_write_remove_keeps_other_params() {
        let href = "https://example.com/?page=2&tag=rust&page=7";
        assert_eq!(
            write_query_param(href, "page", None).unwrap(),
            "https://example.com/?tag=rust"
        );
    }

    #[test]
    fn test_write_remove_without_query() {
        let href = "https://example.com/posts";
        assert_eq!(write_query_param(href, "page", None).unwrap(), href);
    }

    #[test]
    fn test_query_string_round_trip() {
        let mut persistence =
            QueryStringPersistence::new(MemoryHistory::new("https://example.com/posts"));

        for page in 2..=6 {
            persistence.store(page);
            assert_eq!(persistence.load(), Some(page.to_string()));
        }

        persistence.store(1);
        assert_eq!(persistence.load(), None);
        assert_eq!(persistence.history().location(), "https://example.com/posts");
    }

    #[test]
    fn test_store_replaces_instead_of_pushing() {
        let mut persistence =
            QueryStringPersistence::new(MemoryHistory::new("https://example.com/posts"));
        persistence.store(2);
        persistence.store(3);

        assert_eq!(persistence.history().len(), 1);
        assert_eq!(persistence.history().replacements(), 2);
    }

    #[test]
    fn test_store_with_unparsable_location_is_skipped() {
        let mut persistence = QueryStringPersistence::new(MemoryHistory::new("not a url"));
        persistence.store(4);

        assert_eq!(persistence.history().location(), "not a url");
        assert_eq!(persistence.history().replacements(), 0);
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn test_custom_param_name() {
        let mut persistence = QueryStringPersistence::with_param(
            MemoryHistory::new("https://example.com/?page=9"),
            "p",
        );
        persistence.store(4);
        assert_eq!(
            persistence.history().location(),
            "https://example.com/?page=9&p=4"
        );
    }

    #[test]
    fn test_memory_persistence() {
        let mut persistence = MemoryPersistence::with_value("7");
        assert_eq!(persistence.load().as_deref(), Some("7"));

        persistence.store(1);
        assert_eq!(persistence.value(), None);
        persistence.store(3);
        assert_eq!(persistence.value(), Some("3"));
    }
}
