//! URL query parameters

use super::{QuerySource, StorageResult};
use std::borrow::Cow;
use std::collections::HashMap;
use url::Url;

/// Query parameters of the page URL
///
/// When a name repeats, the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// No parameters at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the query of a full URL
    pub fn from_url(url: &str) -> StorageResult<Self> {
        let url = Url::parse(url)?;
        Ok(Self::collect(url.query_pairs()))
    }

    /// Parse a bare query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::collect(url::form_urlencoded::parse(query.as_bytes()))
    }

    fn collect<'a>(pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> Self {
        let mut params = HashMap::new();
        for (name, value) in pairs {
            params
                .entry(name.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { params }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl QuerySource for QueryParams {
    fn get(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url() {
        let params = QueryParams::from_url(
            "https://ide.judge0.com/?judge0.theme=dark&judge0.styleOptions.showLogo=off",
        )
        .unwrap();
        assert_eq!(params.get("judge0.theme").as_deref(), Some("dark"));
        assert_eq!(
            params.get("judge0.styleOptions.showLogo").as_deref(),
            Some("off")
        );
        assert_eq!(params.get("theme"), None);
    }

    #[test]
    fn test_from_query_decodes_and_keeps_first() {
        let params = QueryParams::from_query("?a=one%20two&a=three&b=");
        assert_eq!(params.get("a").as_deref(), Some("one two"));
        assert_eq!(params.get("b").as_deref(), Some(""));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_invalid_url() {
        assert!(QueryParams::from_url("not a url").is_err());
        assert!(QueryParams::empty().is_empty());
    }
}
