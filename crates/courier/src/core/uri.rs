use crate::data::QuerySet;

/// Append the query string to `path`, if the query serialises to anything.
///
/// # Examples
///
/// ```
/// use courier::QuerySet;
/// use courier::core::resolve_uri;
///
/// let query: QuerySet = [("q", "x")].into_iter().collect();
/// assert_eq!(resolve_uri("search", Some(&query)), "search?q=x");
/// assert_eq!(resolve_uri("search", Some(&QuerySet::new())), "search");
/// assert_eq!(resolve_uri("search", None), "search");
/// ```
pub fn resolve_uri(path: &str, query: Option<&QuerySet>) -> String {
    match query.map(QuerySet::to_query_string) {
        Some(query) if !query.is_empty() => format!("{path}?{query}"),
        _ => path.to_string(),
    }
}

/// Prefix `path` with `base_url`, exactly once.
///
/// One leading `/` is dropped from the path and one trailing `/` from the
/// base. A path that already carries the base as a whole segment prefix
/// (with or without its leading slash) has that prefix removed before the
/// two are joined with a single `/`, which makes the merge idempotent.
///
/// # Examples
///
/// ```
/// use courier::core::merge_base_url;
///
/// let once = merge_base_url("/users", "http://localhost:8080/");
/// assert_eq!(once, "http://localhost:8080/users");
/// assert_eq!(merge_base_url(&once, "http://localhost:8080/"), once);
/// ```
pub fn merge_base_url(path: &str, base_url: &str) -> String {
    let stripped = path.strip_prefix('/').unwrap_or(path);
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    let rest = if base.is_empty() {
        stripped
    } else {
        [path, stripped]
            .into_iter()
            .find_map(|candidate| strip_base(candidate, base))
            .unwrap_or(stripped)
    };

    format!("{base}/{rest}")
}

/// `path` without `base` and its following separator, when `base` ends on a
/// segment boundary of `path`.
fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_base_url_slash_styles() {
        for (path, base) in [
            ("users", "http://h"),
            ("/users", "http://h"),
            ("users", "http://h/"),
            ("/users", "http://h/"),
        ] {
            assert_eq!(merge_base_url(path, base), "http://h/users", "{path} + {base}");
        }
    }

    #[test]
    fn test_merge_base_url_absolute_path() {
        assert_eq!(merge_base_url("http://h/users", "http://h"), "http://h/users");
        assert_eq!(merge_base_url("/api/users", "/api"), "/api/users");
        assert_eq!(merge_base_url("api/users", "api/"), "api/users");
    }

    #[test]
    fn test_merge_base_url_prefix_must_end_on_segment() {
        assert_eq!(merge_base_url("apiv2/users", "api"), "api/apiv2/users");
    }

    #[test]
    fn test_merge_base_url_edge_cases() {
        assert_eq!(merge_base_url("", "http://h"), "http://h/");
        assert_eq!(merge_base_url("/", "http://h"), "http://h/");
        assert_eq!(merge_base_url("http://h", "http://h"), "http://h/");
        assert_eq!(merge_base_url("users", ""), "/users");
        assert_eq!(merge_base_url("users", "/"), "/users");
    }

    #[test]
    fn test_merge_base_url_twice_is_noop() {
        let once = merge_base_url("/v1/items/", "https://example.com/api/");
        assert_eq!(once, "https://example.com/api/v1/items/");
        assert_eq!(merge_base_url(&once, "https://example.com/api/"), once);
    }

    #[test]
    fn test_resolve_uri_escapes_query() {
        let query: QuerySet = [("name", "a b")].into_iter().collect();
        assert_eq!(resolve_uri("http://h/users", Some(&query)), "http://h/users?name=a+b");
    }

    proptest! {
        #[test]
        fn prop_merge_base_url_is_idempotent(
            path in "/{0,2}[a-z:/.]{0,12}/{0,2}",
            base in "/{0,2}[a-z:/.]{0,12}/{0,2}",
        ) {
            let once = merge_base_url(&path, &base);
            let twice = merge_base_url(&once, &base);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_merge_base_url_arbitrary_strings(path in ".{0,16}", base in ".{0,16}") {
            let once = merge_base_url(&path, &base);
            prop_assert_eq!(merge_base_url(&once, &base), once);
        }

        #[test]
        fn prop_query_append(
            path in "[a-z/]{0,12}",
            pairs in proptest::collection::vec(("[a-z]{1,4}", "[a-z0-9 &=]{0,6}"), 1..4),
        ) {
            let query: QuerySet = pairs.into_iter().collect();
            let q = query.to_query_string();
            prop_assert_eq!(resolve_uri(&path, Some(&query)), format!("{path}?{q}"));
        }

        #[test]
        fn prop_empty_query_leaves_path(path in ".{0,16}") {
            prop_assert_eq!(resolve_uri(&path, Some(&QuerySet::new())), path.clone());
            prop_assert_eq!(resolve_uri(&path, None), path);
        }
    }
}
