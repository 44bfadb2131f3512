//! Single-pass decomposition of a raw URI string.
//!
//! Splits a string into the five still-encoded component substrings with
//! the exact capture semantics of the RFC 3986 Appendix B regular
//! expression: a group that does not participate yields the empty string.
//! No validation or decoding happens here.

/// The five raw (still percent-encoded) component substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawComponents<'a> {
    pub scheme: &'a str,
    pub authority: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

/// Decomposes `input` into its raw components.
///
/// Works back to front the way the Appendix B pattern does: the fragment
/// claims everything after the first `#`, the query everything after the
/// first remaining `?`; a scheme participates only when a `:` appears
/// before any `/` with at least one character in front of it; `//` then
/// delimits the authority up to the next `/`.
pub(crate) fn split(input: &str) -> RawComponents<'_> {
    let mut rest = input;

    let mut fragment = "";
    if let Some(idx) = rest.find('#') {
        fragment = &rest[idx + 1..];
        rest = &rest[..idx];
    }

    let mut query = "";
    if let Some(idx) = rest.find('?') {
        query = &rest[idx + 1..];
        rest = &rest[..idx];
    }

    let mut scheme = "";
    if let Some(idx) = rest.find([':', '/'])
        && idx > 0
        && rest.as_bytes()[idx] == b':'
    {
        scheme = &rest[..idx];
        rest = &rest[idx + 1..];
    }

    let mut authority = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find('/').unwrap_or(after.len());
        authority = &after[..end];
        rest = &after[end..];
    }

    RawComponents {
        scheme,
        authority,
        path: rest,
        query,
        fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(input: &str) -> (String, String, String, String, String) {
        let raw = split(input);
        (
            raw.scheme.to_string(),
            raw.authority.to_string(),
            raw.path.to_string(),
            raw.query.to_string(),
            raw.fragment.to_string(),
        )
    }

    #[test]
    fn splits_a_full_uri() {
        let raw = split("http://user@host:8080/a/b?q=1#frag");
        assert_eq!(raw.scheme, "http");
        assert_eq!(raw.authority, "user@host:8080");
        assert_eq!(raw.path, "/a/b");
        assert_eq!(raw.query, "q=1");
        assert_eq!(raw.fragment, "frag");
    }

    #[test]
    fn absent_groups_are_empty_strings() {
        assert_eq!(
            parts(""),
            (String::new(), String::new(), String::new(), String::new(), String::new())
        );
        let raw = split("just/a/path");
        assert_eq!(raw.scheme, "");
        assert_eq!(raw.authority, "");
        assert_eq!(raw.path, "just/a/path");
    }

    #[test]
    fn scheme_requires_a_colon_before_any_slash() {
        let raw = split("a/b:c");
        assert_eq!(raw.scheme, "");
        assert_eq!(raw.path, "a/b:c");

        let raw = split("mailto:joe");
        assert_eq!(raw.scheme, "mailto");
        assert_eq!(raw.path, "joe");
    }

    #[test]
    fn leading_colon_yields_no_scheme() {
        let raw = split(":foo");
        assert_eq!(raw.scheme, "");
        assert_eq!(raw.path, ":foo");
    }

    #[test]
    fn empty_authority_before_absolute_path() {
        let raw = split("file:///c:/test/me");
        assert_eq!(raw.scheme, "file");
        assert_eq!(raw.authority, "");
        assert_eq!(raw.path, "/c:/test/me");
    }

    #[test]
    fn extra_slashes_stay_in_the_path() {
        let raw = split("file:////shares/files/p.cs");
        assert_eq!(raw.authority, "");
        assert_eq!(raw.path, "//shares/files/p.cs");
    }

    #[test]
    fn authority_without_trailing_path() {
        let raw = split("foo://host");
        assert_eq!(raw.authority, "host");
        assert_eq!(raw.path, "");
    }

    #[test]
    fn authority_without_scheme() {
        let raw = split("//host/p");
        assert_eq!(raw.scheme, "");
        assert_eq!(raw.authority, "host");
        assert_eq!(raw.path, "/p");
    }

    #[test]
    fn question_mark_after_hash_belongs_to_the_fragment() {
        let raw = split("a#b?c");
        assert_eq!(raw.path, "a");
        assert_eq!(raw.query, "");
        assert_eq!(raw.fragment, "b?c");
    }

    #[test]
    fn hash_after_question_mark_splits_both() {
        let raw = split("a?b#c");
        assert_eq!(raw.path, "a");
        assert_eq!(raw.query, "b");
        assert_eq!(raw.fragment, "c");
    }

    #[test]
    fn empty_query_and_fragment_participate_as_empty() {
        let raw = split("a?#");
        assert_eq!(raw.path, "a");
        assert_eq!(raw.query, "");
        assert_eq!(raw.fragment, "");
    }
}
