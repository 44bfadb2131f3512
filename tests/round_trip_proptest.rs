//! Property-based tests for round-trip and invariant conformance.
//!
//! These tests generate component sets and raw inputs, then verify that
//! parsing, formatting, and derivation preserve the crate's structural
//! rules: canonical round-trip idempotence, the authority/path coupling
//! rules on every accepted value, and identity preservation of no-op
//! updates.

use proptest::prelude::*;

use resource_uri::{Uri, UriChange, UriComponents, UriMap, join_path};

/// Strategies for generating component sets that the constructors accept.
mod strategies {
    use super::*;

    /// Characters for schemes: lowercase letters only, to keep generated
    /// schemes case-stable under formatting.
    const SCHEME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

    /// Characters for hosts, mixed case to exercise the case-insensitive
    /// authority comparison.
    const HOST_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-.";

    /// Characters for path segments, including several that need escaping
    /// and a literal percent to exercise tolerant decoding.
    const SEGMENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~ #?%=";

    /// Characters for queries and fragments.
    const TAIL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~ =&%";

    fn string_over(
        chars: &'static [u8],
        len: std::ops::RangeInclusive<usize>,
    ) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(chars.to_vec()), len)
            .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
    }

    pub fn scheme() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), string_over(SCHEME_CHARS, 1..=6)]
    }

    pub fn authority() -> impl Strategy<Value = String> {
        let host = string_over(HOST_CHARS, 1..=12);
        let with_port = (string_over(HOST_CHARS, 1..=12), 0..=65535_u32)
            .prop_map(|(host, port)| format!("{host}:{port}"));
        prop_oneof![Just(String::new()), host, with_port]
    }

    fn segment() -> impl Strategy<Value = String> {
        string_over(SEGMENT_CHARS, 1..=8)
    }

    fn absolute_path() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 0..=4)
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
    }

    pub fn tail() -> impl Strategy<Value = String> {
        string_over(TAIL_CHARS, 0..=10)
    }

    /// A component set that satisfies the authority/path coupling rules:
    /// relative paths are only generated when no authority is present.
    pub fn components() -> impl Strategy<Value = UriComponents> {
        (scheme(), authority()).prop_flat_map(|(scheme, authority)| {
            let path = if authority.is_empty() {
                prop_oneof![Just(String::new()), absolute_path(), relative_path()].boxed()
            } else {
                prop_oneof![Just(String::new()), absolute_path()].boxed()
            };
            (Just(scheme), Just(authority), path, tail(), tail()).prop_map(
                |(scheme, authority, path, query, fragment)| UriComponents {
                    scheme,
                    authority,
                    path,
                    query,
                    fragment,
                    fs_path: None,
                },
            )
        })
    }

    /// Raw inputs over a URI-shaped alphabet; parsing may accept or
    /// reject them.
    pub fn raw_input() -> impl Strategy<Value = String> {
        string_over(b"abcz09:/?#%@.-_ ", 0..=24)
    }
}

/// Segment-stack reference for the expected join-path normalization: `.`
/// and empty segments collapse, `..` pops, and a path that normalizes to
/// nothing yields the empty string.
fn reference_join(path: &str) -> String {
    let is_absolute = path.starts_with('/');
    let trailing = path.ends_with('/') && path.len() > 1;
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().copied() == Some("..") {
                    parts.push("..");
                } else if parts.is_empty() {
                    if !is_absolute {
                        parts.push("..");
                    }
                } else {
                    parts.pop();
                }
            }
            other => parts.push(other),
        }
    }
    let mut joined = parts.join("/");
    if joined.is_empty() {
        return if is_absolute { "/".to_string() } else { String::new() };
    }
    if is_absolute {
        joined.insert(0, '/');
    }
    if trailing {
        joined.push('/');
    }
    joined
}

proptest! {
    /// Formatting then parsing reproduces the canonical string exactly.
    #[test]
    fn canonical_form_round_trips(components in strategies::components()) {
        let uri = Uri::from_components(components).unwrap();
        let reparsed = Uri::parse(uri.as_str()).unwrap();
        prop_assert_eq!(reparsed.as_str(), uri.as_str());
        prop_assert_eq!(&reparsed, &uri);
    }

    /// In the unencoded display form a `#` can only be the fragment
    /// delimiter: path segments escape it, and the generated authorities,
    /// queries and fragments never contain one. Without a fragment there
    /// is no `#` at all.
    #[test]
    fn unencoded_form_escapes_structural_markers(components in strategies::components()) {
        let uri = Uri::from_components(components).unwrap();
        let display = uri.to_unencoded_string();
        if uri.fragment().is_empty() {
            prop_assert!(!display.contains('#'));
        }
    }

    /// Every value that parse accepts satisfies the authority/path
    /// coupling rules.
    #[test]
    fn accepted_values_satisfy_the_coupling_rules(input in strategies::raw_input()) {
        if let Ok(uri) = Uri::parse(&input) {
            if !uri.authority().is_empty() && !uri.path().is_empty() {
                prop_assert!(uri.path().starts_with('/'));
            }
            if uri.authority().is_empty() {
                prop_assert!(!uri.path().starts_with("//"));
            }
        }
    }

    /// An empty change set returns the identical instance.
    #[test]
    fn noop_with_preserves_identity(components in strategies::components()) {
        let uri = Uri::from_components(components).unwrap();
        let unchanged = uri.with(UriChange::default()).unwrap();
        prop_assert!(uri.ptr_eq(&unchanged));
    }

    /// Overriding every field with its current value also returns the
    /// identical instance.
    #[test]
    fn self_override_preserves_identity(components in strategies::components()) {
        let uri = Uri::from_components(components).unwrap();
        let unchanged = uri
            .with(UriChange {
                scheme: Some(uri.scheme().to_string()),
                authority: Some(uri.authority().to_string()),
                path: Some(uri.path().to_string()),
                query: Some(uri.query().to_string()),
                fragment: Some(uri.fragment().to_string()),
            })
            .unwrap();
        prop_assert!(uri.ptr_eq(&unchanged));
    }

    /// Joining zero segments is exactly normalization of the path alone.
    #[test]
    fn join_with_no_segments_normalizes(components in strategies::components()) {
        let uri = Uri::from_components(components).unwrap();
        if let Ok(joined) = join_path(&uri, &[]) {
            prop_assert_eq!(joined.path(), reference_join(uri.path()));
        }
    }

    /// Any spelling of a URI reaches the same map entry as its canonical
    /// form.
    #[test]
    fn map_lookup_is_canonicalization_stable(components in strategies::components()) {
        let uri = Uri::from_components(components).unwrap();
        let mut map = UriMap::new();
        map.insert(&uri, 1_u32);

        let reparsed = Uri::parse(uri.as_str()).unwrap();
        prop_assert_eq!(map.get(&reparsed), Some(&1));

        // Traversal re-parses the canonical key into an equal value.
        let key = map.keys().next().unwrap();
        prop_assert_eq!(&key, &reparsed);
    }

    /// `file` construction always succeeds and always yields an absolute
    /// path that round-trips.
    #[test]
    fn file_construction_is_total(input in strategies::raw_input()) {
        let uri = Uri::file(&input);
        prop_assert_eq!(uri.scheme(), "file");
        prop_assert!(uri.path().starts_with('/'));

        let reparsed = Uri::parse(uri.as_str()).unwrap();
        prop_assert_eq!(reparsed.as_str(), uri.as_str());
    }
}
