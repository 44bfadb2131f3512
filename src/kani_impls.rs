//! Kani proof harnesses for the construction invariants.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Uri, UriComponents};

/// Characters appearing in generated schemes and authorities
const NAME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-.";

/// Characters appearing in generated paths, including separators
const PATH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-./";

/// Generate a bounded string over the given alphabet.
fn arbitrary_string(chars: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    kani::assume(len <= max_len);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            chars[idx % chars.len()] as char
        })
        .collect()
}

fn arbitrary_components() -> UriComponents {
    UriComponents {
        scheme: arbitrary_string(NAME_CHARS, 3),
        authority: arbitrary_string(NAME_CHARS, 3),
        path: arbitrary_string(PATH_CHARS, 4),
        query: arbitrary_string(NAME_CHARS, 2),
        fragment: arbitrary_string(NAME_CHARS, 2),
        fs_path: None,
    }
}

/// Every accepted construction upholds the authority/path coupling rules.
#[kani::proof]
#[kani::unwind(8)]
fn construction_upholds_authority_path_coupling() {
    let components = arbitrary_components();
    if let Ok(uri) = Uri::from_components(components) {
        if !uri.authority().is_empty() && !uri.path().is_empty() {
            assert!(uri.path().starts_with('/'));
        }
        if uri.authority().is_empty() {
            assert!(!uri.path().starts_with("//"));
        }
    }
}

/// Parsing never accepts a value that violates the coupling rules.
#[kani::proof]
#[kani::unwind(8)]
fn parse_upholds_authority_path_coupling() {
    let input = arbitrary_string(PATH_CHARS, 6);
    if let Ok(uri) = Uri::parse(&input) {
        if uri.authority().is_empty() {
            assert!(!uri.path().starts_with("//"));
        }
    }
}

/// A no-op change set hands back the identical instance.
#[kani::proof]
#[kani::unwind(8)]
fn noop_with_preserves_identity() {
    let components = arbitrary_components();
    if let Ok(uri) = Uri::from_components(components) {
        let unchanged = uri.with(crate::UriChange::default());
        assert!(unchanged.is_ok_and(|same| same.ptr_eq(&uri)));
    }
}
