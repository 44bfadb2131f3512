//! URI value type conforming to the RFC 3986 generic syntax, with
//! POSIX-style path operations over the path component.
//!
//! This crate provides the foundational addressing type used by editor and
//! tooling systems that parse, compare, transform, and re-serialize
//! resource identifiers — file paths, in-memory buffers, HTTP locations —
//! without ever touching a filesystem.
//!
//! # Overview
//!
//! A [`Uri`] holds five decoded components:
//!
//! ```text
//! scheme://authority/path?query#fragment
//! ```
//!
//! Parsing decomposes a string with the capture semantics of the RFC 3986
//! Appendix B pattern, percent-decodes each component, and validates the
//! authority/path coupling rules. Serializing re-applies a canonical
//! percent-encoding, so `Uri::parse(uri.as_str())` always gets back an
//! equal value.
//!
//! # Quick Start
//!
//! ```rust
//! use resource_uri::{PathStyle, Uri, dirname, join_path};
//!
//! // Parse a URI and access its components
//! let uri = Uri::parse("file://shares/files/c%23/p.cs").unwrap();
//! assert_eq!(uri.scheme(), "file");
//! assert_eq!(uri.authority(), "shares");
//! assert_eq!(uri.path(), "/files/c#/p.cs");
//!
//! // Round-trip through the canonical string
//! assert_eq!(uri.as_str(), "file://shares/files/c%23/p.cs");
//!
//! // Derive the filesystem path for an injected separator convention
//! assert_eq!(uri.fs_path(PathStyle::Windows), r"\\shares\files\c#\p.cs");
//!
//! // Pure path operations produce new values
//! let parent = dirname(&uri).unwrap();
//! assert_eq!(parent.as_str(), "file://shares/files");
//! let sibling = join_path(&parent, &["readme.md"]).unwrap();
//! assert_eq!(sibling.as_str(), "file://shares/files/readme.md");
//! ```
//!
//! # Value Semantics
//!
//! `Uri` values are immutable. [`Uri::with`] derives a new value from an
//! override set and returns the *same* instance when nothing changes —
//! identity-sensitive callers can rely on [`Uri::ptr_eq`]. Equality and
//! hashing are defined over the five components only (the authority
//! compares case-insensitively); the lazily computed canonical string and
//! filesystem path never participate.
//!
//! # What this crate does not do
//!
//! No network resolution, no filesystem access, no scheme-specific
//! semantics (`mailto:`, `data:`, … get only the generic syntax), and no
//! relative-reference resolution against a base URI — the path operations
//! deliberately stay within one URI's path component.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod components;
pub mod encoding;
mod error;
mod grammar;
#[cfg(kani)]
mod kani_impls;
mod map;
mod path_ops;
mod platform;
mod posix;
pub mod prelude;
mod uri;

pub use components::{UriChange, UriComponents};
pub use error::{ParseError, ParseErrorKind};
pub use map::{UriKeyFn, UriMap};
pub use path_ops::{basename, dirname, extname, join_path, resolve_path};
pub use platform::PathStyle;
pub use uri::Uri;
