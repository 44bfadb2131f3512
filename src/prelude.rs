//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for the crate's common surface:
//!
//! ```rust
//! use resource_uri::prelude::*;
//!
//! let uri = Uri::parse("file:///c:/test/me").unwrap();
//! assert_eq!(uri.fs_path(PathStyle::Posix), "/c:/test/me");
//! ```

pub use crate::{
    // Core types
    PathStyle, Uri, UriChange, UriComponents,
    // Containers
    UriKeyFn, UriMap,
    // Path operations
    basename, dirname, extname, join_path, resolve_path,
    // Errors
    ParseError, ParseErrorKind,
};
