//! Path operations over a URI's path component.
//!
//! Pure transforms with POSIX semantics: nothing here resolves against a
//! base URI or touches a filesystem. Each derivation goes through
//! [`Uri::with`]-style construction, so the authority/path coupling rules
//! keep holding on every result.

use crate::error::ParseError;
use crate::posix;
use crate::uri::Uri;

/// Replaces the URI's path, allowing the empty string (which
/// [`Uri::with`] cannot express) and returning the same instance when
/// nothing changes.
fn replace_path(uri: &Uri, new_path: String) -> Result<Uri, ParseError> {
    if new_path == uri.path() {
        return Ok(uri.clone());
    }
    let mut components = uri.to_components();
    components.path = new_path;
    Uri::from_components(components)
}

/// Joins the given segments onto the URI's path and normalizes the
/// result.
///
/// A trailing separator on the last meaningful segment is preserved. A
/// path that normalizes away entirely becomes the empty string rather
/// than `.` — a URI with a `.` path serializes confusingly.
///
/// # Examples
///
/// ```
/// use resource_uri::{Uri, join_path};
///
/// let base = Uri::parse("foo://a/foo/bar/").unwrap();
/// let joined = join_path(&base, &["x/y/z", ".."]).unwrap();
/// assert_eq!(joined.as_str(), "foo://a/foo/bar/x/y");
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] when the joined path violates the
/// authority/path coupling rules, e.g. joining a URI with an authority
/// down to a relative path.
pub fn join_path(uri: &Uri, segments: &[&str]) -> Result<Uri, ParseError> {
    let mut parts = Vec::with_capacity(segments.len() + 1);
    parts.push(uri.path());
    parts.extend_from_slice(segments);
    let mut joined = posix::join(&parts);
    if joined == "." {
        joined = String::new();
    }
    replace_path(uri, joined)
}

/// Resolves the given segments against the URI's path as a base.
///
/// Absolute segments replace the base entirely; relative segments
/// accumulate on top. The result carries no trailing separator — resolve
/// computes an absolute target, join extends a path.
///
/// # Examples
///
/// ```
/// use resource_uri::{Uri, resolve_path};
///
/// let base = Uri::parse("foo://a/foo/bar/").unwrap();
/// let resolved = resolve_path(&base, &["/x"]).unwrap();
/// assert_eq!(resolved.as_str(), "foo://a/x");
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] when the resolved path violates the
/// authority/path coupling rules.
pub fn resolve_path(uri: &Uri, segments: &[&str]) -> Result<Uri, ParseError> {
    let mut base = uri.path().to_string();
    let mut slash_added = false;
    if !base.starts_with('/') {
        base.insert(0, '/');
        slash_added = true;
    }

    let mut parts = Vec::with_capacity(segments.len() + 1);
    parts.push(base.as_str());
    parts.extend_from_slice(segments);
    let mut resolved = posix::resolve(&parts);

    // Resolving forced the base absolute; a URI without an authority gets
    // its relative shape back.
    if slash_added && resolved.starts_with('/') && uri.authority().is_empty() {
        resolved.remove(0);
    }
    replace_path(uri, resolved)
}

/// Returns the URI with its path shortened to the directory portion.
///
/// When the path has no directory component to strip the original
/// instance is returned unchanged, never a URI whose path is `.`.
///
/// # Examples
///
/// ```
/// use resource_uri::{Uri, dirname};
///
/// let uri = Uri::parse("foo://a/b/c").unwrap();
/// assert_eq!(dirname(&uri).unwrap().as_str(), "foo://a/b");
///
/// let bare = Uri::parse("foo://a").unwrap();
/// assert!(dirname(&bare).unwrap().ptr_eq(&bare));
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] when the shortened path violates the
/// authority/path coupling rules; for paths this function produces that
/// does not happen in practice.
pub fn dirname(uri: &Uri) -> Result<Uri, ParseError> {
    let dir = posix::dirname(uri.path());
    if dir == "." {
        return Ok(uri.clone());
    }
    replace_path(uri, dir.to_string())
}

/// Returns the last segment of the URI's path, ignoring trailing
/// separators.
#[must_use]
pub fn basename(uri: &Uri) -> &str {
    posix::basename(uri.path())
}

/// Returns the extension of the URI's path, from the last `.` of the
/// final segment to its end.
#[must_use]
pub fn extname(uri: &Uri) -> &str {
    posix::extname(uri.path())
}
