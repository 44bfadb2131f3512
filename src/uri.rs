//! The URI value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use crate::components::{UriChange, UriComponents};
use crate::encoding;
use crate::error::{ParseError, ParseErrorKind};
use crate::grammar;
use crate::platform::PathStyle;

/// Shared storage behind a [`Uri`].
///
/// The five components are the identity; the cache cells are populated
/// lazily and take no part in equality or hashing.
struct UriInner {
    scheme: String,
    authority: String,
    path: String,
    query: String,
    fragment: String,
    canonical: OnceLock<String>,
    fs_path_posix: OnceLock<String>,
    fs_path_windows: OnceLock<String>,
}

/// An immutable URI conforming to the RFC 3986 generic syntax.
///
/// A `Uri` owns its five decoded components:
///
/// ```text
/// scheme://authority/path?query#fragment
/// ```
///
/// Values are created by [`parse`](Uri::parse), componentwise by
/// [`from_components`](Uri::from_components), or from a filesystem path by
/// [`file`](Uri::file). Every "modification" through [`with`](Uri::with)
/// produces a new value; a change set that alters nothing returns the
/// *same* instance, observable through [`ptr_eq`](Uri::ptr_eq). Clones are
/// cheap and share the lazily computed canonical string.
///
/// # Examples
///
/// ```
/// use resource_uri::{PathStyle, Uri};
///
/// let uri = Uri::parse("file://shares/files/c%23/p.cs").unwrap();
/// assert_eq!(uri.scheme(), "file");
/// assert_eq!(uri.authority(), "shares");
/// assert_eq!(uri.path(), "/files/c#/p.cs");
/// assert_eq!(uri.as_str(), "file://shares/files/c%23/p.cs");
/// assert_eq!(uri.fs_path(PathStyle::Posix), "//shares/files/c#/p.cs");
/// ```
///
/// Componentwise construction and the two output modes:
///
/// ```
/// use resource_uri::{Uri, UriComponents};
///
/// let uri = Uri::from_components(UriComponents {
///     scheme: "http".to_string(),
///     authority: "a-test-site.com".to_string(),
///     path: "/".to_string(),
///     query: "test=true".to_string(),
///     ..UriComponents::default()
/// })
/// .unwrap();
/// assert_eq!(uri.as_str(), "http://a-test-site.com/?test%3Dtrue");
/// assert_eq!(uri.to_unencoded_string(), "http://a-test-site.com/?test=true");
/// ```
#[derive(Clone)]
pub struct Uri {
    inner: Arc<UriInner>,
}

impl Uri {
    /// Parses a URI from a string.
    ///
    /// The input is decomposed with RFC 3986 Appendix B capture semantics
    /// and every component except the scheme is percent-decoded. Malformed
    /// percent-sequences pass through unchanged rather than failing, so
    /// already-decoded human-readable strings parse fine. Structurally
    /// unusual but valid inputs (an empty scheme, an empty authority) are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the decomposed components violate the
    /// authority/path coupling rules: a non-empty path alongside an
    /// authority must begin with `/`, and without an authority the path
    /// must not begin with `//`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let raw = grammar::split(input);
        let mut components = UriComponents {
            scheme: raw.scheme.to_string(),
            authority: encoding::decode(raw.authority),
            path: encoding::decode(raw.path),
            query: encoding::decode(raw.query),
            fragment: encoding::decode(raw.fragment),
            fs_path: None,
        };
        components.path = reference_resolve_path(&components.scheme, components.path);
        validate(&components.authority, &components.path).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })?;
        Ok(Self::new_unchecked(components))
    }

    /// Creates a URI from a components record.
    ///
    /// Equivalent to applying the record as a change set to an empty URI:
    /// fields left empty stay empty, except that the path of a `file`,
    /// `http` or `https` URI is forced absolute — those URIs are always
    /// authority-shaped when serialized, and a relative path would not
    /// survive the round trip. The `fs_path` field is output-only and
    /// ignored here.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] under the same rules as [`parse`](Uri::parse).
    pub fn from_components(mut components: UriComponents) -> Result<Self, ParseError> {
        components.path = reference_resolve_path(&components.scheme, components.path);
        validate(&components.authority, &components.path).map_err(|kind| ParseError {
            input: components.path.clone(),
            kind,
        })?;
        Ok(Self::new_unchecked(components))
    }

    /// Creates a `file:` URI from a filesystem path.
    ///
    /// Backslashes are normalized to forward slashes first. A path
    /// beginning with a double slash is read as a UNC location: the
    /// portion up to the next slash becomes the authority. The resulting
    /// path always begins with `/` — `file:` URIs are absolute — so this
    /// constructor cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_uri::Uri;
    ///
    /// let uri = Uri::file(r"\\shares\files\p.cs");
    /// assert_eq!(uri.authority(), "shares");
    /// assert_eq!(uri.path(), "/files/p.cs");
    ///
    /// let uri = Uri::file("notes.txt");
    /// assert_eq!(uri.path(), "/notes.txt");
    /// ```
    #[must_use]
    pub fn file(fs_path: &str) -> Self {
        let normalized = fs_path.replace('\\', "/");
        let (authority, mut path) = match normalized.strip_prefix("//") {
            Some(rest) => match rest.find('/') {
                Some(idx) => (rest[..idx].to_string(), rest[idx..].to_string()),
                None => (rest.to_string(), "/".to_string()),
            },
            None => (String::new(), normalized),
        };
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        Self::new_unchecked(UriComponents {
            scheme: "file".to_string(),
            authority,
            path,
            ..UriComponents::default()
        })
    }

    /// Returns a new URI with the given overrides applied.
    ///
    /// Each field of the change set replaces the current value only when
    /// it is present *and* non-empty; `Some("")` falls back to the current
    /// value just like `None` does, which means a component cannot be
    /// cleared here. This quirk is preserved deliberately — see
    /// [`UriChange`].
    ///
    /// When the effective components all equal the current ones, the same
    /// instance is returned ([`ptr_eq`](Uri::ptr_eq) holds). Callers keyed
    /// on identity rely on this.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the effective components violate the
    /// authority/path coupling rules.
    pub fn with(&self, change: UriChange) -> Result<Self, ParseError> {
        fn effective(override_value: Option<String>, current: &str) -> String {
            match override_value {
                Some(value) if !value.is_empty() => value,
                _ => current.to_string(),
            }
        }

        let scheme = effective(change.scheme, &self.inner.scheme);
        let authority = effective(change.authority, &self.inner.authority);
        let path = effective(change.path, &self.inner.path);
        let query = effective(change.query, &self.inner.query);
        let fragment = effective(change.fragment, &self.inner.fragment);

        if scheme == self.inner.scheme
            && authority == self.inner.authority
            && path == self.inner.path
            && query == self.inner.query
            && fragment == self.inner.fragment
        {
            return Ok(self.clone());
        }

        let path = reference_resolve_path(&scheme, path);
        validate(&authority, &path).map_err(|kind| ParseError {
            input: path.clone(),
            kind,
        })?;
        Ok(Self::new_unchecked(UriComponents {
            scheme,
            authority,
            path,
            query,
            fragment,
            fs_path: None,
        }))
    }

    /// Returns a new URI with the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the new path violates the
    /// authority/path coupling rules.
    pub fn with_path(&self, path: impl Into<String>) -> Result<Self, ParseError> {
        self.with(UriChange {
            path: Some(path.into()),
            ..UriChange::default()
        })
    }

    /// Returns a new URI with the given query.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when validation fails; with only the query
    /// changing this cannot happen in practice.
    pub fn with_query(&self, query: impl Into<String>) -> Result<Self, ParseError> {
        self.with(UriChange {
            query: Some(query.into()),
            ..UriChange::default()
        })
    }

    /// Returns a new URI with the given fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when validation fails; with only the
    /// fragment changing this cannot happen in practice.
    pub fn with_fragment(&self, fragment: impl Into<String>) -> Result<Self, ParseError> {
        self.with(UriChange {
            fragment: Some(fragment.into()),
            ..UriChange::default()
        })
    }

    /// Returns the scheme, without the trailing `:`. Empty if absent.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.inner.scheme
    }

    /// Returns the decoded authority, without the leading `//`. Empty if
    /// absent.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.inner.authority
    }

    /// Returns the decoded path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.inner.path
    }

    /// Returns the decoded query, without the leading `?`. Empty if absent.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.inner.query
    }

    /// Returns the decoded fragment, without the leading `#`. Empty if
    /// absent.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.inner.fragment
    }

    /// Returns the canonical percent-encoded string.
    ///
    /// Computed on first access and cached for the lifetime of the value;
    /// clones share the cache. Parsing the canonical string yields back an
    /// equal URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner
            .canonical
            .get_or_init(|| format_uri(&self.inner, false))
    }

    /// Returns the URI as a string with minimal escaping, for display.
    ///
    /// Only bare `#` and `?` inside path segments are escaped — leaving
    /// them raw would corrupt a later parse. Everything else, including
    /// spaces, is emitted as-is, so the result is *not* guaranteed to
    /// round-trip. Unlike [`as_str`](Uri::as_str) this form is recomputed
    /// on every call.
    #[must_use]
    pub fn to_unencoded_string(&self) -> String {
        format_uri(&self.inner, true)
    }

    /// Returns the filesystem path this URI corresponds to.
    ///
    /// A `file:` URI with a non-empty authority denotes a UNC location and
    /// yields `//authority/path`. A leading drive-letter segment keeps its
    /// slash and has the letter lower-cased. Under
    /// [`PathStyle::Windows`] all separators become backslashes. This is a
    /// pure string transform — no filesystem access, no normalization —
    /// cached per style.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_uri::{PathStyle, Uri};
    ///
    /// let uri = Uri::parse("file:///c:/test/me").unwrap();
    /// assert_eq!(uri.fs_path(PathStyle::Posix), "/c:/test/me");
    ///
    /// let unc = Uri::parse("file://shares/files/p.cs").unwrap();
    /// assert_eq!(unc.fs_path(PathStyle::Windows), r"\\shares\files\p.cs");
    /// ```
    #[must_use]
    pub fn fs_path(&self, style: PathStyle) -> &str {
        let cell = match style {
            PathStyle::Posix => &self.inner.fs_path_posix,
            PathStyle::Windows => &self.inner.fs_path_windows,
        };
        cell.get_or_init(|| derive_fs_path(&self.inner, style))
    }

    /// Returns a components record with the five decoded fields.
    #[must_use]
    pub fn to_components(&self) -> UriComponents {
        UriComponents {
            scheme: self.inner.scheme.clone(),
            authority: self.inner.authority.clone(),
            path: self.inner.path.clone(),
            query: self.inner.query.clone(),
            fragment: self.inner.fragment.clone(),
            fs_path: None,
        }
    }

    /// Returns a structural snapshot for serialization boundaries,
    /// including the derived filesystem path for the given style.
    #[must_use]
    pub fn snapshot(&self, style: PathStyle) -> UriComponents {
        UriComponents {
            fs_path: Some(self.fs_path(style).to_string()),
            ..self.to_components()
        }
    }

    /// Returns true if `self` and `other` are the same instance.
    ///
    /// This is identity, not structural equality: a no-op
    /// [`with`](Uri::with) and a [`Clone`] both preserve it, while two
    /// separate parses of the same string do not.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn new_unchecked(components: UriComponents) -> Self {
        Self {
            inner: Arc::new(UriInner {
                scheme: components.scheme,
                authority: components.authority,
                path: components.path,
                query: components.query,
                fragment: components.fragment,
                canonical: OnceLock::new(),
                fs_path_posix: OnceLock::new(),
                fs_path_windows: OnceLock::new(),
            }),
        }
    }
}

/// Forces the path of a `file`, `http` or `https` URI absolute. Those
/// schemes always serialize in authority shape, where a relative path
/// would merge into the authority on the next parse.
fn reference_resolve_path(scheme: &str, path: String) -> String {
    match scheme {
        "file" | "http" | "https" => {
            if path.is_empty() {
                "/".to_string()
            } else if path.starts_with('/') {
                path
            } else {
                let mut absolute = String::with_capacity(path.len() + 1);
                absolute.push('/');
                absolute.push_str(&path);
                absolute
            }
        }
        _ => path,
    }
}

fn validate(authority: &str, path: &str) -> Result<(), ParseErrorKind> {
    if authority.is_empty() {
        if path.starts_with("//") {
            return Err(ParseErrorKind::DoubleSlashPathWithoutAuthority);
        }
    } else if !path.is_empty() && !path.starts_with('/') {
        return Err(ParseErrorKind::RelativePathWithAuthority);
    }
    Ok(())
}

fn format_uri(inner: &UriInner, skip_encoding: bool) -> String {
    let mut out = String::new();

    if !inner.scheme.is_empty() {
        out.push_str(&inner.scheme);
        out.push(':');
    }

    // `file:` URIs are always authority-shaped, even with no authority.
    if !inner.authority.is_empty() || inner.scheme == "file" {
        out.push_str("//");
    }

    if !inner.authority.is_empty() {
        let authority = inner.authority.to_ascii_lowercase();
        if skip_encoding {
            out.push_str(&authority);
        } else {
            // Split at the first colon so a digit-only port never gains
            // escapes.
            match authority.find(':') {
                Some(idx) => {
                    out.push_str(&encoding::encode_component(&authority[..idx]));
                    out.push(':');
                    out.push_str(&encoding::encode_component(&authority[idx + 1..]));
                }
                None => out.push_str(&encoding::encode_component(&authority)),
            }
        }
    }

    if !inner.path.is_empty() {
        match lowercase_drive_letter(&inner.path) {
            Some(lowered) => encoding::append_path(&mut out, &lowered, skip_encoding),
            None => encoding::append_path(&mut out, &inner.path, skip_encoding),
        }
    }

    if !inner.query.is_empty() {
        out.push('?');
        if skip_encoding {
            out.push_str(&inner.query);
        } else {
            out.push_str(&encoding::encode_component(&inner.query));
        }
    }

    if !inner.fragment.is_empty() {
        out.push('#');
        if skip_encoding {
            out.push_str(&inner.fragment);
        } else {
            out.push_str(&encoding::encode_component(&inner.fragment));
        }
    }

    out
}

/// Lower-cases an upper-case drive letter in `/C:...` or `C:...` form.
/// Returns `None` when the path has no upper-case drive letter.
fn lowercase_drive_letter(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_uppercase() && bytes[2] == b':' {
        let mut lowered = String::with_capacity(path.len());
        lowered.push('/');
        lowered.push(bytes[1].to_ascii_lowercase() as char);
        lowered.push_str(&path[2..]);
        Some(lowered)
    } else if bytes.len() >= 2 && bytes[0].is_ascii_uppercase() && bytes[1] == b':' {
        let mut lowered = String::with_capacity(path.len());
        lowered.push(bytes[0].to_ascii_lowercase() as char);
        lowered.push_str(&path[1..]);
        Some(lowered)
    } else {
        None
    }
}

fn derive_fs_path(inner: &UriInner, style: PathStyle) -> String {
    let bytes = inner.path.as_bytes();
    let mut value = if !inner.authority.is_empty() && inner.path.len() > 1 && inner.scheme == "file"
    {
        format!("//{}{}", inner.authority, inner.path)
    } else if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':'
    {
        let mut lowered = String::with_capacity(inner.path.len());
        lowered.push('/');
        lowered.push(bytes[1].to_ascii_lowercase() as char);
        lowered.push_str(&inner.path[2..]);
        lowered
    } else {
        inner.path.clone()
    };
    if style.is_windows() {
        value = value.replace('/', "\\");
    }
    value
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.inner.scheme)
            .field("authority", &self.inner.authority)
            .field("path", &self.inner.path)
            .field("query", &self.inner.query)
            .field("fragment", &self.inner.fragment)
            .finish()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq for Uri {
    /// Structural equality over the five components. The authority is
    /// compared case-insensitively; caches are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.inner.scheme == other.inner.scheme
            && self
                .inner
                .authority
                .eq_ignore_ascii_case(&other.inner.authority)
            && self.inner.path == other.inner.path
            && self.inner.query == other.inner.query
            && self.inner.fragment == other.inner.fragment
    }
}

impl Eq for Uri {}

impl Hash for Uri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.scheme.hash(state);
        self.inner.authority.to_ascii_lowercase().hash(state);
        self.inner.path.hash(state);
        self.inner.query.hash(state);
        self.inner.fragment.hash(state);
    }
}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
