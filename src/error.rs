//! Error types for URI construction.

use std::fmt;

/// Error returned when a URI cannot be constructed.
///
/// Carries the input that was being assembled together with the specific
/// rule that rejected it. Returned by [`Uri::parse`], [`Uri::from_components`]
/// and [`Uri::with`].
///
/// [`Uri::parse`]: crate::Uri::parse
/// [`Uri::from_components`]: crate::Uri::from_components
/// [`Uri::with`]: crate::Uri::with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed validation. For [`Uri::parse`] this is the raw
    /// string; for componentwise construction it is the offending path.
    ///
    /// [`Uri::parse`]: crate::Uri::parse
    pub input: String,
    /// The specific rule that was violated
    pub kind: ParseErrorKind,
}

/// Specific URI construction error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The URI has an authority component, but its path neither is empty
    /// nor begins with a slash. Serializing such a URI would merge the path
    /// into the authority.
    RelativePathWithAuthority,
    /// The URI has no authority component, but its path begins with two
    /// slashes. Serializing such a URI would turn the first path segment
    /// into an authority.
    DoubleSlashPathWithoutAuthority,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid URI '{}': ", self.input)?;
        match self.kind {
            ParseErrorKind::RelativePathWithAuthority => write!(
                f,
                "a URI with an authority must have a path that is empty or begins with a slash"
            ),
            ParseErrorKind::DoubleSlashPathWithoutAuthority => write!(
                f,
                "a URI without an authority cannot have a path beginning with two slashes"
            ),
        }
    }
}

impl std::error::Error for ParseError {}
