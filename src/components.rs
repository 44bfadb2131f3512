//! Component records for constructing and serializing URIs.

/// The decomposed, decoded form of a URI.
///
/// This is the record shape accepted by [`Uri::from_components`] and
/// produced by [`Uri::to_components`] / [`Uri::snapshot`]. All fields hold
/// decoded text; an absent component is the empty string.
///
/// [`Uri::from_components`]: crate::Uri::from_components
/// [`Uri::to_components`]: crate::Uri::to_components
/// [`Uri::snapshot`]: crate::Uri::snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UriComponents {
    /// Scheme, without the trailing `:`. Case is preserved as given.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scheme: String,
    /// Authority, without the leading `//`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub authority: String,
    /// Decoded path. Leading-slash semantics are meaningful.
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: String,
    /// Decoded query, without the leading `?`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub query: String,
    /// Decoded fragment, without the leading `#`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fragment: String,
    /// Derived filesystem path. Output-only: populated by
    /// [`Uri::snapshot`] and ignored on construction.
    ///
    /// [`Uri::snapshot`]: crate::Uri::snapshot
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub fs_path: Option<String>,
}

/// A per-field override set for [`Uri::with`].
///
/// A field that is `None` keeps the current value. So does a field set to
/// `Some` of the empty string: overrides are applied only when non-empty,
/// which means a component cannot be cleared through [`Uri::with`]. This
/// quirk is part of the observed contract and is preserved deliberately.
///
/// # Examples
///
/// ```
/// use resource_uri::{Uri, UriChange};
///
/// let base = Uri::parse("http://example.com/a").unwrap();
/// let moved = base
///     .with(UriChange {
///         path: Some("/b".to_string()),
///         ..UriChange::default()
///     })
///     .unwrap();
/// assert_eq!(moved.path(), "/b");
/// assert_eq!(moved.authority(), "example.com");
/// ```
///
/// [`Uri::with`]: crate::Uri::with
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UriChange {
    /// Replacement scheme, applied when non-empty.
    pub scheme: Option<String>,
    /// Replacement authority, applied when non-empty.
    pub authority: Option<String>,
    /// Replacement path, applied when non-empty.
    pub path: Option<String>,
    /// Replacement query, applied when non-empty.
    pub query: Option<String>,
    /// Replacement fragment, applied when non-empty.
    pub fragment: Option<String>,
}

impl UriChange {
    /// Returns true if no field carries an effective override.
    ///
    /// `Some("")` counts as no override, matching how the change set is
    /// applied.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        [
            &self.scheme,
            &self.authority,
            &self.path,
            &self.query,
            &self.fragment,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_components_are_all_empty() {
        let c = UriComponents::default();
        assert_eq!(c.scheme, "");
        assert_eq!(c.authority, "");
        assert_eq!(c.path, "");
        assert_eq!(c.query, "");
        assert_eq!(c.fragment, "");
        assert_eq!(c.fs_path, None);
    }

    #[test]
    fn empty_change_is_noop() {
        assert!(UriChange::default().is_noop());
    }

    #[test]
    fn empty_string_override_is_noop() {
        let change = UriChange {
            query: Some(String::new()),
            ..UriChange::default()
        };
        assert!(change.is_noop());
    }

    #[test]
    fn non_empty_override_is_not_noop() {
        let change = UriChange {
            path: Some("/x".to_string()),
            ..UriChange::default()
        };
        assert!(!change.is_noop());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn components_deserialize_with_missing_fields() {
        let c: UriComponents = serde_json::from_str(r#"{"scheme":"http"}"#).unwrap();
        assert_eq!(c.scheme, "http");
        assert_eq!(c.path, "");
        assert_eq!(c.fs_path, None);
    }
}
