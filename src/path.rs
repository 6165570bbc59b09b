//! Path utilities shared by the classifier and the navigator.
//!
//! Wizard paths come from history entries and may carry query strings or
//! fragments (`/offre/AB12/individuel/creation?structure=12#infos`). Step
//! classification only looks at the path component, so callers funnel raw
//! locations through [`strip_query`] and [`normalize_path`] first.
//!
//! [`normalize_path`] returns `Cow<str>` to avoid allocations when paths are
//! already normalized, which is the common case for history entries.

use std::borrow::Cow;

/// Cut a path at the first query (`?`) or fragment (`#`) delimiter.
///
/// # Examples
///
/// ```
/// use wizard_guard::path::strip_query;
///
/// assert_eq!(strip_query("/offres?structure=12"), "/offres");
/// assert_eq!(strip_query("/offres#infos"), "/offres");
/// assert_eq!(strip_query("/offres"), "/offres");
/// ```
#[must_use]
pub fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(pos) => &path[..pos],
        None => path,
    }
}

/// Normalize a path for consistent comparison.
///
/// Ensures paths have a leading slash and no trailing slash (unless root).
/// Returns `Cow<str>` to avoid allocation when the path is already normalized.
///
/// # Examples
///
/// ```
/// use wizard_guard::path::normalize_path;
///
/// assert_eq!(normalize_path("/offres"), "/offres");
/// assert_eq!(normalize_path("offres"), "/offres");
/// assert_eq!(normalize_path("/offres/"), "/offres");
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.is_empty() || path == "/" {
        return Cow::Borrowed("/");
    }

    // Already normalized: has leading, no trailing
    if path.starts_with('/') && !path.ends_with('/') {
        return Cow::Borrowed(path);
    }

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}
