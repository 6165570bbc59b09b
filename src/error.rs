//! Error handling for the guard pipeline.
//!
//! This module defines the types returned when a guarded navigation cannot
//! complete as requested:
//!
//! - [`NavigationOutcome`] — the top-level outcome of any guarded navigation
//!   (`Completed`, `Redirected`, `Blocked`, `Failed`).
//! - [`GuardError`] — a detailed error variant (invalid pattern table,
//!   redirect loop).
//!
//! # Examples
//!
//! ```
//! use wizard_guard::error::NavigationOutcome;
//!
//! let blocked = NavigationOutcome::Blocked {
//!     requested: "/offre/AB12/individuel/creation".into(),
//!     redirect: Some("/offres".into()),
//! };
//! assert!(blocked.is_blocked());
//! assert_eq!(blocked.redirect_path(), Some("/offres"));
//! ```

use std::fmt;

use crate::state::RouteChange;

// ============================================================================
// Navigation Outcome Types
// ============================================================================

/// Outcome of a navigation attempt through the guard pipeline.
///
/// Every call to [`GuardedNavigator::push`](crate::navigator::GuardedNavigator::push)
/// (and friends) returns this enum.
#[derive(Debug, Clone)]
pub enum NavigationOutcome {
    /// Navigation was applied as requested
    Completed { change: RouteChange },
    /// A guard redirected the navigation and the redirect target was applied
    Redirected { requested: String, change: RouteChange },
    /// A guard blocked the navigation; the attempt is held for confirmation
    Blocked {
        requested: String,
        redirect: Option<String>,
    },
    /// Navigation failed
    Failed(GuardError),
}

/// Detailed error variants that can occur during guarded navigation.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display) for
/// idiomatic error handling.
#[derive(Debug, Clone)]
pub enum GuardError {
    /// A step pattern failed to compile
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// Guards kept redirecting past the depth limit
    RedirectLoop { path: String, depth: usize },
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid step pattern '{}': {}", pattern, source)
            }
            GuardError::RedirectLoop { path, depth } => {
                write!(f, "Redirect loop detected at '{}' (depth {})", path, depth)
            }
        }
    }
}

impl std::error::Error for GuardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuardError::InvalidPattern { source, .. } => Some(source),
            GuardError::RedirectLoop { .. } => None,
        }
    }
}

impl NavigationOutcome {
    /// Check if navigation was applied as requested
    pub fn is_completed(&self) -> bool {
        matches!(self, NavigationOutcome::Completed { .. })
    }

    /// Check if navigation landed on a redirect target
    pub fn is_redirected(&self) -> bool {
        matches!(self, NavigationOutcome::Redirected { .. })
    }

    /// Check if navigation was blocked
    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationOutcome::Blocked { .. })
    }

    /// Check if there was an error
    pub fn is_failed(&self) -> bool {
        matches!(self, NavigationOutcome::Failed(_))
    }

    /// Get the path the navigation actually landed on, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Completed { change }
            | NavigationOutcome::Redirected { change, .. } => Some(&change.to),
            _ => None,
        }
    }

    /// Get the redirect proposal if blocked with one
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Blocked {
                redirect: Some(path),
                ..
            } => Some(path),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
