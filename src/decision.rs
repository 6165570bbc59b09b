//! Transition rules for leaving wizard pages.
//!
//! This module defines:
//!
//! - [`Transition`] — the classified pair of locations on either side of a
//!   navigation.
//! - [`GuardDecision`] — the unified answer a guard gives: let the navigation
//!   through, substitute its target, or block pending confirmation.
//! - [`decide`] — the rule table mapping a transition to a decision.
//!
//! [`decide`] is a pure function of its arguments. Callers classify the two
//! locations with a [`PatternTable`](crate::patterns::PatternTable), then ask
//! for the verdict; nothing here reads ambient state.

use crate::step::{FlowKind, WizardStep};

// ============================================================================
// Transition — classified navigation endpoints
// ============================================================================

/// The wizard steps on either side of a navigation.
///
/// Derived by classifying the current and the next location against a
/// [`PatternTable`](crate::patterns::PatternTable). `None` on either side
/// means that location is outside the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Step of the location being left.
    pub from: Option<WizardStep>,
    /// Step of the destination.
    pub to: Option<WizardStep>,
}

impl Transition {
    /// Create a transition from two classified locations.
    pub fn new(from: Option<WizardStep>, to: Option<WizardStep>) -> Self {
        Self { from, to }
    }
}

// ============================================================================
// GuardDecision — unified result of a guard check
// ============================================================================

/// Result of a guard check.
///
/// Used by guards to let a navigation through, substitute its target, or
/// suppress it until the user confirms.
///
/// # Example
///
/// ```
/// use wizard_guard::GuardDecision;
///
/// let decision = GuardDecision::block_with_redirect("/offres");
/// assert!(decision.should_block());
/// assert_eq!(decision.redirect_path(), Some("/offres"));
///
/// let decision = GuardDecision::allow_redirect("/offres");
/// assert!(decision.is_redirect());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Let the navigation through untouched.
    Allow,

    /// Let the navigation through, but substitute the destination.
    AllowRedirect {
        /// Path to land on instead of the requested one.
        to: String,
    },

    /// Suppress the navigation and ask the user to confirm leaving.
    Block {
        /// Path to apply on confirmation; `None` keeps the original target.
        redirect: Option<String>,
    },
}

impl GuardDecision {
    /// Create a decision that lets navigation through untouched (alias for
    /// [`Allow`](Self::Allow)).
    pub fn allow() -> Self {
        Self::Allow
    }

    /// Create a decision that lets navigation through to a different path.
    pub fn allow_redirect(to: impl Into<String>) -> Self {
        Self::AllowRedirect { to: to.into() }
    }

    /// Create a decision that blocks navigation pending confirmation.
    pub fn block() -> Self {
        Self::Block { redirect: None }
    }

    /// Create a blocking decision whose confirmation lands on `to` instead of
    /// the original target.
    pub fn block_with_redirect(to: impl Into<String>) -> Self {
        Self::Block {
            redirect: Some(to.into()),
        }
    }

    /// Check if this decision suppresses the navigation.
    pub fn should_block(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// Check if this decision lets navigation through untouched.
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Check if this decision substitutes the destination.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::AllowRedirect { .. })
    }

    /// Get the proposed path, for both redirecting and blocking decisions.
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::AllowRedirect { to } => Some(to.as_str()),
            Self::Block {
                redirect: Some(to), ..
            } => Some(to.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// decide — the rule table
// ============================================================================

/// Decide what should happen to a navigation between two classified locations.
///
/// The rules, scanned top to bottom (first hit wins):
///
/// | From         | To           | Flow       | Decision                            |
/// |--------------|--------------|------------|-------------------------------------|
/// | Stocks       | Offer        | any        | block, confirm exits to `exit_path` |
/// | Confirmation | Stocks       | any        | allow, redirected to `exit_path`    |
/// | Confirmation | Visibility   | collective | allow, redirected to `exit_path`    |
/// | Confirmation | any          | any        | allow                               |
/// | any          | Stocks       | any        | allow                               |
/// | any          | Visibility   | collective | allow                               |
/// | any          | Confirmation | any        | allow                               |
/// | Offer        | Offer        | any        | allow (sub-type switch)             |
/// | otherwise    |              |            | block, no redirect                  |
///
/// Locations outside the wizard arrive as `None` and land in the final row,
/// so leaving the wizard always asks for confirmation.
///
/// # Examples
///
/// ```
/// use wizard_guard::{decide, FlowKind, Transition, WizardStep};
///
/// let backward = Transition::new(Some(WizardStep::Stocks), Some(WizardStep::Offer));
/// let decision = decide(&backward, FlowKind::Individual, "/offres");
/// assert!(decision.should_block());
/// assert_eq!(decision.redirect_path(), Some("/offres"));
/// ```
pub fn decide(transition: &Transition, kind: FlowKind, exit_path: &str) -> GuardDecision {
    use WizardStep::{Confirmation, Offer, Stocks, Visibility};

    let collective = kind.is_collective();

    match (transition.from, transition.to) {
        // Stepping back from stocks into the offer form loses stock edits.
        (Some(Stocks), Some(Offer)) => GuardDecision::block_with_redirect(exit_path),

        // The wizard is finished once the confirmation page is reached.
        // Stepping back into an earlier stage exits to the offers list instead.
        (Some(Confirmation), Some(Stocks)) => GuardDecision::allow_redirect(exit_path),
        (Some(Confirmation), Some(Visibility)) if collective => {
            GuardDecision::allow_redirect(exit_path)
        }
        (Some(Confirmation), _) => GuardDecision::allow(),

        // Forward motion through the wizard is always free.
        (_, Some(Stocks)) => GuardDecision::allow(),
        (_, Some(Visibility)) if collective => GuardDecision::allow(),
        (_, Some(Confirmation)) => GuardDecision::allow(),

        // Switching offer sub-type re-enters the details form.
        (Some(Offer), Some(Offer)) => GuardDecision::allow(),

        // Anything else leaves the wizard with unsaved work.
        _ => GuardDecision::block(),
    }
}

// ============================================================================
// Tests
// ============================================================================
