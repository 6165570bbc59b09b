//! Guarded navigation host.
//!
//! [`GuardedNavigator`] wraps a [`NavigatorState`] history stack and runs
//! every navigation attempt through a set of [`NavigationGuard`]s before
//! applying it.
//!
//! # Pipeline
//!
//! ```text
//! push("/offres")
//!   │
//!   ├─ guards allow            → apply → Completed
//!   ├─ guards redirect to "/x" → re-enter pipeline with "/x" → Redirected
//!   └─ guards block            → hold as pending → Blocked
//!                                  │
//!                                  ├─ confirm() → apply held navigation
//!                                  └─ dismiss() → drop it, stay put
//! ```
//!
//! A blocked navigation is **held**, not lost: the host shows its
//! confirmation dialog and calls [`confirm`](GuardedNavigator::confirm) or
//! [`dismiss`](GuardedNavigator::dismiss). Confirming applies the held
//! navigation without consulting guards again. Starting any new navigation
//! attempt drops the held one first.
//!
//! # Example
//!
//! ```
//! use wizard_guard::{FlowConfig, GuardedNavigator, WizardLeaveGuard};
//!
//! let mut navigator = GuardedNavigator::new()
//!     .with_guard(WizardLeaveGuard::new(FlowConfig::individual()));
//!
//! navigator.push("/offre/AB12/individuel/creation/stocks");
//!
//! // Going back to the offer page from stocks is held for confirmation.
//! let outcome = navigator.push("/offre/AB12/individuel/creation");
//! assert!(outcome.is_blocked());
//!
//! // Confirming follows the guard's redirect proposal out of the wizard.
//! navigator.confirm();
//! assert_eq!(navigator.current_path(), "/offres");
//! ```

use crate::decision::GuardDecision;
use crate::error::{GuardError, NavigationOutcome};
use crate::guards::{Guards, NavigationGuard, NavigationRequest};
use crate::state::{NavigationKind, NavigatorState, RouteChange};
use crate::{debug_log, error_log, info_log, warn_log};

/// Maximum redirect chain length before a navigation fails.
///
/// Guards that keep redirecting each other would otherwise loop forever.
pub const MAX_REDIRECT_DEPTH: usize = 5;

// ============================================================================
// PendingNavigation
// ============================================================================

/// A navigation that was blocked and is waiting for the user's verdict.
///
/// Held by the navigator between a [`Blocked`](NavigationOutcome::Blocked)
/// outcome and the matching [`confirm`](GuardedNavigator::confirm) or
/// [`dismiss`](GuardedNavigator::dismiss) call.
#[derive(Debug, Clone)]
pub struct PendingNavigation {
    /// The navigation as it was attempted.
    pub requested: NavigationRequest,
    /// Redirect proposed by the blocking guard, applied on confirm when set.
    pub redirect: Option<String>,
    /// History operation the attempt was made with.
    pub kind: NavigationKind,
}

// ============================================================================
// GuardedNavigator
// ============================================================================

/// History navigation with guard interception.
///
/// Owns the history stack, the guard set, and at most one pending (blocked)
/// navigation. All operations are synchronous; see the crate docs for the
/// threading model.
pub struct GuardedNavigator {
    state: NavigatorState,
    guards: Guards,
    pending: Option<PendingNavigation>,
}

impl GuardedNavigator {
    /// Create a navigator at the root path with no guards.
    pub fn new() -> Self {
        Self {
            state: NavigatorState::new(),
            guards: Guards::default(),
            pending: None,
        }
    }

    /// Attach a guard, chainable at construction.
    #[must_use]
    pub fn with_guard<G: NavigationGuard>(mut self, guard: G) -> Self {
        self.guards.add(guard);
        self
    }

    /// Attach a guard after construction.
    pub fn add_guard<G: NavigationGuard>(&mut self, guard: G) {
        self.guards.add(guard);
    }

    /// Get the current path.
    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    /// The underlying history state.
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// The blocked navigation awaiting confirmation, if any.
    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    /// Check if a blocked navigation is awaiting confirmation.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Check if there is history behind the cursor.
    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Check if there is history ahead of the cursor.
    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    // ------------------------------------------------------------------
    // Navigation operations
    // ------------------------------------------------------------------

    /// Attempt to push a new path.
    pub fn push(&mut self, to: &str) -> NavigationOutcome {
        self.pending = None;
        self.attempt(to, NavigationKind::Push, 0)
    }

    /// Attempt to replace the current path.
    pub fn replace(&mut self, to: &str) -> NavigationOutcome {
        self.pending = None;
        self.attempt(to, NavigationKind::Replace, 0)
    }

    /// Attempt to move back in history.
    ///
    /// Returns `None` when already at the oldest entry. The target path is
    /// known before moving, so guards judge it like any other navigation.
    pub fn back(&mut self) -> Option<NavigationOutcome> {
        self.pending = None;
        let to = self.state.peek_back_path()?.to_string();
        Some(self.attempt(&to, NavigationKind::Back, 0))
    }

    /// Attempt to move forward in history.
    ///
    /// Returns `None` when already at the newest entry.
    pub fn forward(&mut self) -> Option<NavigationOutcome> {
        self.pending = None;
        let to = self.state.peek_forward_path()?.to_string();
        Some(self.attempt(&to, NavigationKind::Forward, 0))
    }

    // ------------------------------------------------------------------
    // Confirmation protocol
    // ------------------------------------------------------------------

    /// Apply the held navigation after the user confirmed leaving.
    ///
    /// Guards are **not** consulted again. When the blocking guard proposed
    /// a redirect, the redirect target is applied instead of the original
    /// destination. Returns `None` when nothing is pending.
    pub fn confirm(&mut self) -> Option<RouteChange> {
        let pending = self.pending.take()?;

        let change = match (pending.kind, pending.redirect) {
            (NavigationKind::Push, redirect) => {
                let target = redirect.unwrap_or(pending.requested.to);
                self.state.push(&target)
            }
            (NavigationKind::Replace, redirect) => {
                let target = redirect.unwrap_or(pending.requested.to);
                self.state.replace(&target)
            }
            // History cannot re-enter an arbitrary path, so a confirmed
            // back/forward with a redirect proposal applies as a push.
            (NavigationKind::Back | NavigationKind::Forward, Some(redirect)) => {
                self.state.push(&redirect)
            }
            (NavigationKind::Back, None) => self.state.back()?,
            (NavigationKind::Forward, None) => self.state.forward()?,
        };

        info_log!("Confirmed navigation to '{}' ({:?})", change.to, change.kind);
        Some(change)
    }

    /// Drop the held navigation after the user chose to stay.
    ///
    /// Returns the discarded attempt, or `None` when nothing was pending.
    pub fn dismiss(&mut self) -> Option<PendingNavigation> {
        let pending = self.pending.take();
        if let Some(pending) = &pending {
            debug_log!("Dismissed blocked navigation to '{}'", pending.requested.to);
        }
        pending
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    fn attempt(&mut self, to: &str, kind: NavigationKind, depth: usize) -> NavigationOutcome {
        if depth > MAX_REDIRECT_DEPTH {
            let error = GuardError::RedirectLoop {
                path: to.to_string(),
                depth,
            };
            error_log!("{}", error);
            return NavigationOutcome::Failed(error);
        }

        let request = NavigationRequest::new(to).with_from(self.state.current_path());

        match self.guards.check(&request) {
            GuardDecision::Allow => {
                let change = self.apply(to, kind);
                info_log!("Navigated to '{}' ({:?})", change.to, change.kind);
                NavigationOutcome::Completed { change }
            }
            GuardDecision::AllowRedirect { to: target } => {
                debug_log!("Navigation to '{}' redirected to '{}'", request.to, target);
                // Redirect legs run the full pipeline again so chained
                // guards still apply. History cannot re-enter an arbitrary
                // entry, so back/forward legs continue as a push.
                let kind = match kind {
                    NavigationKind::Back | NavigationKind::Forward => NavigationKind::Push,
                    kind => kind,
                };
                match self.attempt(&target, kind, depth + 1) {
                    NavigationOutcome::Completed { change }
                    | NavigationOutcome::Redirected { change, .. } => {
                        NavigationOutcome::Redirected {
                            requested: request.to,
                            change,
                        }
                    }
                    other => other,
                }
            }
            GuardDecision::Block { redirect } => {
                warn_log!(
                    "Navigation to '{}' blocked, awaiting confirmation",
                    request.to
                );
                self.pending = Some(PendingNavigation {
                    requested: request.clone(),
                    redirect: redirect.clone(),
                    kind,
                });
                NavigationOutcome::Blocked {
                    requested: request.to,
                    redirect,
                }
            }
        }
    }

    fn apply(&mut self, to: &str, kind: NavigationKind) -> RouteChange {
        match kind {
            NavigationKind::Push => self.state.push(to),
            NavigationKind::Replace => self.state.replace(to),
            // Back/forward attempts start from a successful peek and guards
            // cannot move the cursor, so the move is always possible here.
            NavigationKind::Back => self.state.back().expect("peeked back entry exists"),
            NavigationKind::Forward => self.state.forward().expect("peeked forward entry exists"),
        }
    }
}

impl Default for GuardedNavigator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::GuardDecision;
    use crate::flow::FlowConfig;
    use crate::guards::{guard_fn, WizardLeaveGuard};

    fn wizard_navigator() -> GuardedNavigator {
        GuardedNavigator::new().with_guard(WizardLeaveGuard::new(FlowConfig::individual()))
    }

    // --- Unguarded operation ---

    #[test]
    fn test_push_without_guards_completes() {
        let mut navigator = GuardedNavigator::new();
        let outcome = navigator.push("/offres");

        assert!(outcome.is_completed());
        assert_eq!(outcome.path(), Some("/offres"));
        assert_eq!(navigator.current_path(), "/offres");
    }

    #[test]
    fn test_replace_without_guards() {
        let mut navigator = GuardedNavigator::new();
        navigator.push("/offres");

        let outcome = navigator.replace("/accueil");
        assert!(outcome.is_completed());
        assert_eq!(navigator.current_path(), "/accueil");
        assert_eq!(navigator.state().len(), 2);
    }

    #[test]
    fn test_back_and_forward_without_guards() {
        let mut navigator = GuardedNavigator::new();
        navigator.push("/offres");

        let outcome = navigator.back().unwrap();
        assert_eq!(outcome.path(), Some("/"));

        let outcome = navigator.forward().unwrap();
        assert_eq!(outcome.path(), Some("/offres"));
    }

    #[test]
    fn test_back_without_history() {
        let mut navigator = GuardedNavigator::new();
        assert!(navigator.back().is_none());
        assert!(navigator.forward().is_none());
    }

    // --- Blocking and the confirmation protocol ---

    #[test]
    fn test_blocked_push_is_held() {
        let mut navigator = wizard_navigator();
        navigator.push("/offre/AB12/individuel/creation/stocks");

        let outcome = navigator.push("/offre/AB12/individuel/creation");
        assert!(outcome.is_blocked());
        assert_eq!(outcome.redirect_path(), Some("/offres"));

        // The navigation did not happen; it is held.
        assert_eq!(
            navigator.current_path(),
            "/offre/AB12/individuel/creation/stocks"
        );
        assert!(navigator.has_pending());
    }

    #[test]
    fn test_confirm_applies_redirect() {
        let mut navigator = wizard_navigator();
        navigator.push("/offre/AB12/individuel/creation/stocks");
        navigator.push("/offre/AB12/individuel/creation");

        let change = navigator.confirm().unwrap();
        assert_eq!(change.to, "/offres");
        assert_eq!(change.kind, NavigationKind::Push);
        assert_eq!(navigator.current_path(), "/offres");
        assert!(!navigator.has_pending());
    }

    #[test]
    fn test_confirm_without_redirect_applies_request() {
        let mut navigator = GuardedNavigator::new().with_guard(guard_fn(|request| {
            if request.to == "/danger" {
                GuardDecision::block()
            } else {
                GuardDecision::allow()
            }
        }));

        let outcome = navigator.push("/danger");
        assert!(outcome.is_blocked());
        assert_eq!(outcome.redirect_path(), None);

        let change = navigator.confirm().unwrap();
        assert_eq!(change.to, "/danger");
        assert_eq!(navigator.current_path(), "/danger");
    }

    #[test]
    fn test_confirm_without_pending() {
        let mut navigator = GuardedNavigator::new();
        assert!(navigator.confirm().is_none());
    }

    #[test]
    fn test_dismiss_discards_pending() {
        let mut navigator = wizard_navigator();
        navigator.push("/offre/AB12/individuel/creation/stocks");
        navigator.push("/offre/AB12/individuel/creation");

        let dismissed = navigator.dismiss().unwrap();
        assert_eq!(dismissed.requested.to, "/offre/AB12/individuel/creation");

        assert_eq!(
            navigator.current_path(),
            "/offre/AB12/individuel/creation/stocks"
        );
        assert!(navigator.confirm().is_none());
    }

    #[test]
    fn test_new_attempt_replaces_pending() {
        let mut navigator = GuardedNavigator::new().with_guard(guard_fn(|request| {
            if request.to.starts_with("/danger") {
                GuardDecision::block()
            } else {
                GuardDecision::allow()
            }
        }));

        navigator.push("/danger/one");
        navigator.push("/danger/two");

        let pending = navigator.pending().unwrap();
        assert_eq!(pending.requested.to, "/danger/two");
    }

    #[test]
    fn test_allowed_attempt_clears_pending() {
        let mut navigator = GuardedNavigator::new().with_guard(guard_fn(|request| {
            if request.to == "/danger" {
                GuardDecision::block()
            } else {
                GuardDecision::allow()
            }
        }));

        navigator.push("/danger");
        assert!(navigator.has_pending());

        navigator.push("/safe");
        assert!(!navigator.has_pending());
        assert_eq!(navigator.current_path(), "/safe");
    }

    #[test]
    fn test_confirmed_back_moves_cursor() {
        let mut navigator = GuardedNavigator::new().with_guard(guard_fn(|request| {
            if request.to == "/" {
                GuardDecision::block()
            } else {
                GuardDecision::allow()
            }
        }));

        navigator.push("/offres");

        let outcome = navigator.back().unwrap();
        assert!(outcome.is_blocked());
        assert_eq!(navigator.current_path(), "/offres");

        let change = navigator.confirm().unwrap();
        assert_eq!(change.kind, NavigationKind::Back);
        assert_eq!(navigator.current_path(), "/");
    }

    // --- Redirects ---

    #[test]
    fn test_redirect_lands_on_target() {
        let mut navigator = GuardedNavigator::new().with_guard(guard_fn(|request| {
            if request.to == "/old" {
                GuardDecision::allow_redirect("/new")
            } else {
                GuardDecision::allow()
            }
        }));

        let outcome = navigator.push("/old");
        assert!(outcome.is_redirected());
        assert_eq!(outcome.path(), Some("/new"));
        assert_eq!(navigator.current_path(), "/new");

        match outcome {
            NavigationOutcome::Redirected { requested, .. } => assert_eq!(requested, "/old"),
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_chain_reports_original_request() {
        let mut navigator = GuardedNavigator::new().with_guard(guard_fn(|request| {
            match request.to.as_str() {
                "/a" => GuardDecision::allow_redirect("/b"),
                "/b" => GuardDecision::allow_redirect("/c"),
                _ => GuardDecision::allow(),
            }
        }));

        let outcome = navigator.push("/a");
        assert!(outcome.is_redirected());
        assert_eq!(outcome.path(), Some("/c"));

        match outcome {
            NavigationOutcome::Redirected { requested, .. } => assert_eq!(requested, "/a"),
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_loop_fails() {
        let mut navigator =
            GuardedNavigator::new().with_guard(guard_fn(|_| GuardDecision::allow_redirect("/loop")));

        let outcome = navigator.push("/start");
        assert!(outcome.is_failed());
        assert_eq!(navigator.current_path(), "/");

        match outcome {
            NavigationOutcome::Failed(GuardError::RedirectLoop { depth, .. }) => {
                assert_eq!(depth, MAX_REDIRECT_DEPTH + 1);
            }
            other => panic!("expected redirect loop, got {other:?}"),
        }
    }

    #[test]
    fn test_redirected_back_applies_as_push() {
        let mut navigator = GuardedNavigator::new().with_guard(guard_fn(|request| {
            if request.to == "/" {
                GuardDecision::allow_redirect("/offres")
            } else {
                GuardDecision::allow()
            }
        }));

        navigator.push("/offre/AB12/individuel/creation");

        let outcome = navigator.back().unwrap();
        assert!(outcome.is_redirected());
        assert_eq!(navigator.current_path(), "/offres");

        match outcome {
            NavigationOutcome::Redirected { change, .. } => {
                assert_eq!(change.kind, NavigationKind::Push);
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    // --- Guard registration ---

    #[test]
    fn test_add_guard_after_construction() {
        let mut navigator = GuardedNavigator::new();
        navigator.push("/offre/AB12/individuel/creation/stocks");

        navigator.add_guard(WizardLeaveGuard::new(FlowConfig::individual()));
        let outcome = navigator.push("/offre/AB12/individuel/creation");
        assert!(outcome.is_blocked());
    }
}
