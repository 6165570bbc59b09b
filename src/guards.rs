//! Navigation guards and their composition.
//!
//! Guards are checked **before** a navigation is applied. They decide whether
//! it goes through untouched, lands somewhere else, or is held until the user
//! confirms.
//!
//! All guard methods are **synchronous** — navigation interception runs
//! inside a single UI event handler and there is nothing to await.
//!
//! # Built-in guards
//!
//! | Guard | Purpose |
//! |-------|---------|
//! | [`WizardLeaveGuard`] | Protects a wizard flow from accidental exits |
//!
//! # Composition
//!
//! | Combinator | Logic |
//! |------------|-------|
//! | [`Guards`] | AND — all guards must allow |
//!
//! # Execution order
//!
//! Guards run in **priority order** (higher value first).
//! [`WizardLeaveGuard`] uses priority 100. The first
//! non-[`Allow`](crate::GuardDecision::Allow) decision short-circuits
//! evaluation.
//!
//! # Example
//!
//! ```
//! use wizard_guard::{FlowConfig, NavigationGuard, NavigationRequest, WizardLeaveGuard};
//!
//! let guard = WizardLeaveGuard::new(FlowConfig::individual());
//!
//! let request = NavigationRequest::new("/offre/AB12/individuel/creation")
//!     .with_from("/offre/AB12/individuel/creation/stocks");
//! assert!(guard.check(&request).should_block());
//! ```

use crate::decision::{GuardDecision, Transition};
use crate::flow::FlowConfig;
use crate::step::WizardStep;
use crate::{debug_log, trace_log};

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, StepCache};
#[cfg(feature = "cache")]
use std::sync::Mutex;

// ============================================================================
// NavigationRequest
// ============================================================================

/// A navigation attempt, as seen by guards.
///
/// Both locations are explicit: `from` is the location being left (if any)
/// and `to` the requested destination. Guards never read ambient state.
///
/// # Example
///
/// ```
/// use wizard_guard::NavigationRequest;
///
/// let request = NavigationRequest::new("/offres").with_from("/offre/individuel/creation");
/// assert_eq!(request.from.as_deref(), Some("/offre/individuel/creation"));
/// assert_eq!(request.to, "/offres");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Location being left, `None` on initial entry.
    pub from: Option<String>,
    /// Requested destination.
    pub to: String,
}

impl NavigationRequest {
    /// Create a request for navigating to `to`, with no current location.
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            from: None,
            to: to.into(),
        }
    }

    /// Attach the location being left.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

// ============================================================================
// NavigationGuard trait
// ============================================================================

/// Trait for guards that judge navigation attempts.
///
/// Guards are checked synchronously before navigation is applied.
///
/// # Example
///
/// ```
/// use wizard_guard::{GuardDecision, NavigationGuard, NavigationRequest};
///
/// struct DraftGuard {
///     has_unsaved_changes: bool,
/// }
///
/// impl NavigationGuard for DraftGuard {
///     fn check(&self, _request: &NavigationRequest) -> GuardDecision {
///         if self.has_unsaved_changes {
///             GuardDecision::block()
///         } else {
///             GuardDecision::allow()
///         }
///     }
/// }
/// ```
///
/// # For simple guards
///
/// Use [`guard_fn`] to create a guard from a closure:
///
/// ```
/// use wizard_guard::{guard_fn, GuardDecision};
///
/// let guard = guard_fn(|_request| GuardDecision::allow());
/// ```
pub trait NavigationGuard: Send + Sync + 'static {
    /// Judge a navigation attempt.
    ///
    /// Returns:
    /// - [`GuardDecision::Allow`] to let the navigation through
    /// - [`GuardDecision::AllowRedirect`] to substitute the destination
    /// - [`GuardDecision::Block`] to hold the navigation for confirmation
    fn check(&self, request: &NavigationRequest) -> GuardDecision;

    /// Guard name for debugging and log messages.
    fn name(&self) -> &'static str {
        "NavigationGuard"
    }

    /// Priority for execution order. Higher runs first. Default is 0.
    fn priority(&self) -> i32 {
        0
    }
}

// ============================================================================
// guard_fn helper
// ============================================================================

/// Create a guard from a function or closure.
///
/// # Example
///
/// ```
/// use wizard_guard::{guard_fn, GuardDecision};
///
/// let maintenance_guard = guard_fn(|request| {
///     if request.to.starts_with("/admin") {
///         GuardDecision::block()
///     } else {
///         GuardDecision::allow()
///     }
/// });
/// ```
pub const fn guard_fn<F>(f: F) -> FnGuard<F>
where
    F: Fn(&NavigationRequest) -> GuardDecision + Send + Sync + 'static,
{
    FnGuard { f }
}

/// Guard created from a function or closure.
pub struct FnGuard<F> {
    f: F,
}

impl<F> NavigationGuard for FnGuard<F>
where
    F: Fn(&NavigationRequest) -> GuardDecision + Send + Sync + 'static,
{
    fn check(&self, request: &NavigationRequest) -> GuardDecision {
        (self.f)(request)
    }
}

// ============================================================================
// WizardLeaveGuard
// ============================================================================

/// Function type for the guard's activation check.
///
/// Returns `true` when the guard should judge navigations, typically wired
/// to the host form's dirty flag.
pub type ActivationFn = Box<dyn Fn() -> bool + Send + Sync>;

/// Guard protecting a multi-step wizard from accidental exits.
///
/// Classifies both sides of a navigation against the flow's pattern table
/// and judges the transition with the flow's rules. While inactive (see
/// [`activated_when`](Self::activated_when)) it allows everything, which is
/// how host forms express "nothing to lose here yet".
///
/// With the `cache` feature enabled, classification results are memoized in
/// a [`StepCache`].
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use wizard_guard::{FlowConfig, NavigationGuard, NavigationRequest, WizardLeaveGuard};
///
/// let dirty = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&dirty);
/// let guard = WizardLeaveGuard::new(FlowConfig::individual())
///     .activated_when(move || flag.load(Ordering::Relaxed));
///
/// let request = NavigationRequest::new("/offres").with_from("/offre/individuel/creation");
///
/// // Clean form: everything passes.
/// assert!(guard.check(&request).is_allow());
///
/// // Dirty form: leaving the wizard is held for confirmation.
/// dirty.store(true, Ordering::Relaxed);
/// assert!(guard.check(&request).should_block());
/// ```
pub struct WizardLeaveGuard {
    flow: FlowConfig,
    when: ActivationFn,
    #[cfg(feature = "cache")]
    cache: Mutex<StepCache>,
}

impl WizardLeaveGuard {
    /// Create a guard for the given flow, active on every navigation.
    pub fn new(flow: FlowConfig) -> Self {
        Self {
            flow,
            when: Box::new(|| true),
            #[cfg(feature = "cache")]
            cache: Mutex::new(StepCache::new()),
        }
    }

    /// Gate the guard on a host-side condition, typically the form's dirty
    /// flag. While the condition is `false` every navigation is allowed.
    #[must_use]
    pub fn activated_when<F>(mut self, when: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.when = Box::new(when);
        self
    }

    /// The flow this guard protects.
    pub fn flow(&self) -> &FlowConfig {
        &self.flow
    }

    /// Snapshot of the classification cache statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache
            .lock()
            .map(|cache| cache.stats().clone())
            .unwrap_or_default()
    }

    /// Drop all memoized classification results.
    #[cfg(feature = "cache")]
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    fn classify(&self, path: &str) -> Option<WizardStep> {
        #[cfg(feature = "cache")]
        {
            // A poisoned lock falls back to direct classification.
            if let Ok(mut cache) = self.cache.lock() {
                return cache.classify(self.flow.patterns(), path);
            }
        }
        self.flow.classify(path)
    }
}

impl NavigationGuard for WizardLeaveGuard {
    fn check(&self, request: &NavigationRequest) -> GuardDecision {
        if !(self.when)() {
            trace_log!("WizardLeaveGuard inactive, allowing '{}'", request.to);
            return GuardDecision::allow();
        }

        let from = request.from.as_deref().and_then(|path| self.classify(path));
        let to = self.classify(&request.to);
        let transition = Transition::new(from, to);

        let decision = self.flow.decide(&transition);
        debug_log!(
            "WizardLeaveGuard: {:?} -> {:?} gives {:?} for '{}'",
            transition.from,
            transition.to,
            decision,
            request.to
        );
        decision
    }

    fn name(&self) -> &'static str {
        "WizardLeaveGuard"
    }

    fn priority(&self) -> i32 {
        100
    }
}

// ============================================================================
// Guard Composition
// ============================================================================

/// Combines multiple guards with AND logic.
///
/// All guards must return [`GuardDecision::Allow`] for navigation to
/// proceed. The first non-allow decision is returned immediately
/// (short-circuit).
///
/// Guards are executed in priority order (higher priority first).
///
/// # Example
///
/// ```
/// use wizard_guard::{guard_fn, FlowConfig, Guards, GuardDecision, WizardLeaveGuard};
///
/// let guards = Guards::builder()
///     .guard(WizardLeaveGuard::new(FlowConfig::individual()))
///     .guard(guard_fn(|_request| GuardDecision::allow()))
///     .build();
/// ```
pub struct Guards {
    guards: Vec<Box<dyn NavigationGuard>>,
}

impl Guards {
    /// Create a new AND composition from a vec of boxed guards.
    #[must_use]
    pub fn new(guards: Vec<Box<dyn NavigationGuard>>) -> Self {
        Self { guards }
    }

    /// Start building a guard composition.
    pub fn builder() -> GuardBuilder {
        GuardBuilder::new()
    }

    /// Add a guard to the composition.
    pub fn add<G: NavigationGuard>(&mut self, guard: G) {
        self.guards.push(Box::new(guard));
    }

    /// Number of guards in the composition.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Check if the composition holds no guards.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl Default for Guards {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl NavigationGuard for Guards {
    fn check(&self, request: &NavigationRequest) -> GuardDecision {
        let mut sorted: Vec<_> = self.guards.iter().collect();
        sorted.sort_by_key(|g| std::cmp::Reverse(g.priority()));

        for guard in sorted {
            let decision = guard.check(request);
            trace_log!(
                "Guard '{}' gave {:?} for '{}'",
                guard.name(),
                decision,
                request.to
            );
            if !decision.is_allow() {
                return decision;
            }
        }
        GuardDecision::allow()
    }

    fn name(&self) -> &'static str {
        "Guards"
    }

    fn priority(&self) -> i32 {
        self.guards.iter().map(|g| g.priority()).max().unwrap_or(0)
    }
}

/// Builder for [`Guards`] with fluent API.
#[must_use]
pub struct GuardBuilder {
    guards: Vec<Box<dyn NavigationGuard>>,
}

impl GuardBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Add a guard to the composition.
    pub fn guard<G: NavigationGuard>(mut self, guard: G) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// Build the final [`Guards`].
    #[must_use]
    pub fn build(self) -> Guards {
        Guards::new(self.guards)
    }
}

impl Default for GuardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
