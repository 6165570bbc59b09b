//! # wizard-guard
//!
//! Navigation guard for multi-step wizard flows: path classification,
//! transition rules, redirects, and a confirm/dismiss protocol.
//!
//! Form-heavy apps guide users through wizards — offer creation, checkout,
//! onboarding — where stepping "back" out of order can silently discard
//! work. This crate decides, for every navigation attempt, whether to let
//! it through, send it somewhere safer, or hold it until the user confirms.
//!
//! # Quick start
//!
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use wizard_guard::{FlowConfig, GuardedNavigator, WizardLeaveGuard};
//!
//! // The guard is armed by the host form's dirty flag.
//! let dirty = Arc::new(AtomicBool::new(true));
//! let flag = Arc::clone(&dirty);
//!
//! let mut navigator = GuardedNavigator::new().with_guard(
//!     WizardLeaveGuard::new(FlowConfig::individual())
//!         .activated_when(move || flag.load(Ordering::Relaxed)),
//! );
//!
//! navigator.push("/offre/AB12/individuel/creation/stocks");
//!
//! // Stepping back to the offer page risks losing stock edits.
//! let outcome = navigator.push("/offre/AB12/individuel/creation");
//! assert!(outcome.is_blocked());
//!
//! // The user confirms leaving; the guard's redirect takes them out.
//! navigator.confirm();
//! assert_eq!(navigator.current_path(), "/offres");
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`step`] | Wizard step and flow kind enums |
//! | [`patterns`] | Regex pattern table and path classification |
//! | [`decision`] | Transition decision rules |
//! | [`flow`] | Flow configuration with built-in pattern tables |
//! | [`guards`] | Guard trait, the wizard leave guard, composition |
//! | [`state`] | History stack |
//! | [`navigator`] | Guarded navigation host with confirm/dismiss |
//! | [`cache`] | LRU classification cache (feature `cache`) |
//! | [`error`] | Navigation outcomes and errors |
//! | [`path`] | Path normalization helpers |
//! | [`logging`] | `log`/`tracing` dispatch macros |
//!
//! # Threading model
//!
//! Guard checks are **synchronous** — navigation interception runs inside a
//! single UI event handler and there is nothing to await. Guards themselves
//! are `Send + Sync` so a host may build them off the UI thread.
//!
//! # Feature flags
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `log` | yes | Route diagnostics through the `log` crate |
//! | `tracing` | no | Route diagnostics through `tracing` (enable at most one backend) |
//! | `cache` | yes | Memoize path classification in an LRU cache |

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "cache")]
pub mod cache;
pub mod decision;
pub mod error;
pub mod flow;
pub mod guards;
pub mod logging;
pub mod navigator;
pub mod path;
pub mod patterns;
pub mod state;
pub mod step;

#[cfg(feature = "cache")]
pub use cache::{CacheStats, StepCache};
pub use decision::{decide, GuardDecision, Transition};
pub use error::{GuardError, NavigationOutcome};
pub use flow::{FlowConfig, FlowConfigBuilder, DEFAULT_EXIT_PATH};
pub use guards::{
    guard_fn, ActivationFn, FnGuard, GuardBuilder, Guards, NavigationGuard, NavigationRequest,
    WizardLeaveGuard,
};
pub use navigator::{GuardedNavigator, PendingNavigation, MAX_REDIRECT_DEPTH};
pub use path::{normalize_path, strip_query};
pub use patterns::{PatternTable, PatternTableBuilder, StepPattern};
pub use state::{NavigationKind, NavigatorState, RouteChange};
pub use step::{FlowKind, WizardStep};
