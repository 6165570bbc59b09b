//! Flow configuration: which wizard is being walked and how its URLs look.
//!
//! A [`FlowConfig`] bundles the three flow-specific ingredients the guard
//! needs: the [`FlowKind`], the [`PatternTable`] classifying the flow's URLs,
//! and the exit path used when a decision redirects out of the wizard. The
//! two shipped wizards are available as [`FlowConfig::individual`] and
//! [`FlowConfig::collective`]; custom flows use [`FlowConfig::builder`].
//!
//! # Examples
//!
//! ```
//! use wizard_guard::{FlowConfig, WizardStep};
//!
//! let flow = FlowConfig::individual();
//! assert_eq!(
//!     flow.classify("/offre/AB12/individuel/creation/stocks"),
//!     Some(WizardStep::Stocks)
//! );
//!
//! let transition = flow.transition(
//!     Some("/offre/AB12/individuel/creation/stocks"),
//!     "/offre/AB12/individuel/creation",
//! );
//! assert!(flow.decide(&transition).should_block());
//! ```

use crate::decision::{decide, GuardDecision, Transition};
use crate::error::GuardError;
use crate::patterns::{PatternTable, PatternTableBuilder};
use crate::step::{FlowKind, WizardStep};

/// Where a redirecting decision lands by default: the offers list.
pub const DEFAULT_EXIT_PATH: &str = "/offres";

// ============================================================================
// FlowConfig
// ============================================================================

/// Everything flow-specific the guard needs to judge a navigation.
///
/// Current and next locations are always passed in explicitly; a config holds
/// no ambient state and can be shared freely between guards.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    kind: FlowKind,
    patterns: PatternTable,
    exit_path: String,
}

impl FlowConfig {
    /// The individual-offer wizard: details form, stocks, then summary and
    /// confirmation. URLs carry an optional offer identifier and a
    /// `creation` or `brouillon` (draft) segment.
    pub fn individual() -> Self {
        let patterns = PatternTable::builder()
            .pattern(
                WizardStep::Offer,
                r"/offre/([A-Z0-9]+/)?individuel/(creation|brouillon)",
            )
            .pattern(
                WizardStep::Stocks,
                r"/offre/([A-Z0-9]+/)?individuel/(creation|brouillon)/stocks",
            )
            .pattern(
                WizardStep::Confirmation,
                r"/offre/([A-Z0-9]+/)?individuel/(creation|brouillon)/recapitulatif",
            )
            .pattern(
                WizardStep::Confirmation,
                r"/offre/([A-Z0-9]+/)?individuel/(creation|brouillon)/confirmation",
            )
            .build()
            .expect("built-in individual patterns compile");

        Self {
            kind: FlowKind::Individual,
            patterns,
            exit_path: DEFAULT_EXIT_PATH.to_string(),
        }
    }

    /// The collective-offer wizard: details form, stocks, institution
    /// visibility, then summary and confirmation. URLs carry either a
    /// `creation` segment or a temporary `T-` identifier; the showcase
    /// creation URL classifies to the details form.
    pub fn collective() -> Self {
        let patterns = PatternTable::builder()
            .pattern(
                WizardStep::Offer,
                r"/offre/((creation|T-[A-Z0-9]+)/)?collectif",
            )
            .pattern(
                WizardStep::Stocks,
                r"/offre/((creation|T-[A-Z0-9]+)/)?collectif/stocks",
            )
            .pattern(
                WizardStep::Visibility,
                r"/offre/((creation|T-[A-Z0-9]+)/)?collectif/visibilite",
            )
            .pattern(
                WizardStep::Confirmation,
                r"/offre/((creation|T-[A-Z0-9]+)/)?collectif/recapitulatif",
            )
            .pattern(
                WizardStep::Confirmation,
                r"/offre/((creation|T-[A-Z0-9]+)/)?collectif/confirmation",
            )
            .build()
            .expect("built-in collective patterns compile");

        Self {
            kind: FlowKind::Collective,
            patterns,
            exit_path: DEFAULT_EXIT_PATH.to_string(),
        }
    }

    /// Start building a custom flow of the given kind.
    pub fn builder(kind: FlowKind) -> FlowConfigBuilder {
        FlowConfigBuilder::new(kind)
    }

    /// Which wizard variant this flow walks.
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// Path a redirecting decision lands on.
    pub fn exit_path(&self) -> &str {
        &self.exit_path
    }

    /// The classification table for this flow's URLs.
    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// Classify a path against this flow's table.
    pub fn classify(&self, path: &str) -> Option<WizardStep> {
        self.patterns.classify(path)
    }

    /// Classify both sides of a navigation.
    ///
    /// `from` is `None` when there is no current location (initial entry).
    pub fn transition(&self, from: Option<&str>, to: &str) -> Transition {
        Transition::new(from.and_then(|path| self.classify(path)), self.classify(to))
    }

    /// Judge a classified transition with this flow's rules.
    pub fn decide(&self, transition: &Transition) -> GuardDecision {
        decide(transition, self.kind, &self.exit_path)
    }
}

// ============================================================================
// FlowConfigBuilder
// ============================================================================

/// Builder for custom wizard flows.
///
/// # Examples
///
/// ```
/// use wizard_guard::{FlowConfig, FlowKind, WizardStep};
///
/// let flow = FlowConfig::builder(FlowKind::Individual)
///     .exit_path("/catalog")
///     .pattern(WizardStep::Offer, r"/wizard/details")
///     .pattern(WizardStep::Stocks, r"/wizard/details/inventory")
///     .pattern(WizardStep::Confirmation, r"/wizard/done")
///     .build()
///     .unwrap();
///
/// assert_eq!(flow.classify("/wizard/details/inventory"), Some(WizardStep::Stocks));
/// assert_eq!(flow.exit_path(), "/catalog");
/// ```
#[derive(Debug)]
pub struct FlowConfigBuilder {
    kind: FlowKind,
    exit_path: String,
    patterns: PatternTableBuilder,
}

impl FlowConfigBuilder {
    fn new(kind: FlowKind) -> Self {
        Self {
            kind,
            exit_path: DEFAULT_EXIT_PATH.to_string(),
            patterns: PatternTableBuilder::new(),
        }
    }

    /// Set where redirecting decisions land. Defaults to
    /// [`DEFAULT_EXIT_PATH`].
    pub fn exit_path(mut self, path: impl Into<String>) -> Self {
        self.exit_path = path.into();
        self
    }

    /// Append a classification entry. Order is significant: later entries
    /// win ties (see [`PatternTable::classify`]).
    pub fn pattern(mut self, step: WizardStep, pattern: impl Into<String>) -> Self {
        self.patterns = self.patterns.pattern(step, pattern);
        self
    }

    /// Compile the patterns and assemble the flow.
    pub fn build(self) -> Result<FlowConfig, GuardError> {
        Ok(FlowConfig {
            kind: self.kind,
            patterns: self.patterns.build()?,
            exit_path: self.exit_path,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
