//! URL-to-step classification.
//!
//! A [`PatternTable`] is an ordered list of (step, pattern) entries. Classifying
//! a path scans every entry and keeps the step of the **last** entry whose
//! pattern matches; unmatched paths classify to `None`.
//!
//! # Why last match wins
//!
//! Patterns are unanchored and matched with [`Regex::is_match`], so a pattern
//! for an early wizard stage is often a prefix of a later stage's pattern: the
//! offer-form pattern matches stock URLs too, because stock URLs extend the
//! offer URL. Declaring entries in wizard order and keeping the last hit
//! resolves every such overlap in favor of the most advanced stage. This is
//! the documented, tested contract of [`PatternTable::classify`], not an
//! accident of iteration order.

use regex::Regex;

use crate::error::GuardError;
use crate::path::{normalize_path, strip_query};
use crate::step::WizardStep;
use crate::trace_log;

// ============================================================================
// StepPattern — one classifier entry
// ============================================================================

/// One classifier entry: a step and the pattern recognizing its URLs.
#[derive(Debug, Clone)]
pub struct StepPattern {
    /// Step this entry classifies to.
    step: WizardStep,
    /// Compiled URL pattern (unanchored).
    regex: Regex,
}

impl StepPattern {
    /// Compile a new entry.
    pub fn new(step: WizardStep, pattern: &str) -> Result<Self, GuardError> {
        let regex = Regex::new(pattern).map_err(|source| GuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { step, regex })
    }

    /// Step this entry classifies to.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Source text of the pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

// ============================================================================
// PatternTable — ordered classification table
// ============================================================================

/// Ordered table mapping URL shapes to wizard steps.
///
/// Built with [`PatternTable::builder`]; the built-in tables for the offer
/// wizards live on [`FlowConfig`](crate::flow::FlowConfig).
///
/// # Examples
///
/// ```
/// use wizard_guard::{PatternTable, WizardStep};
///
/// let table = PatternTable::builder()
///     .pattern(WizardStep::Offer, r"/offre/individuel/(creation|brouillon)")
///     .pattern(WizardStep::Stocks, r"/offre/individuel/creation/stocks")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     table.classify("/offre/individuel/creation/stocks"),
///     Some(WizardStep::Stocks)
/// );
/// assert_eq!(table.classify("/offres"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    entries: Vec<StepPattern>,
}

impl PatternTable {
    /// Start building a table.
    pub fn builder() -> PatternTableBuilder {
        PatternTableBuilder::new()
    }

    /// Entries in classification order.
    pub fn entries(&self) -> &[StepPattern] {
        &self.entries
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classify a path to a wizard step.
    ///
    /// Strips any query or fragment suffix and normalizes the path, then
    /// scans every entry in declared order and returns the step of the last
    /// entry whose pattern matches. Returns `None` when nothing matches.
    ///
    /// Pure and deterministic: the same path against the same table always
    /// classifies to the same step.
    pub fn classify(&self, path: &str) -> Option<WizardStep> {
        let path = normalize_path(strip_query(path));

        let mut step = None;
        for entry in &self.entries {
            // Keep scanning; later entries deliberately override earlier hits.
            if entry.matches(&path) {
                step = Some(entry.step);
            }
        }

        trace_log!("'{}' classifies to {:?}", path, step);
        step
    }
}

// ============================================================================
// PatternTableBuilder
// ============================================================================

/// Builder for assembling a [`PatternTable`] in classification order.
///
/// Entry order is significant: later entries win ties. Declare patterns in
/// wizard order so the most advanced stage wins overlapping matches.
#[derive(Debug, Default)]
pub struct PatternTableBuilder {
    patterns: Vec<(WizardStep, String)>,
}

impl PatternTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Order is significant: later entries win ties.
    pub fn pattern(mut self, step: WizardStep, pattern: impl Into<String>) -> Self {
        self.patterns.push((step, pattern.into()));
        self
    }

    /// Compile every pattern into a table.
    ///
    /// Stops at the first invalid pattern and reports it as
    /// [`GuardError::InvalidPattern`].
    pub fn build(self) -> Result<PatternTable, GuardError> {
        let mut entries = Vec::with_capacity(self.patterns.len());
        for (step, pattern) in self.patterns {
            entries.push(StepPattern::new(step, &pattern)?);
        }
        Ok(PatternTable { entries })
    }
}

// ============================================================================
// Tests
// ============================================================================
