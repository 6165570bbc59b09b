//! Wizard step and flow identification.
//!
//! An offer wizard walks a fixed sequence of stages. [`WizardStep`] names the
//! stage a URL belongs to and [`FlowKind`] selects which wizard variant is
//! being walked. Classification from URL to step lives in
//! [`PatternTable`](crate::patterns::PatternTable).

use std::fmt;

/// A stage of the offer creation wizard.
///
/// Several URL shapes classify to one step: creation, draft, and edition URLs
/// for the same stage all map to the same variant. The summary page and the
/// final confirmation page both classify as
/// [`Confirmation`](Self::Confirmation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Offer details form (creation, draft, or edition)
    Offer,
    /// Stock and price editing
    Stocks,
    /// Institution visibility settings (collective flow only)
    Visibility,
    /// Summary and confirmation pages
    Confirmation,
}

impl WizardStep {
    /// Stable lowercase name, used in logs and cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Offer => "offer",
            WizardStep::Stocks => "stocks",
            WizardStep::Visibility => "visibility",
            WizardStep::Confirmation => "confirmation",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which wizard variant a flow walks.
///
/// The individual and collective wizards share the same guard logic but use
/// different URL shapes and a different step set (collective adds
/// [`WizardStep::Visibility`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// Offer aimed at individual users
    Individual,
    /// Offer aimed at school groups
    Collective,
}

impl FlowKind {
    /// Check if this is the collective variant.
    pub fn is_collective(&self) -> bool {
        matches!(self, FlowKind::Collective)
    }

    /// Stable lowercase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Individual => "individual",
            FlowKind::Collective => "collective",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
