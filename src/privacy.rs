//! Network-prediction privacy control
//!
//! Enabling the prefetch-disable option has one cross-cutting side effect:
//! the browser's network-prediction feature is forced off through a separate
//! privacy API. The coupling is one-way. Toggling the option always drives
//! the privacy flag, the flag is never read back, and nothing else in the
//! system touches it.

use crate::error::Result;

/// Set/clear API over the browser's network-prediction flag
///
/// Exactly one feature flag is reachable through this contract.
#[allow(async_fn_in_trait)]
pub trait PrivacyControl {
    /// Force the network-prediction feature to the given value
    async fn set(&self, value: bool) -> Result<()>;

    /// Remove the override, reverting to the browser's own default
    async fn clear(&self) -> Result<()>;
}

/// Desired state of the network-prediction override
///
/// The two states of the side-effect rule, made explicit: the prefetch-
/// disable option maps to exactly one of them, and applying a state issues
/// exactly one privacy call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOverride {
    /// No override; the browser decides
    BrowserDefault,
    /// Prediction forced off while the whitelist feature wants it quiet
    ForcedOff,
}

impl PredictionOverride {
    /// The override implied by a new prefetch-disable value
    pub fn for_prefetch_disabled(disabled: bool) -> Self {
        if disabled {
            PredictionOverride::ForcedOff
        } else {
            PredictionOverride::BrowserDefault
        }
    }

    /// Apply this override through the privacy control
    pub async fn apply(self, control: &impl PrivacyControl) -> Result<()> {
        match self {
            PredictionOverride::BrowserDefault => control.clear().await,
            PredictionOverride::ForcedOff => control.set(false).await,
        }
    }
}
