use lphi_core::{ErrorInfo, LphiError, ERROR_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::invariant::InvariantReport;

/// Outcome of a conservation check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    /// Product error strictly below the threshold.
    Pass,
    /// Product error at or above the threshold.
    Fail,
}

/// Relative errors between predicted and measured invariant components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConservationCheck {
    /// Relative error of `⟨Λ⟩`.
    pub error_lambda: f64,
    /// Relative error of `⟨Φ⟩`.
    pub error_phi: f64,
    /// Relative error of `⟨Λ⟩·⟨Φ⟩`.
    pub error_product: f64,
    /// Threshold the product error was compared against.
    pub threshold: f64,
    /// Pass/fail verdict on the product error.
    pub status: CheckStatus,
}

impl ConservationCheck {
    /// Returns true when the check passed.
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// `|measured - expected| / |expected|`, falling back to the absolute error
/// when the expected value is zero.
pub fn relative_error(expected: f64, measured: f64) -> f64 {
    let delta = (measured - expected).abs();
    if expected == 0.0 {
        delta
    } else {
        delta / expected.abs()
    }
}

/// Compares a measured report against the prediction.
pub fn compare_measurement(
    expected: &InvariantReport,
    measured: &InvariantReport,
    threshold: f64,
) -> Result<ConservationCheck, LphiError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(LphiError::InvalidArgument(
            ErrorInfo::new("invalid-threshold", "threshold must be positive and finite")
                .with_context("threshold", threshold),
        ));
    }
    let error_product = relative_error(expected.product, measured.product);
    let status = if error_product < threshold {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    Ok(ConservationCheck {
        error_lambda: relative_error(expected.lambda, measured.lambda),
        error_phi: relative_error(expected.phi, measured.phi),
        error_product,
        threshold,
        status,
    })
}

/// [`compare_measurement`] against [`ERROR_THRESHOLD`].
pub fn compare_with_default_threshold(
    expected: &InvariantReport,
    measured: &InvariantReport,
) -> Result<ConservationCheck, LphiError> {
    compare_measurement(expected, measured, ERROR_THRESHOLD)
}
