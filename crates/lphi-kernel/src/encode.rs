//! Preparation of single-qubit states with a prescribed `⟨Λ⟩`.

use lphi_core::{Complex, ErrorInfo, LphiError};

/// Returns `Ry(θ)|0⟩ = (cos(θ/2), sin(θ/2))`.
pub fn ry_state(theta: f64) -> [Complex; 2] {
    let half = theta / 2.0;
    [Complex::new(half.cos(), 0.0), Complex::new(half.sin(), 0.0)]
}

/// Encodes `lambda` as the rotation `θ = 2·asin(√λ)` applied to `|0⟩`, so the
/// resulting state has `⟨Λ⟩ = λ` up to rounding.
pub fn encode_lambda_state(lambda: f64) -> Result<[Complex; 2], LphiError> {
    if !(0.0..=1.0).contains(&lambda) {
        return Err(LphiError::InvalidArgument(
            ErrorInfo::new("invalid-lambda", "lambda must lie in [0, 1]")
                .with_context("lambda", lambda),
        ));
    }
    let theta = 2.0 * lambda.sqrt().asin();
    Ok(ry_state(theta))
}
