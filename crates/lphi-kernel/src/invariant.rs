//! The Lambda-Phi invariant `⟨Λ⟩·⟨Φ⟩` of a single-qubit state.

use lphi_core::{ComplexView, LphiError, Tolerances};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::expectation::{expectation_with, validate_inputs};
use crate::operators::{create_lambda, create_phi, DEFAULT_QUBITS};

/// Expectation values contributing to the invariant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InvariantReport {
    /// `⟨Λ⟩`, the population of `|1⟩`.
    pub lambda: f64,
    /// `⟨Φ⟩`, the Pauli-Z expectation.
    pub phi: f64,
    /// `⟨Λ⟩·⟨Φ⟩`.
    pub product: f64,
}

impl InvariantReport {
    /// Builds a report from the two expectation values.
    pub fn new(lambda: f64, phi: f64) -> Self {
        Self {
            lambda,
            phi,
            product: lambda * phi,
        }
    }
}

/// Computes both expectation values with an explicit tolerance configuration.
///
/// The operators are always single-qubit; a state of any other length fails
/// inside the expectation with a dimension mismatch. Both operators are
/// dropped on every exit path.
pub fn analyze_state_with(
    psi: &ComplexView<'_>,
    tol: &Tolerances,
) -> Result<InvariantReport, LphiError> {
    let lambda_op = create_lambda(DEFAULT_QUBITS)?;
    let phi_op = create_phi(DEFAULT_QUBITS)?;
    let lambda = expectation_with(&lambda_op.view(), psi, tol)?;
    let phi = expectation_with(&phi_op.view(), psi, tol)?;
    let report = InvariantReport::new(lambda, phi);
    debug!(
        lambda = report.lambda,
        phi = report.phi,
        product = report.product,
        "lambda-phi invariant"
    );
    Ok(report)
}

/// Computes both expectation values under the default tolerances.
pub fn analyze_state(psi: &ComplexView<'_>) -> Result<InvariantReport, LphiError> {
    analyze_state_with(psi, &Tolerances::default())
}

/// Computes `⟨Λ⟩·⟨Φ⟩` with an explicit tolerance configuration.
pub fn lambda_phi_product_with(psi: &ComplexView<'_>, tol: &Tolerances) -> Result<f64, LphiError> {
    analyze_state_with(psi, tol).map(|report| report.product)
}

/// Computes `⟨Λ⟩·⟨Φ⟩` for a normalized two-component state.
pub fn lambda_phi_product(psi: &ComplexView<'_>) -> Result<f64, LphiError> {
    lambda_phi_product_with(psi, &Tolerances::default())
}

/// Evaluates `|β|²(|α|² - |β|²)` directly for `ψ = (α, β)`.
///
/// Applies the same validation as [`lambda_phi_product`], so any state that
/// is not a normalized 2-vector is rejected before the formula runs.
/// Agreement with the operator route is within rounding, not bitwise.
pub fn lambda_phi_closed_form(psi: &ComplexView<'_>) -> Result<f64, LphiError> {
    let phi_op = create_phi(DEFAULT_QUBITS)?;
    validate_inputs(&phi_op.view(), psi, &Tolerances::default())?;
    let (alpha, beta) = (psi.at(0), psi.at(1));
    let p1 = beta.norm_sqr();
    Ok(p1 * (alpha.norm_sqr() - p1))
}
