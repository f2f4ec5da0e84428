//! Factories for the single-qubit Lambda, Phi and identity operators.

use lphi_core::{Complex, ComplexMatrix, ErrorInfo, LphiError};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Qubit count assumed when callers do not supply one.
pub const DEFAULT_QUBITS: u32 = 1;

/// Observables the factory knows how to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorKind {
    /// Projector onto `|1⟩`: `Λ = (I - Z)/2 = diag(0, 1)`.
    Lambda,
    /// Pauli-Z: `Φ = diag(1, -1)`.
    Phi,
    /// Identity.
    Identity,
}

impl OperatorKind {
    /// Human readable operator name used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            OperatorKind::Lambda => "lambda",
            OperatorKind::Phi => "phi",
            OperatorKind::Identity => "identity",
        }
    }

    fn diagonal(self) -> [f64; 2] {
        match self {
            OperatorKind::Lambda => [0.0, 1.0],
            OperatorKind::Phi => [1.0, -1.0],
            OperatorKind::Identity => [1.0, 1.0],
        }
    }
}

/// Builds a freshly allocated operator of the requested kind.
///
/// Only single-qubit operators are supported; any other qubit count fails
/// with an unimplemented error before anything is allocated.
pub fn create_operator(kind: OperatorKind, n_qubits: u32) -> Result<ComplexMatrix, LphiError> {
    if n_qubits != 1 {
        return Err(LphiError::Unimplemented(
            ErrorInfo::new(
                "unimplemented-qubits",
                format!("multi-qubit {} operator not yet implemented", kind.label()),
            )
            .with_context("n_qubits", n_qubits)
            .with_hint("only n_qubits = 1 is supported"),
        ));
    }
    let mut matrix = ComplexMatrix::zeros(2, 2)?;
    for (idx, value) in kind.diagonal().into_iter().enumerate() {
        if value != 0.0 {
            matrix.set(idx, idx, Complex::new(value, 0.0))?;
        }
    }
    trace!(operator = kind.label(), n_qubits, "constructed operator");
    Ok(matrix)
}

/// Builds `Λ = |1⟩⟨1|`.
pub fn create_lambda(n_qubits: u32) -> Result<ComplexMatrix, LphiError> {
    create_operator(OperatorKind::Lambda, n_qubits)
}

/// Builds `Φ = Z`.
pub fn create_phi(n_qubits: u32) -> Result<ComplexMatrix, LphiError> {
    create_operator(OperatorKind::Phi, n_qubits)
}

/// Builds the identity on `n_qubits` qubits.
pub fn create_identity(n_qubits: u32) -> Result<ComplexMatrix, LphiError> {
    create_operator(OperatorKind::Identity, n_qubits)
}
