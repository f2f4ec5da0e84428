#![deny(missing_docs)]
#![doc = "Dense complex expectation values and the Lambda-Phi invariant for pure states."]

/// Single-qubit state preparation.
pub mod encode;
/// Validated expectation values `⟨ψ|A|ψ⟩`.
pub mod expectation;
/// The `⟨Λ⟩·⟨Φ⟩` invariant and its report.
pub mod invariant;
/// Matrix-vector and inner products.
pub mod linalg;
/// Operator factories.
pub mod operators;
/// Comparison of predicted and measured invariants.
pub mod report;
/// Canonical JSON helpers.
pub mod serde;
/// Shape, normalization and hermiticity predicates.
pub mod validate;

pub use encode::{encode_lambda_state, ry_state};
pub use expectation::{expectation, expectation_complex_with, expectation_with};
pub use invariant::{
    analyze_state, analyze_state_with, lambda_phi_closed_form, lambda_phi_product,
    lambda_phi_product_with, InvariantReport,
};
pub use linalg::{inner, matvec};
pub use operators::{
    create_identity, create_lambda, create_operator, create_phi, OperatorKind, DEFAULT_QUBITS,
};
pub use report::{
    compare_measurement, compare_with_default_threshold, relative_error, CheckStatus,
    ConservationCheck,
};
pub use self::serde::{from_json_slice, to_canonical_json_bytes};
pub use validate::{is_hermitian, is_normalized, is_square, shapes_match, squared_norm};

pub use lphi_core::{
    Complex, ComplexMatrix, ComplexView, ErrorKind, LphiError, Tolerances, LAMBDA_PHI,
    PHI_THRESHOLD, THETA_LOCK,
};
