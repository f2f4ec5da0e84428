//! Named physical constants exported by the kernel.
//!
//! The values are fixed literals and carry no physical validation.

/// Lambda-Phi coupling constant.
pub const LAMBDA_PHI: f64 = 137.035999084;

/// Golden ratio conjugate.
pub const PHI_THRESHOLD: f64 = 0.618033988749895;

/// Golden ratio.
pub const THETA_LOCK: f64 = 1.618033988749895;

/// Maximum relative invariant error accepted by a measurement comparison.
pub const ERROR_THRESHOLD: f64 = 0.15;
