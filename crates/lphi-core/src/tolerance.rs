use serde::{Deserialize, Serialize};

/// Tolerance discipline applied by validation and the expectation engine.
///
/// Every field has a serde default so partial configurations deserialize to
/// the fixed contract: a state counts as normalized when `|Σ|ψᵢ|² - 1| <= 1e-10`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Tolerances {
    /// Absolute tolerance on the squared norm of a state vector.
    #[serde(default = "Tolerances::default_normalization")]
    pub normalization: f64,
    /// Element-wise tolerance for `A[i,j] = conj(A[j,i])`.
    #[serde(default = "Tolerances::default_hermiticity")]
    pub hermiticity: f64,
    /// Largest `|Im ⟨ψ|A|ψ⟩|` dropped silently; anything above is reported
    /// as a likely non-hermitian operator. The returned value is unaffected.
    #[serde(default = "Tolerances::default_imaginary")]
    pub imaginary: f64,
}

impl Tolerances {
    /// Normalization tolerance fixed by the kernel contract.
    pub const NORMALIZATION: f64 = 1e-10;

    const fn default_normalization() -> f64 {
        Self::NORMALIZATION
    }

    const fn default_hermiticity() -> f64 {
        1e-12
    }

    const fn default_imaginary() -> f64 {
        1e-12
    }

    /// Returns a copy with the normalization tolerance replaced.
    pub fn with_normalization(mut self, tol: f64) -> Self {
        self.normalization = tol;
        self
    }

    /// Returns a copy with the hermiticity tolerance replaced.
    pub fn with_hermiticity(mut self, tol: f64) -> Self {
        self.hermiticity = tol;
        self
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            normalization: Self::default_normalization(),
            hermiticity: Self::default_hermiticity(),
            imaginary: Self::default_imaginary(),
        }
    }
}
