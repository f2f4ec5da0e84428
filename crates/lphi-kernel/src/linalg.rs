//! Dense complex matrix-vector product and inner product.
//!
//! Accumulation order is the straightforward row-by-row, column-ascending
//! loop; results are bit-for-bit reproducible on identical inputs.

use lphi_core::{alloc_zeroed, Complex, ComplexView, ErrorInfo, LphiError};

use crate::validate::shapes_match;

fn mismatch(code: &str, message: &str, lhs: usize, rhs: usize) -> LphiError {
    LphiError::DimensionMismatch(
        ErrorInfo::new(code, message)
            .with_context("lhs", lhs)
            .with_context("rhs", rhs),
    )
}

/// Computes `φᵢ = Σⱼ A[i,j]·ψⱼ` into a freshly allocated vector.
pub fn matvec(a: &ComplexView<'_>, psi: &ComplexView<'_>) -> Result<Vec<Complex>, LphiError> {
    if !shapes_match(a, psi) {
        return Err(LphiError::DimensionMismatch(
            ErrorInfo::new("dimension-state", "operator and state sizes are incompatible")
                .with_context("operator", format!("{:?}", a.shape()))
                .with_context("state", format!("{:?}", psi.shape())),
        ));
    }
    let n = psi.len();
    let mut out = alloc_zeroed("matvec temporary", n)?;
    for (i, slot) in out.iter_mut().enumerate() {
        let mut acc = Complex::new(0.0, 0.0);
        for j in 0..n {
            acc += a.at2(i, j) * psi.at(j);
        }
        *slot = acc;
    }
    Ok(out)
}

/// Computes `Σᵢ conj(ψᵢ)·φᵢ`.
pub fn inner(psi: &[Complex], phi: &[Complex]) -> Result<Complex, LphiError> {
    if psi.len() != phi.len() {
        return Err(mismatch(
            "dimension-inner",
            "inner product operands differ in length",
            psi.len(),
            phi.len(),
        ));
    }
    let mut acc = Complex::new(0.0, 0.0);
    for (p, f) in psi.iter().zip(phi.iter()) {
        acc += p.conj() * f;
    }
    Ok(acc)
}
