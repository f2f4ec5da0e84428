//! Boolean predicates over views. Callers translate `false` into a typed error.

use lphi_core::{Complex, ComplexView};

/// Sum of squared magnitudes of every element in the view.
pub fn squared_norm(psi: &ComplexView<'_>) -> f64 {
    psi.as_slice().iter().map(Complex::norm_sqr).sum()
}

/// True iff the view is two-dimensional with equal extents.
pub fn is_square(a: &ComplexView<'_>) -> bool {
    matches!(a.shape(), [rows, cols] if rows == cols)
}

/// True iff `a` is square and `|A[i,j] - conj(A[j,i])| <= tol` for all `i, j`.
///
/// Non-finite entries never compare within tolerance, so they yield `false`.
pub fn is_hermitian(a: &ComplexView<'_>, tol: f64) -> bool {
    if !is_square(a) {
        return false;
    }
    let n = a.shape()[0];
    for i in 0..n {
        for j in 0..n {
            let deviation = (a.at2(i, j) - a.at2(j, i).conj()).norm();
            if deviation.is_nan() || deviation > tol {
                return false;
            }
        }
    }
    true
}

/// True iff `|Σ|ψᵢ|² - 1| <= tol`.
pub fn is_normalized(psi: &ComplexView<'_>, tol: f64) -> bool {
    (squared_norm(psi) - 1.0).abs() <= tol
}

/// True iff `a` is `n x n` and `psi` has length `n`.
pub fn shapes_match(a: &ComplexView<'_>, psi: &ComplexView<'_>) -> bool {
    match (a.shape(), psi.shape()) {
        ([rows, cols], [len]) => rows == cols && cols == len,
        _ => false,
    }
}
