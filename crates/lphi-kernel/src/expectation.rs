use lphi_core::{Complex, ComplexView, ErrorInfo, LphiError, Tolerances};
use tracing::{debug, warn};

use crate::linalg::{inner, matvec};
use crate::validate::{is_normalized, is_square, shapes_match, squared_norm};

/// Checks dimensionality, compatibility and normalization, in that order.
pub(crate) fn validate_inputs(
    a: &ComplexView<'_>,
    psi: &ComplexView<'_>,
    tol: &Tolerances,
) -> Result<(), LphiError> {
    if a.ndim() != 2 || psi.ndim() != 1 {
        return Err(LphiError::Shape(
            ErrorInfo::new("shape-ndim", "operator must be 2-D, state must be 1-D")
                .with_context("operator_ndim", a.ndim())
                .with_context("state_ndim", psi.ndim()),
        ));
    }
    if !is_square(a) {
        return Err(LphiError::DimensionMismatch(
            ErrorInfo::new("dimension-nonsquare", "operator is not square")
                .with_context("operator", format!("{:?}", a.shape())),
        ));
    }
    if !shapes_match(a, psi) {
        return Err(LphiError::DimensionMismatch(
            ErrorInfo::new("dimension-state", "operator and state sizes differ")
                .with_context("operator", format!("{:?}", a.shape()))
                .with_context("state_len", psi.len()),
        ));
    }
    if !is_normalized(psi, tol.normalization) {
        return Err(LphiError::NotNormalized(
            ErrorInfo::new("not-normalized", "state must be normalized")
                .with_context("norm_squared", squared_norm(psi))
                .with_context("tolerance", tol.normalization),
        ));
    }
    Ok(())
}

/// Computes the full complex value `⟨ψ|A|ψ⟩` after validating the inputs.
///
/// For Hermitian `A` the imaginary part is rounding noise.
pub fn expectation_complex_with(
    a: &ComplexView<'_>,
    psi: &ComplexView<'_>,
    tol: &Tolerances,
) -> Result<Complex, LphiError> {
    validate_inputs(a, psi, tol)?;
    let a_psi = matvec(a, psi)?;
    inner(psi.as_slice(), &a_psi)
}

/// True when dropping `value.im` loses more than `tol.imaginary`.
pub(crate) fn drops_significant_imaginary(value: Complex, tol: &Tolerances) -> bool {
    value.im.is_nan() || value.im.abs() > tol.imaginary
}

/// Computes `Re ⟨ψ|A|ψ⟩` with an explicit tolerance configuration.
///
/// Hermiticity of `A` is not checked; an imaginary part above
/// `tol.imaginary` is only reported through a `warn!` event.
pub fn expectation_with(
    a: &ComplexView<'_>,
    psi: &ComplexView<'_>,
    tol: &Tolerances,
) -> Result<f64, LphiError> {
    let value = expectation_complex_with(a, psi, tol)?;
    if drops_significant_imaginary(value, tol) {
        warn!(
            dim = psi.len(),
            im = value.im,
            "discarding imaginary part of expectation; operator may not be hermitian"
        );
    }
    debug!(dim = psi.len(), re = value.re, im = value.im, "expectation");
    Ok(value.re)
}

/// Computes `Re ⟨ψ|A|ψ⟩` for a normalized state.
pub fn expectation(a: &ComplexView<'_>, psi: &ComplexView<'_>) -> Result<f64, LphiError> {
    expectation_with(a, psi, &Tolerances::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lphi_core::ErrorKind;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn validation_order_prefers_shape_errors() {
        let op = [c(1.0, 0.0); 3];
        let psi = [c(3.0, 0.0); 3];
        let a = ComplexView::vector(&op);
        let err = expectation(&a, &ComplexView::vector(&psi)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(err.info().code, "shape-ndim");
    }

    #[test]
    fn non_square_operator_is_a_dimension_mismatch() {
        let op = [c(1.0, 0.0); 2];
        let psi = [c(1.0, 0.0)];
        let a = ComplexView::matrix(&op, 1, 2).unwrap();
        let err = expectation(&a, &ComplexView::vector(&psi)).unwrap_err();
        assert_eq!(err.info().code, "dimension-nonsquare");
    }

    #[test]
    fn complex_value_exposes_imaginary_part() {
        // Non-hermitian upper-triangular operator.
        let op = [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)];
        let amp = std::f64::consts::FRAC_1_SQRT_2;
        let psi = [c(amp, 0.0), c(0.0, amp)];
        let a = ComplexView::matrix(&op, 2, 2).unwrap();
        let value =
            expectation_complex_with(&a, &ComplexView::vector(&psi), &Tolerances::default())
                .unwrap();
        assert!((value.im - 0.5).abs() < 1e-15);
        assert!(value.re.abs() < 1e-15);
    }

    #[test]
    fn non_hermitian_operator_flags_dropped_imaginary_part() {
        let op = [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)];
        let amp = std::f64::consts::FRAC_1_SQRT_2;
        let psi = [c(amp, 0.0), c(0.0, amp)];
        let a = ComplexView::matrix(&op, 2, 2).unwrap();
        let state = ComplexView::vector(&psi);
        let tol = Tolerances::default();

        let value = expectation_complex_with(&a, &state, &tol).unwrap();
        assert!(drops_significant_imaginary(value, &tol));
        let real = expectation_with(&a, &state, &tol).unwrap();
        assert_eq!(real.to_bits(), value.re.to_bits());

        let relaxed = Tolerances { imaginary: 1.0, ..tol };
        assert!(!drops_significant_imaginary(value, &relaxed));
    }

    #[test]
    fn hermitian_operator_keeps_imaginary_part_below_tolerance() {
        let op = [c(1.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(-1.0, 0.0)];
        let psi = [c(0.6, 0.0), c(0.0, 0.8)];
        let a = ComplexView::matrix(&op, 2, 2).unwrap();
        let tol = Tolerances::default();
        let value = expectation_complex_with(&a, &ComplexView::vector(&psi), &tol).unwrap();
        assert!(!drops_significant_imaginary(value, &tol));
    }

    #[test]
    fn loose_tolerance_accepts_slightly_unnormalized_state() {
        let op = [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let psi = [c(1.0 + 1e-7, 0.0), c(0.0, 0.0)];
        let a = ComplexView::matrix(&op, 2, 2).unwrap();
        let strict = expectation(&a, &ComplexView::vector(&psi));
        assert_eq!(strict.unwrap_err().kind(), ErrorKind::NotNormalized);
        let loose = Tolerances::default().with_normalization(1e-6);
        let value = expectation_with(&a, &ComplexView::vector(&psi), &loose).unwrap();
        assert!((value - 1.0).abs() < 1e-6);
    }
}
