use std::f64::consts::FRAC_1_SQRT_2;

use lphi_kernel::{
    create_lambda, create_phi, expectation, lambda_phi_product, Complex, ComplexView, ErrorKind,
};

fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

fn expectations(psi: &[Complex]) -> (f64, f64, f64) {
    let state = ComplexView::vector(psi);
    let lambda = create_lambda(1).expect("lambda");
    let phi = create_phi(1).expect("phi");
    (
        expectation(&lambda.view(), &state).expect("lambda expectation"),
        expectation(&phi.view(), &state).expect("phi expectation"),
        lambda_phi_product(&state).expect("product"),
    )
}

#[test]
fn ground_state() {
    let (lambda, phi, product) = expectations(&[c(1.0, 0.0), c(0.0, 0.0)]);
    assert_eq!(lambda, 0.0);
    assert_eq!(phi, 1.0);
    assert_eq!(product, 0.0);
}

#[test]
fn excited_state() {
    let (lambda, phi, product) = expectations(&[c(0.0, 0.0), c(1.0, 0.0)]);
    assert_eq!(lambda, 1.0);
    assert_eq!(phi, -1.0);
    assert_eq!(product, -1.0);
}

#[test]
fn plus_state() {
    let (lambda, phi, product) = expectations(&[c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0)]);
    assert!((lambda - 0.5).abs() < 1e-12);
    assert!(phi.abs() < 1e-12);
    assert!(product.abs() < 1e-12);
}

#[test]
fn plus_i_state() {
    let (lambda, phi, _) = expectations(&[c(FRAC_1_SQRT_2, 0.0), c(0.0, FRAC_1_SQRT_2)]);
    assert!((lambda - 0.5).abs() < 1e-12);
    assert!(phi.abs() < 1e-12);
}

#[test]
fn three_four_five_state() {
    let (lambda, phi, product) = expectations(&[c(0.6, 0.0), c(0.8, 0.0)]);
    assert!((lambda - 0.64).abs() < 1e-12);
    assert!((phi + 0.28).abs() < 1e-12);
    assert!((product + 0.1792).abs() < 1e-12);
}

#[test]
fn unnormalized_state_is_rejected() {
    let psi = [c(1.0, 0.0), c(1.0, 0.0)];
    let state = ComplexView::vector(&psi);
    let lambda = create_lambda(1).expect("lambda");
    let err = expectation(&lambda.view(), &state).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotNormalized);
    assert_eq!(err.info().context.get("norm_squared").map(String::as_str), Some("2"));
    let err = lambda_phi_product(&state).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotNormalized);
}

#[test]
fn multi_qubit_lambda_is_unimplemented() {
    let err = create_lambda(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unimplemented);
    assert_eq!(err.info().code, "unimplemented-qubits");
    assert_eq!(create_phi(2).unwrap_err().kind(), ErrorKind::Unimplemented);
}

#[test]
fn four_component_state_is_a_dimension_mismatch() {
    let psi = [c(0.5, 0.0); 4];
    let err = lambda_phi_product(&ComplexView::vector(&psi)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    assert_eq!(err.info().code, "dimension-state");
}

#[test]
fn matrix_shaped_state_is_a_shape_error() {
    let psi = [c(0.5, 0.0); 4];
    let state = ComplexView::matrix(&psi, 2, 2).expect("view");
    let err = lambda_phi_product(&state).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}
