use lphi_core::Tolerances;

#[test]
fn default_normalization_is_fixed() {
    let tol = Tolerances::default();
    assert_eq!(tol.normalization, 1e-10);
    assert_eq!(tol.normalization, Tolerances::NORMALIZATION);
}

#[test]
fn partial_json_fills_defaults() {
    let tol: Tolerances = serde_json::from_str(r#"{"hermiticity": 1e-6}"#).expect("decode");
    assert_eq!(tol.normalization, 1e-10);
    assert_eq!(tol.hermiticity, 1e-6);
    assert_eq!(tol.imaginary, Tolerances::default().imaginary);

    let empty: Tolerances = serde_json::from_str("{}").expect("decode");
    assert_eq!(empty, Tolerances::default());
}

#[test]
fn builders_override_single_fields() {
    let tol = Tolerances::default().with_normalization(1e-6);
    assert_eq!(tol.normalization, 1e-6);
    assert_eq!(tol.hermiticity, Tolerances::default().hermiticity);
}
