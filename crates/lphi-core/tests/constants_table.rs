use lphi_core::constants::{ERROR_THRESHOLD, LAMBDA_PHI, PHI_THRESHOLD, THETA_LOCK};

#[test]
fn constants_match_literals() {
    assert_eq!(LAMBDA_PHI, 137.035999084);
    assert_eq!(PHI_THRESHOLD, 0.618033988749895);
    assert_eq!(THETA_LOCK, 1.618033988749895);
    assert_eq!(ERROR_THRESHOLD, 0.15);
}

#[test]
fn golden_ratio_pair_differs_by_one() {
    assert!((THETA_LOCK - PHI_THRESHOLD - 1.0).abs() < 1e-15);
}
