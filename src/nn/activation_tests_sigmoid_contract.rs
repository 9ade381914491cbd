// =========================================================================
// Sigmoid activation contract
//
// References:
//   - Rumelhart, Hinton & Williams (1986) "Learning representations by
//     back-propagating errors"
// =========================================================================

use super::*;

/// SG-001: Sigmoid output is in [0, 1]
#[test]
fn contract_sg_001_output_bounded() {
    for x in [-800.0, -10.0, -1.0, 0.0, 1.0, 10.0, 800.0] {
        let y = sigmoid(x);
        assert!((0.0..=1.0).contains(&y), "sigmoid({x})={y}, expected in [0,1]");
    }
}

/// SG-002: Sigmoid(0) = 0.5
#[test]
fn contract_sg_002_zero_maps_to_half() {
    assert_eq!(sigmoid(0.0), 0.5);
}

/// SG-003: Sigmoid is monotonically increasing
#[test]
fn contract_sg_003_monotone_increasing() {
    let ys: Vec<f64> = (-50..=50).map(|i| sigmoid(f64::from(i) * 0.1)).collect();
    for w in ys.windows(2) {
        assert!(w[1] > w[0], "sigmoid not increasing: {} then {}", w[0], w[1]);
    }
}

/// SG-004: σ(-x) = 1 - σ(x)
#[test]
fn contract_sg_004_symmetry() {
    for i in -20..=20 {
        let x = f64::from(i) * 0.35;
        assert!((sigmoid(-x) - (1.0 - sigmoid(x))).abs() < 1e-15);
    }
}

/// SG-005: derivative from output matches a central difference
#[test]
fn contract_sg_005_derivative_matches_finite_difference() {
    let h = 1e-6;
    for i in -10..=10 {
        let x = f64::from(i) * 0.5;
        let numeric = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
        let analytic = sigmoid_derivative(sigmoid(x));
        assert!(
            (numeric - analytic).abs() < 1e-8,
            "x={x}: numeric={numeric}, analytic={analytic}"
        );
    }
    assert_eq!(sigmoid_derivative(0.5), 0.25);
}

#[test]
fn test_sigmoid_matrix_is_elementwise() {
    let m = Matrix::from_vec(1, 3, vec![0.0, 2.0, -2.0]).expect("valid");
    let y = sigmoid_matrix(&m);
    assert_eq!(y.shape(), (1, 3));
    assert_eq!(y.get(0, 0), 0.5);
    assert!((y.get(0, 1) - 0.880_797_077_977_882_3).abs() < 1e-15);
    assert!((y.get(0, 1) + y.get(0, 2) - 1.0).abs() < 1e-15);
}
