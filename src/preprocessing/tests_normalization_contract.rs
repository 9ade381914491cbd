// =========================================================================
// Normalization contract: properties StandardScaler and MinMaxScaler must
// keep for any non-degenerate input.
// =========================================================================

use super::*;

/// PN-001: StandardScaler output has zero mean and unit population std
#[test]
fn contract_pn_001_standard_scaler_moments() {
    let x = Matrix::from_vec(
        5,
        2,
        vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0, 5.0, 50.0],
    )
    .expect("valid");

    let mut scaler = StandardScaler::new();
    let transformed = scaler.fit_transform(&x).expect("fit_transform");

    let (n, p) = transformed.shape();
    for j in 0..p {
        let col = transformed.column(j);
        let mean: f64 = col.iter().sum::<f64>() / n as f64;
        let var: f64 = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 1e-10, "column {j} mean={mean}, expected 0");
        assert!((var.sqrt() - 1.0).abs() < 1e-10, "column {j} std={}", var.sqrt());
    }
}

/// PN-002: MinMaxScaler output of the training data lies in [0, 1]
#[test]
fn contract_pn_002_minmax_scaler_bounded() {
    let x = Matrix::from_vec(
        5,
        2,
        vec![
            -10.0, 100.0, 0.0, 200.0, 10.0, 300.0, 20.0, 400.0, 30.0, 500.0,
        ],
    )
    .expect("valid");

    let mut scaler = MinMaxScaler::new();
    let transformed = scaler.fit_transform(&x).expect("fit_transform");

    for (i, &v) in transformed.as_slice().iter().enumerate() {
        assert!((0.0..=1.0).contains(&v), "value {i}={v} outside [0, 1]");
    }
}

/// PN-003: inverse_transform recovers the input for both scalers
#[test]
fn contract_pn_003_inverse_roundtrip() {
    let x = Matrix::from_vec(4, 2, vec![1.0, 10.0, 2.5, 20.0, 3.0, 35.0, 4.0, 40.0])
        .expect("valid");

    let mut mm = MinMaxScaler::new();
    let mut std = StandardScaler::new();
    let scaled_mm = mm.fit_transform(&x).expect("fit");
    let r1 = mm.inverse_transform(&scaled_mm).expect("inverse");
    let scaled_std = std.fit_transform(&x).expect("fit");
    let r2 = std.inverse_transform(&scaled_std).expect("inverse");

    for ((a, b), c) in x.as_slice().iter().zip(r1.as_slice()).zip(r2.as_slice()) {
        assert!((a - b).abs() < 1e-9, "minmax round-trip {a} -> {b}");
        assert!((a - c).abs() < 1e-9, "zscore round-trip {a} -> {c}");
    }
}

mod pn_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn contract_pn_002_prop_minmax_bounded(
            data in proptest::collection::vec(-1e6f64..1e6, 8..40),
        ) {
            let n = data.len() / 2;
            let x = Matrix::from_vec(n, 2, data[..n * 2].to_vec()).expect("valid");

            let mut scaler = MinMaxScaler::new();
            let transformed = scaler.fit_transform(&x).expect("fit_transform");
            for &v in transformed.as_slice() {
                prop_assert!((0.0..=1.0).contains(&v), "value {} outside [0,1]", v);
            }
        }

        #[test]
        fn contract_pn_003_prop_shape_preserved(
            n in 1..=10usize,
            p in 1..=4usize,
            seed in 0..200u32,
        ) {
            let data: Vec<f64> = (0..n * p)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 50.0)
                .collect();
            let x = Matrix::from_vec(n, p, data).expect("valid");

            let mut scaler = StandardScaler::new();
            let transformed = scaler.fit_transform(&x).expect("fit_transform");
            prop_assert_eq!(transformed.shape(), (n, p));
        }
    }
}
