use super::*;

#[test]
fn test_single_element() {
    let m = Matrix::from_vec(1, 1, vec![-7]).expect("valid");
    assert_eq!(determinant(&m).expect("square"), -7.0);
}

#[test]
fn test_two_by_two() {
    let m = Matrix::from_vec(2, 2, vec![4, 3, 2, 1]).expect("valid");
    assert_eq!(m.determinant().expect("square"), -2.0);
}

#[test]
fn test_three_by_three_singular_is_zero_not_error() {
    let m = Matrix::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).expect("valid");
    assert_eq!(determinant(&m).expect("square"), 0.0);
}

#[test]
fn test_three_by_three_float() {
    let m = Matrix::from_vec(3, 3, vec![6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0])
        .expect("valid");
    assert!((determinant(&m).expect("square") + 306.0).abs() < 1e-9);
}

#[test]
fn test_four_by_four() {
    // Upper triangular: determinant is the product of the diagonal.
    let m = Matrix::from_vec(
        4,
        4,
        vec![2, 5, -1, 3, 0, 3, 4, 1, 0, 0, -1, 6, 0, 0, 0, 5],
    )
    .expect("valid");
    assert_eq!(determinant(&m).expect("square"), -30.0);
}

#[test]
fn test_zero_leading_entries() {
    let m = Matrix::from_vec(3, 3, vec![0, 0, 1, 0, 1, 0, 1, 0, 0]).expect("valid");
    assert_eq!(determinant(&m).expect("square"), -1.0);
}

#[test]
fn test_identity_has_unit_determinant() {
    for n in 1..=6 {
        let m = Matrix::<i64>::identity(n);
        assert_eq!(determinant(&m).expect("square"), 1.0, "n = {n}");
    }
}

#[test]
fn test_f32_elements_use_double_precision() {
    let m = Matrix::from_vec(2, 2, vec![0.1_f32, 0.2, 0.3, 0.4]).expect("valid");
    let expected =
        f64::from(0.1_f32) * f64::from(0.4_f32) - f64::from(0.2_f32) * f64::from(0.3_f32);
    assert_eq!(determinant(&m).expect("square"), expected);
}

#[test]
fn test_not_square() {
    let m = Matrix::<f64>::zeros(2, 3);
    assert!(matches!(
        determinant(&m),
        Err(DenseMatError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn test_transpose_invariance() {
    let m = Matrix::from_vec(3, 3, vec![2, -3, 1, 2, 0, -1, 1, 4, 5]).expect("valid");
    assert_eq!(
        determinant(&m).expect("square"),
        determinant(&m.transpose()).expect("square")
    );
}

#[test]
fn test_input_not_mutated() {
    let m = Matrix::from_vec(3, 3, vec![2, -3, 1, 2, 0, -1, 1, 4, 5]).expect("valid");
    let snapshot = m.clone();
    let _ = determinant(&m);
    assert_eq!(m, snapshot);
}
