// =========================================================================
// Matrix container contract: algebraic identities every Matrix<T> must
// satisfy regardless of element domain.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// MX-001: Transpose involution: (A^T)^T = A
#[test]
fn contract_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("valid");
    assert_eq!(a.transpose().transpose(), a, "(A^T)^T != A");
}

/// MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn contract_mx_002_transpose_swaps_shape() {
    let a = Matrix::<f64>::zeros(3, 5);
    assert_eq!(a.transpose().shape(), (5, 3));
}

/// MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_mx_003_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");
    assert_eq!(c.shape(), (2, 4), "(2x3)*(3x4) shape={:?}", c.shape());
}

/// MX-004: Identity matmul: A * I = A
#[test]
fn contract_mx_004_identity_matmul() {
    let a = Matrix::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).expect("valid");
    let eye = Matrix::identity(3);
    assert_eq!(a.matmul(&eye).expect("compatible dims"), a);
    assert_eq!(eye.matmul(&a).expect("compatible dims"), a);
}

/// MX-005: (AB)^T = B^T A^T
#[test]
fn contract_mx_005_transpose_of_product() {
    let a = Matrix::from_vec(2, 3, vec![1, -2, 3, 0, 5, 6]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![7, 8, -9, 10, 11, 1]).expect("valid");
    let lhs = a.matmul(&b).expect("compatible").transpose();
    let rhs = b
        .transpose()
        .matmul(&a.transpose())
        .expect("compatible");
    assert_eq!(lhs, rhs);
}

/// MX-006: Scalar multiply distributes over add: k(A + B) = kA + kB
#[test]
fn contract_mx_006_scalar_distributes() {
    let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![-4, 0, 9, 2]).expect("valid");
    let lhs = a.add(&b).expect("same shape").scalar_multiply(3);
    let rhs = a
        .scalar_multiply(3)
        .add(&b.scalar_multiply(3))
        .expect("same shape");
    assert_eq!(lhs, rhs);
}

/// MX-007: A - A = 0
#[test]
fn contract_mx_007_self_subtraction_is_zero() {
    let a = Matrix::from_vec(2, 2, vec![1.25, -2.5, 3.0, 4.75]).expect("valid");
    let z = a.sub(&a).expect("same shape");
    assert!(z.as_slice().iter().all(|&x| x == 0.0));
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..rows * cols)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            prop_assert_eq!(a.transpose().transpose(), a);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn contract_mx_004_prop_identity_matmul(
            data in proptest::collection::vec(-1000i64..1000, 36),
        ) {
            let a = Matrix::from_vec(6, 6, data).expect("valid");
            let eye = Matrix::identity(6);
            prop_assert_eq!(a.matmul(&eye).expect("compatible"), a);
        }
    }
}
