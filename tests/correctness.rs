use pmm::generator::{generate, generate_in, seeded_rng};
use pmm::{
    multiply, multiply_parallel, multiply_with, Dispatch, Element, Error, Matrix, Multiplier,
    Strategy,
};

const DISPATCHES: [Dispatch; 5] = [
    Dispatch::RowThreads,
    Dispatch::Tasks,
    Dispatch::Pool { workers: 1 },
    Dispatch::Pool { workers: 4 },
    Dispatch::Pool { workers: 64 },
];

fn matrix(rows: Vec<Vec<Element>>) -> Matrix {
    Matrix::from_rows(rows).expect("rectangular test matrix")
}

fn assert_all_agree(a: &Matrix, b: &Matrix, name: &str) {
    let expected = multiply(a, b).expect("sequential oracle");
    for dispatch in DISPATCHES {
        let actual = multiply_with(a, b, dispatch).expect("parallel multiply");
        assert_eq!(expected, actual, "{}: {:?} differs from sequential", name, dispatch);
    }
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = matrix(vec![vec![1, 2], vec![3, 4]]);
    let b = matrix(vec![vec![5, 6], vec![7, 8]]);
    let expected = vec![vec![19, 22], vec![43, 50]];

    assert_eq!(multiply(&a, &b).unwrap().to_rows(), expected);
    assert_eq!(multiply_parallel(&a, &b).unwrap().to_rows(), expected);
    for dispatch in DISPATCHES {
        assert_eq!(multiply_with(&a, &b, dispatch).unwrap().to_rows(), expected, "{:?}", dispatch);
    }
}

#[test]
fn test_negative_values() {
    let a = matrix(vec![vec![-1, 2, -3]]);
    let b = matrix(vec![vec![4], vec![-5], vec![6]]);
    assert_eq!(multiply_parallel(&a, &b).unwrap().to_rows(), vec![vec![-32]]);
    assert_all_agree(&a, &b, "negative");
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_dimension_invariant() {
    let mut rng = seeded_rng(11);
    let shapes = [(1, 1, 1), (3, 5, 7), (7, 3, 5), (11, 13, 17), (1, 20, 1), (20, 1, 20)];

    for (m, n, p) in shapes {
        let a = generate(m, n, &mut rng);
        let b = generate(n, p, &mut rng);
        for dispatch in DISPATCHES {
            let c = multiply_with(&a, &b, dispatch).unwrap();
            assert_eq!(c.dim(), (m, p), "{}x{}x{} {:?}", m, n, p, dispatch);
        }
        assert_eq!(multiply(&a, &b).unwrap().dim(), (m, p));
    }
}

#[test]
fn test_identity() {
    let mut rng = seeded_rng(3);
    for (m, n) in [(1, 1), (4, 4), (9, 5), (5, 9)] {
        let a = generate(m, n, &mut rng);
        let id = Matrix::identity(n);
        assert_eq!(multiply(&a, &id).unwrap(), a);
        for dispatch in DISPATCHES {
            assert_eq!(multiply_with(&a, &id, dispatch).unwrap(), a, "{:?}", dispatch);
        }
    }
}

#[test]
fn test_zero_matrix() {
    let mut rng = seeded_rng(5);
    let a = generate(6, 4, &mut rng);
    let zero = Matrix::new((4, 3));
    for dispatch in DISPATCHES {
        let c = multiply_with(&a, &zero, dispatch).unwrap();
        assert_eq!(c.dim(), (6, 3));
        assert!(c.is_zero(), "{:?}", dispatch);
    }
}

#[test]
fn test_equivalence_odd_sizes() {
    let mut rng = seeded_rng(17);
    let test_sizes = [(2, 2, 2), (3, 3, 3), (5, 5, 5), (3, 5, 7), (7, 3, 5), (31, 17, 23)];

    for (m, n, p) in test_sizes {
        let a = generate_in(m, n, -50..=50, &mut rng);
        let b = generate_in(n, p, -50..=50, &mut rng);
        assert_all_agree(&a, &b, &format!("{}x{}x{}", m, n, p));
    }
}

// ============================================================
// Scale and determinism
// ============================================================

#[test]
fn test_seeded_100x100_is_deterministic() {
    let a = generate(100, 100, &mut seeded_rng(2024));
    let b = generate(100, 100, &mut seeded_rng(2025));
    let expected = multiply(&a, &b).unwrap();

    for _ in 0..3 {
        let again_a = generate(100, 100, &mut seeded_rng(2024));
        let again_b = generate(100, 100, &mut seeded_rng(2025));
        assert_eq!(again_a, a);
        assert_eq!(again_b, b);
        for dispatch in DISPATCHES {
            let c = multiply_with(&again_a, &again_b, dispatch).unwrap();
            assert_eq!(c, expected, "{:?}", dispatch);
        }
    }
}

#[test]
fn test_unified_api_matches_entry_points() {
    let mut rng = seeded_rng(99);
    let a = generate(40, 30, &mut rng);
    let b = generate(30, 20, &mut rng);

    assert_eq!(Multiplier::new(Strategy::Sequential).multiply(&a, &b), multiply(&a, &b));
    assert_eq!(Multiplier::default().multiply(&a, &b), multiply_parallel(&a, &b));
}

// ============================================================
// Degenerate inputs
// ============================================================

#[test]
fn test_zero_rows() {
    let a = Matrix::new((0, 3));
    let b = generate(3, 4, &mut seeded_rng(1));
    for dispatch in DISPATCHES {
        let c = multiply_with(&a, &b, dispatch).unwrap();
        assert_eq!(c.dim(), (0, 4));
    }
    assert_eq!(multiply(&a, &b).unwrap().dim(), (0, 4));
}

#[test]
fn test_zero_cols() {
    let a = generate(5, 3, &mut seeded_rng(1));
    let b = Matrix::new((3, 0));
    for dispatch in DISPATCHES {
        let c = multiply_with(&a, &b, dispatch).unwrap();
        assert_eq!(c.dim(), (5, 0));
        assert!(c.is_empty());
    }
}

#[test]
fn test_zero_inner_dimension() {
    let a = Matrix::new((4, 0));
    let b = Matrix::new((0, 6));
    assert_all_agree(&a, &b, "zero inner");
    let c = multiply_parallel(&a, &b).unwrap();
    assert_eq!(c.dim(), (4, 6));
    assert!(c.is_zero());
}

#[test]
fn test_zero_cols_against_nonempty_is_mismatch() {
    let a = Matrix::new((2, 0));
    let b = Matrix::new((3, 3));
    assert!(matches!(multiply_parallel(&a, &b), Err(Error::DimensionMismatch { .. })));
}

// ============================================================
// Failures
// ============================================================

#[test]
fn test_mismatch_rejected() {
    let a = Matrix::new((2, 3));
    let b = Matrix::new((2, 2));
    let expected = Error::DimensionMismatch {
        a: (2, 3),
        b: (2, 2),
    };

    assert_eq!(multiply(&a, &b), Err(expected.clone()));
    for dispatch in DISPATCHES {
        assert_eq!(multiply_with(&a, &b, dispatch), Err(expected.clone()), "{:?}", dispatch);
    }
    assert_eq!(
        expected.to_string(),
        "matrix dimension mismatch: A is 2x3, B is 2x2"
    );
}

#[test]
fn test_ragged_input_never_reaches_multiplier() {
    let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    assert_eq!(
        err,
        Error::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_overflow_reported_by_every_path() {
    let big = Element::MAX / 2 + 1;
    let a = matrix(vec![vec![1, 1], vec![1, 1], vec![big, big]]);
    let b = matrix(vec![vec![1, 1], vec![1, 1]]);
    let expected = Err(Error::Overflow { row: 2, col: 0 });

    assert_eq!(multiply(&a, &b), expected);
    for dispatch in DISPATCHES {
        assert_eq!(multiply_with(&a, &b, dispatch), expected, "{:?}", dispatch);
    }
}
