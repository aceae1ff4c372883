//! Integration tests for row operations and the augmented pair
//!
//! Tests verify:
//! - The swap / scale / add-scaled walkthrough stays exact at each step
//! - Undoing a sequence with inverse operations restores the matrix
//! - Invalid commands are rejected without touching the input

mod common;

use common::m;
use lingame::algorithm::{apply_row_operation, AugmentedPair, MatrixSource, RandomMatrices, RowOperation};
use lingame::error::Error;
use lingame::game::{parse_row_command, CommandKind};
use lingame::matrix::Matrix;
use lingame::scalar::{from_int, ratio};

// ============================================================================
// Walkthrough
// ============================================================================

#[test]
fn test_swap_scale_add_walkthrough() {
    let a = m(&[&[1, 2], &[3, 4]]);

    let swap = RowOperation::Swap {
        first: 0,
        second: 1,
    };
    let a = swap.apply(&a).unwrap();
    assert_eq!(a, m(&[&[3, 4], &[1, 2]]));

    let scale = RowOperation::Scale {
        row: 0,
        factor: ratio(1, 2).unwrap(),
    };
    let a = scale.apply(&a).unwrap();
    assert_eq!(
        a,
        Matrix::from_rows(vec![
            vec![ratio(3, 2).unwrap(), from_int(2)],
            vec![from_int(1), from_int(2)],
        ])
        .unwrap()
    );

    let add = RowOperation::AddScaled {
        source: 1,
        target: 0,
        factor: from_int(-1),
    };
    let a = add.apply(&a).unwrap();
    assert_eq!(
        a,
        Matrix::from_rows(vec![
            vec![ratio(1, 2).unwrap(), from_int(0)],
            vec![from_int(1), from_int(2)],
        ])
        .unwrap()
    );
    assert_eq!(a.to_string(), "1/2  0\n1  2");
}

#[test]
fn test_walkthrough_from_free_text() {
    let a = m(&[&[1, 2], &[3, 4]]);
    let ops = [
        parse_row_command(CommandKind::Swap, "1 2", 2).unwrap(),
        parse_row_command(CommandKind::Scale, "1 1/2", 2).unwrap(),
        parse_row_command(CommandKind::AddScaled, "2 1 -1", 2).unwrap(),
    ];
    let out = ops.iter().fold(a, |acc, op| op.apply(&acc).unwrap());
    assert_eq!(out[(0, 0)], ratio(1, 2).unwrap());
    assert_eq!(out[(0, 1)], from_int(0));
    assert_eq!(out.row(1), &[from_int(1), from_int(2)]);
}

// ============================================================================
// Inverse sequences
// ============================================================================

#[test]
fn test_inverse_sequence_restores_original() {
    let mut source = RandomMatrices::seeded(11, -10, 10).unwrap();
    for n in 2..=5 {
        let original = source.random_matrix(n);
        let ops = vec![
            RowOperation::Swap {
                first: 0,
                second: n - 1,
            },
            RowOperation::Scale {
                row: 1,
                factor: ratio(-7, 3).unwrap(),
            },
            RowOperation::AddScaled {
                source: 0,
                target: 1,
                factor: ratio(5, 2).unwrap(),
            },
            RowOperation::Scale {
                row: n - 1,
                factor: ratio(2, 9).unwrap(),
            },
        ];

        let forward = ops.iter().fold(original.clone(), |acc, op| op.apply(&acc).unwrap());
        let back = ops
            .iter()
            .rev()
            .fold(forward, |acc, op| op.inverse().unwrap().apply(&acc).unwrap());
        assert_eq!(back, original, "n={n}");
    }
}

#[test]
fn test_pair_receives_identical_operations() {
    let a = m(&[&[2, 1], &[4, 3]]);
    let pair = AugmentedPair::with_identity(a.clone()).unwrap();
    let ops = [
        RowOperation::AddScaled {
            source: 0,
            target: 1,
            factor: from_int(-2),
        },
        RowOperation::AddScaled {
            source: 1,
            target: 0,
            factor: from_int(-1),
        },
        RowOperation::Scale {
            row: 0,
            factor: ratio(1, 2).unwrap(),
        },
    ];
    let pair = ops.iter().fold(pair, |acc, op| acc.apply(op).unwrap());

    assert!(pair.working().is_identity());
    // the transform block accumulates the inverse
    assert_eq!(a.matmul(pair.transform()).unwrap(), Matrix::identity(2));
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_invalid_operations_leave_input_untouched() {
    let a = m(&[&[1, 2], &[3, 4]]);
    let b = m(&[&[5], &[6]]);
    let cases = [
        RowOperation::Swap {
            first: 0,
            second: 5,
        },
        RowOperation::Scale {
            row: 0,
            factor: from_int(0),
        },
        RowOperation::AddScaled {
            source: 0,
            target: 0,
            factor: from_int(1),
        },
    ];
    for op in &cases {
        assert!(apply_row_operation(&a, op, Some(&b)).is_err(), "{op:?}");
    }
    assert_eq!(a, m(&[&[1, 2], &[3, 4]]));
    assert_eq!(b, m(&[&[5], &[6]]));
}

#[test]
fn test_error_kinds_from_free_text() {
    assert!(matches!(
        parse_row_command(CommandKind::Swap, "1 4", 3),
        Err(Error::InvalidIndex { index: 3, rows: 3 })
    ));
    assert!(matches!(
        parse_row_command(CommandKind::Scale, "1 __import__", 3),
        Err(Error::InvalidFactor { .. })
    ));
    assert!(matches!(
        parse_row_command(CommandKind::AddScaled, "one two 3", 3),
        Err(Error::MalformedInput { .. })
    ));
}
