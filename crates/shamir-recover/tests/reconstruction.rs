//! End-to-end reconstruction from JSON task documents.

use num_bigint::BigInt;
use shamir_recover::{lagrange, recover_secret, Error, ReconstructionTask};

#[test]
fn test_reconstructs_secret_from_mixed_base_document() {
    // Shares decode to (1, 1), (2, 7), (3, 12); share 6 is beyond the
    // threshold and ignored. The interpolating quadratic has half-integer
    // coefficients but an exactly integral constant term.
    let task = ReconstructionTask::from_json(
        r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "1" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "4", "value": "213" }
        }"#,
    )
    .unwrap();
    assert_eq!(recover_secret(&task).unwrap(), BigInt::from(-6));
}

#[test]
fn test_selection_is_by_index_not_document_order() {
    // Same task with the entries declared in scrambled order; the selected
    // shares, and hence the secret, must not change.
    let task = ReconstructionTask::from_json(
        r#"{
            "6": { "base": "4", "value": "213" },
            "3": { "base": "10", "value": "12" },
            "keys": { "n": 4, "k": 3 },
            "2": { "base": "2", "value": "111" },
            "1": { "base": "10", "value": "1" }
        }"#,
    )
    .unwrap();
    assert_eq!(recover_secret(&task).unwrap(), BigInt::from(-6));
}

#[test]
fn test_undecodable_share_falls_through_to_next_index() {
    // Share 1 is undecodable in base 2, so shares 2, 3 and 6 are used.
    // They lie on P(x) = x^2 + 1.
    let task = ReconstructionTask::from_json(
        r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "2", "value": "921" },
            "2": { "base": "10", "value": "5" },
            "3": { "base": "16", "value": "a" },
            "6": { "base": "10", "value": "37" }
        }"#,
    )
    .unwrap();
    assert_eq!(recover_secret(&task).unwrap(), BigInt::from(1));
}

#[test]
fn test_insufficient_decodable_shares_is_fatal() {
    let task = ReconstructionTask::from_json(
        r##"{
            "keys": { "n": 5, "k": 5 },
            "1": { "base": "10", "value": "1" },
            "2": { "base": "8", "value": "99" },
            "3": { "base": "10", "value": "3" },
            "4": { "base": "10", "value": "#4" },
            "5": { "base": "10", "value": "5" }
        }"##,
    )
    .unwrap();
    assert!(matches!(
        recover_secret(&task),
        Err(Error::InsufficientShares {
            needed: 5,
            available: 3
        })
    ));
}

#[test]
fn test_duplicate_x_coordinates_are_rejected() {
    // A JSON document keys shares by index and cannot express duplicates,
    // but a caller assembling points directly can.
    let points = vec![
        (BigInt::from(1), BigInt::from(4)),
        (BigInt::from(1), BigInt::from(9)),
        (BigInt::from(2), BigInt::from(7)),
    ];
    assert!(matches!(
        lagrange::interpolate_at_zero(&points),
        Err(Error::DuplicateAbscissa(_))
    ));
}

#[test]
fn test_large_values_reconstruct_exactly() {
    // P(x) = 10^40 + 3x, shares in bases 16 and 36. A 64-bit or
    // floating-point pipeline cannot represent these values, let alone
    // recover the exact constant term.
    let c = BigInt::parse_bytes(b"10000000000000000000000000000000000000000", 10).unwrap();
    let y1 = BigInt::parse_bytes(b"10000000000000000000000000000000000000003", 10).unwrap();
    let y2 = BigInt::parse_bytes(b"10000000000000000000000000000000000000006", 10).unwrap();
    let document = format!(
        r#"{{
            "keys": {{ "n": 2, "k": 2 }},
            "1": {{ "base": "16", "value": "{}" }},
            "2": {{ "base": "36", "value": "{}" }}
        }}"#,
        y1.to_str_radix(16),
        y2.to_str_radix(36)
    );
    let task = ReconstructionTask::from_json(&document).unwrap();
    assert_eq!(recover_secret(&task).unwrap(), c);
}
