use cubescramble_notation::parse_moves;
use pretty_assertions::assert_eq;

use super::*;
use crate::Violation;

fn check(size: u32, moves: &str, window: usize) -> Vec<Violation> {
    builtin_puzzle(size).check(&parse_moves(moves).unwrap(), window)
}

#[test]
fn test_check_valid_sequences() {
    assert!(check(3, "", 3).is_empty());
    assert!(check(3, "R U F R U F", 2).is_empty());
    assert!(check(3, "R U' F2 L D B", 2).is_empty());
    assert!(check(5, "R Uw M F' Lw2 E", 3).is_empty());
    // Wide turns on 4x4x4 have no opposite in the alphabet.
    assert!(check(4, "Rw Uw Fw R", 2).is_empty());
}

#[test]
fn test_check_immediate_repeat() {
    assert_eq!(
        check(3, "R R'", 1),
        vec![Violation::ImmediateRepeat { position: 1 }],
    );
    assert_eq!(
        check(3, "R U U2", 0),
        vec![Violation::ImmediateRepeat { position: 2 }],
    );
}

#[test]
fn test_check_window() {
    assert_eq!(
        check(3, "R U R", 3),
        vec![Violation::SameFaceInWindow {
            position: 2,
            earlier: 0,
        }],
    );
    assert!(check(3, "R U R", 1).is_empty());
    assert_eq!(
        check(3, "R U F L", 3),
        vec![Violation::OppositeFaceInWindow {
            position: 3,
            earlier: 0,
        }],
    );
    assert!(check(3, "R U F L", 2).is_empty());
    assert_eq!(
        check(5, "M U M", 2),
        vec![Violation::SameFaceInWindow {
            position: 2,
            earlier: 0,
        }],
    );
}

#[test]
fn test_check_unknown_face() {
    assert_eq!(
        check(3, "R Rw U", 3),
        vec![Violation::UnknownFace {
            position: 1,
            face: "Rw".parse().unwrap(),
        }],
    );
    assert_eq!(
        check(2, "R L", 3),
        vec![Violation::UnknownFace {
            position: 1,
            face: "L".parse().unwrap(),
        }],
    );
}

#[test]
fn test_violation_display() {
    let violations = check(3, "R R U D x", 3);
    let messages = violations.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    assert_eq!(
        messages,
        [
            "move 2: repeats the previous face",
            "move 4: opposes the face of move 3",
            "move 5: unknown face x",
        ],
    );
    assert_eq!(
        violations.iter().map(Violation::position).collect::<Vec<_>>(),
        [1, 3, 4],
    );
}

#[test]
fn test_violation_serialization() {
    let json = serde_json::to_value(check(3, "R U R", 3)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "kind": "same_face_in_window", "position": 2, "earlier": 0 }]),
    );
}
