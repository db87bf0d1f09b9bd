//! Tests for instruction tapes

use pegboard_core_rs::{Direction, DropError, Tape};

#[test]
fn test_parse_directions() {
    let tape = Tape::parse("LRRL").unwrap();
    assert_eq!(
        tape.directions(),
        &[
            Direction::Left,
            Direction::Right,
            Direction::Right,
            Direction::Left
        ]
    );
}

#[test]
fn test_instruction_at_wraps() {
    let tape = Tape::parse("LRR").unwrap();
    let read: Vec<Direction> = (0..7).map(|k| tape.instruction_at(k)).collect();
    assert_eq!(
        read,
        vec![
            Direction::Left,
            Direction::Right,
            Direction::Right,
            Direction::Left,
            Direction::Right,
            Direction::Right,
            Direction::Left,
        ]
    );
}

#[test]
fn test_single_symbol_tape_repeats() {
    let tape = Tape::parse("R").unwrap();
    for k in 0..20 {
        assert_eq!(tape.instruction_at(k), Direction::Right);
    }
}

#[test]
fn test_empty_tape() {
    assert_eq!(Tape::parse(""), Err(DropError::EmptyTape { token: 0 }));
}

#[test]
fn test_parse_all_indexes_tokens() {
    let err = Tape::parse_all(["LR", "RL", ""]).unwrap_err();
    assert_eq!(err, DropError::EmptyTape { token: 2 });

    let err = Tape::parse_all(["LR", "Rl"]).unwrap_err();
    assert_eq!(
        err,
        DropError::InvalidInstruction {
            token: 1,
            position: 1,
            symbol: 'l'
        }
    );
}

#[test]
fn test_parse_all_keeps_order() {
    let tapes = Tape::parse_all(["L", "RR", "LRL"]).unwrap();
    assert_eq!(tapes.len(), 3);
    assert_eq!(tapes[0].len(), 1);
    assert_eq!(tapes[1].len(), 2);
    assert_eq!(tapes[2].to_string(), "LRL");
}

#[test]
fn test_new_from_directions() {
    let tape = Tape::new(vec![Direction::Right, Direction::Left]).unwrap();
    assert_eq!(tape.to_string(), "RL");
    assert!(!tape.is_empty());
}

#[test]
fn test_direction_symbols() {
    assert_eq!(Direction::from_symbol('L'), Some(Direction::Left));
    assert_eq!(Direction::from_symbol('R'), Some(Direction::Right));
    assert_eq!(Direction::from_symbol('x'), None);
    assert_eq!(Direction::Left.symbol(), 'L');
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_tape_serializes_as_text() {
    let tape = Tape::parse("LRR").unwrap();
    let json = serde_json::to_string(&tape).unwrap();
    assert_eq!(json, r#""LRR""#);
    let back: Tape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tape);
}

#[test]
fn test_deserialize_rejects_empty_tape() {
    let err = serde_json::from_str::<Tape>(r#""""#).unwrap_err();
    assert!(err.to_string().contains("is empty"), "{}", err);

    // The struct form no longer bypasses validation
    assert!(serde_json::from_str::<Tape>(r#"{"directions":[]}"#).is_err());
}

#[test]
fn test_deserialize_rejects_invalid_symbol() {
    let err = serde_json::from_str::<Tape>(r#""LXR""#).unwrap_err();
    assert!(err.to_string().contains("invalid instruction"), "{}", err);
}
