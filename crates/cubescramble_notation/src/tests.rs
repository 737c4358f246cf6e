use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn mv(face: &str, modifier: Modifier) -> Move {
    Move::new(Face::new(face).unwrap(), modifier)
}

#[test]
fn test_move_display() {
    assert_eq!("R", mv("R", Modifier::None).to_string());
    assert_eq!("U'", mv("U", Modifier::Prime).to_string());
    assert_eq!("Rw2", mv("Rw", Modifier::Double).to_string());
    assert_eq!("M'", mv("M", Modifier::Prime).to_string());
}

#[test]
fn test_parse_moves() {
    let expected = vec![
        mv("R", Modifier::None),
        mv("U", Modifier::Double),
        mv("f", Modifier::Prime),
        mv("Rw", Modifier::None),
        mv("Uw", Modifier::Prime),
    ];
    assert_eq!(expected, parse_moves("R U2 f' Rw Uw'").unwrap());

    // with extra spaces
    assert_eq!(expected, parse_moves("  R  U2\tf'\n Rw   Uw'  ").unwrap());

    assert_eq!(Vec::<Move>::new(), parse_moves("").unwrap());
    assert_eq!(Vec::<Move>::new(), parse_moves("   ").unwrap());
}

#[test]
fn test_parse_moves_errors() {
    parse_moves("R2U").expect_err("missing space between moves");
    parse_moves("R U 2").expect_err("lone modifier");
    parse_moves("R'2").expect_err("two modifiers");
    parse_moves("R, U").expect_err("comma separator");
    parse_moves("2R").expect_err("layer prefix");
    parse_moves("R3").expect_err("unsupported multiplier");
}

#[test]
fn test_parse_error_span() {
    let errors = parse_moves("R U 2").unwrap_err();
    let span: Span = *errors[0].span();
    assert!((3..=4).contains(&span.start), "unexpected span {span:?}");
    assert!(span.end <= 5, "unexpected span {span:?}");
}

#[test]
fn test_move_from_str() {
    assert_eq!(Ok(mv("Fw", Modifier::Double)), "Fw2".parse());
    assert_eq!(Ok(mv("E", Modifier::None)), " E ".parse());

    let err = "R U".parse::<Move>().expect_err("two moves");
    assert_eq!("R U", err.input);
    assert!(!err.messages.is_empty());
    "".parse::<Move>().expect_err("empty move");
}

#[test]
fn test_face_validation() {
    assert_eq!(Ok("Rw"), Face::new("Rw").as_ref().map(Face::as_str));
    assert_eq!(Err(ParseFaceError::Empty), Face::new(""));
    assert_eq!(Err(ParseFaceError::InvalidChar('\'')), Face::new("R'"));
    assert_eq!(Err(ParseFaceError::InvalidChar('3')), Face::new("3Rw"));
}

#[test]
fn test_format_moves() {
    let moves = [
        mv("R", Modifier::None),
        mv("U", Modifier::Prime),
        mv("F", Modifier::Double),
    ];
    assert_eq!("R U' F2", format_moves(&moves));
    assert_eq!("", format_moves(&[]));
}

#[test]
fn test_modifier_suffixes() {
    for modifier in Modifier::ALL {
        let parsed = modifier
            .suffix()
            .chars()
            .next()
            .and_then(Modifier::from_suffix_char)
            .unwrap_or_default();
        assert_eq!(modifier, parsed);
    }
}

fn arb_move() -> impl Strategy<Value = Move> {
    ("[a-zA-Z]{1,3}", 0..3_usize).prop_map(|(face, i)| mv(&face, Modifier::ALL[i]))
}

proptest! {
    #[test]
    fn proptest_move_list_roundtrip(moves in proptest::collection::vec(arb_move(), 0..20)) {
        prop_assert_eq!(parse_moves(&format_moves(&moves)).ok(), Some(moves));
    }
}
