use chumsky::prelude::*;

use crate::{Face, Modifier, Move, Span};

/// Error produced while parsing move notation.
///
/// Multiple errors may be produced during the same parse.
pub type ParseError<'src> = Rich<'src, char, Span>;
type ParseExtra<'src> = extra::Err<ParseError<'src>>;

/// Trait alias for parser.
pub(crate) trait MoveParser<'src, O>:
    Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}
impl<'src, O, T> MoveParser<'src, O> for T where
    T: Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}

/// Parses a whitespace-separated list of moves, such as `R U2 F' Rw`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, Vec<ParseError<'_>>> {
    move_list().parse(s).into_result()
}

pub(crate) fn single_move<'src>() -> impl MoveParser<'src, Move> {
    move_().padded().then_ignore(end())
}

fn move_list<'src>() -> impl MoveParser<'src, Vec<Move>> {
    move_()
        .separated_by(text::whitespace().at_least(1))
        .collect::<Vec<_>>()
        .padded()
        .then_ignore(end())
}

fn move_<'src>() -> impl MoveParser<'src, Move> {
    face()
        .then(modifier())
        .map(|(face, modifier)| Move { face, modifier })
        .labelled("move")
}

fn face<'src>() -> impl MoveParser<'src, Face> {
    any()
        .filter(|&c| crate::charsets::is_face_char(c))
        .repeated()
        .at_least(1)
        .to_slice()
        .map(Face::new_unchecked)
        .labelled("face")
}

fn modifier<'src>() -> impl MoveParser<'src, Modifier> {
    any()
        .filter(|&c| crate::charsets::is_modifier_char(c))
        .try_map(|c, span| {
            Modifier::from_suffix_char(c)
                .ok_or_else(|| Rich::custom(span, format!("unknown modifier: {c}")))
        })
        .or_not()
        .map(Option::unwrap_or_default)
}
