//! Character sets allowed in notation.

/// Returns whether `c` is allowed in a face name.
///
/// Face names are runs of Latin letters, such as `R`, `r`, `Rw`, or `M`.
pub fn is_face_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns whether `c` is a modifier suffix character `'` or `2`.
pub fn is_modifier_char(c: char) -> bool {
    matches!(c, '\'' | '2')
}
