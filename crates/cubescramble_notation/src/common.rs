use std::fmt;

/// Suffix that alters the amount or direction of a turn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Quarter turn clockwise.
    ///
    /// Example: `R`
    #[default]
    None,
    /// Quarter turn counterclockwise.
    ///
    /// Example: `R'`
    Prime,
    /// Half turn.
    ///
    /// Example: `R2`
    Double,
}

impl Modifier {
    /// All modifiers, in the order used for random selection.
    ///
    /// **Changing this order will change the output of seeded scrambles.**
    pub const ALL: [Modifier; 3] = [Modifier::None, Modifier::Prime, Modifier::Double];

    /// Returns the suffix written after the face name.
    ///
    /// - `""` for [`Modifier::None`]
    /// - `'` for [`Modifier::Prime`]
    /// - `2` for [`Modifier::Double`]
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }

    /// Returns the modifier for a suffix character, or `None` if `c` is not a
    /// modifier character.
    pub fn from_suffix_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Modifier::Prime),
            '2' => Some(Modifier::Double),
            _ => None,
        }
    }

    /// Returns a short human-readable description of the modifier.
    pub fn description(self) -> &'static str {
        match self {
            Modifier::None => "Clockwise",
            Modifier::Prime => "Counter-clockwise",
            Modifier::Double => "Double turn",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
