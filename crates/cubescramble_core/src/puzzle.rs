use std::collections::HashMap;
use std::fmt;

use cubescramble_notation::{Face, Modifier};
use itertools::Itertools;

use crate::{MAX_SCRAMBLE_LENGTH, TableError};

/// Face that may appear in scrambles for a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceInfo {
    /// Face name.
    pub face: Face,
    /// Face on the other side of the puzzle along the same axis, if any.
    ///
    /// Slice moves are their own opposite. The opposite does not have to be
    /// one of the faces used for scrambling.
    pub opposite: Option<Face>,
    /// Human-readable description for the notation legend.
    pub description: String,
}

/// Line in a notation legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Face name or modifier suffix.
    pub symbol: String,
    /// Human-readable description.
    pub description: String,
}

impl fmt::Display for LegendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.symbol, self.description)
    }
}

/// Cube puzzle of a particular size, along with the faces used to scramble
/// it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Number of layers along each axis; 3 for a 3x3x3.
    pub size: u32,
    /// Display name, such as `3x3x3`.
    pub name: String,
    /// Recommended scramble length.
    pub default_length: u32,
    /// Faces used for scrambling, in a stable order.
    ///
    /// **Changing this order will change the output of seeded scrambles.**
    pub faces: Vec<FaceInfo>,
    /// Map from face to index in `faces`.
    pub face_by_name: HashMap<Face, usize>,

    /// Index of the opposite face for each face, if it is in `faces`.
    opposites: Vec<Option<usize>>,
}

impl Puzzle {
    /// Constructs a puzzle, checking that face names are unique and that
    /// opposite faces agree with each other.
    pub fn new(
        size: u32,
        name: String,
        default_length: u32,
        faces: Vec<FaceInfo>,
    ) -> Result<Self, TableError> {
        if faces.is_empty() {
            return Err(TableError::EmptyAlphabet(size));
        }
        if default_length > MAX_SCRAMBLE_LENGTH {
            return Err(TableError::DefaultLengthTooLarge {
                size,
                length: default_length,
                max: MAX_SCRAMBLE_LENGTH,
            });
        }

        let mut face_by_name = HashMap::new();
        for (i, info) in faces.iter().enumerate() {
            if face_by_name.insert(info.face.clone(), i).is_some() {
                return Err(TableError::DuplicateFace {
                    size,
                    face: info.face.clone(),
                });
            }
        }

        let opposites: Vec<Option<usize>> = faces
            .iter()
            .map(|info| {
                let opposite = info
                    .opposite
                    .as_ref()
                    .and_then(|o| face_by_name.get(o).copied());
                if let Some(j) = opposite
                    && faces[j].opposite.as_ref() != Some(&info.face)
                {
                    return Err(TableError::AsymmetricOpposite {
                        size,
                        face: info.face.clone(),
                        opposite: faces[j].face.clone(),
                    });
                }
                Ok(opposite)
            })
            .try_collect()?;

        Ok(Self {
            size,
            name,
            default_length,
            faces,
            face_by_name,
            opposites,
        })
    }

    /// Returns the number of faces used for scrambling.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the index of a face, or `None` if it is not used for
    /// scrambling this puzzle.
    pub fn face_index(&self, face: &Face) -> Option<usize> {
        self.face_by_name.get(face).copied()
    }

    /// Returns the index of the face opposite `face`, if it is used for
    /// scrambling this puzzle.
    pub fn opposite(&self, face: usize) -> Option<usize> {
        self.opposites.get(face).copied().flatten()
    }

    /// Returns whether turning `candidate` soon after `earlier` is redundant;
    /// i.e., whether they are the same face or `candidate` is opposite
    /// `earlier`.
    pub fn conflicts(&self, earlier: usize, candidate: usize) -> bool {
        earlier == candidate || self.opposite(earlier) == Some(candidate)
    }

    /// Returns the notation legend for the puzzle: one line per face followed
    /// by one line per modifier suffix.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let faces = self.faces.iter().map(|info| LegendEntry {
            symbol: info.face.to_string(),
            description: info.description.clone(),
        });
        let modifiers = [Modifier::Prime, Modifier::Double].map(|modifier| {
            let example = self.faces[0].face.with_modifier(modifier);
            LegendEntry {
                symbol: modifier.suffix().to_string(),
                description: format!("{} (e.g., {example})", modifier.description()),
            }
        });
        faces.chain(modifiers).collect()
    }
}
