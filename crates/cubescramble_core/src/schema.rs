//! Serialization format for puzzle tables.
//!
//! These types mirror the YAML file directly. They are validated and converted
//! into [`Puzzle`] and [`ScramblerConfig`] before use.

use std::collections::BTreeMap;
use std::sync::Arc;

use cubescramble_notation::Face;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{FaceInfo, GeneratorSettings, Puzzle, ScramblerConfig, TableError};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub generator: GeneratorSettings,
    pub puzzles: Vec<PuzzleEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PuzzleEntry {
    pub size: u32,
    pub name: String,
    pub default_length: u32,
    pub faces: Vec<FaceEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct FaceEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposite: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl ConfigFile {
    pub fn into_config(self) -> Result<ScramblerConfig, TableError> {
        if self.generator.window == 0 {
            return Err(TableError::InvalidSetting {
                name: "window",
                reason: "must be at least 1",
            });
        }

        let mut puzzles = BTreeMap::new();
        for entry in self.puzzles {
            let size = entry.size;
            let puzzle = entry.into_puzzle()?;
            if puzzles.insert(size, Arc::new(puzzle)).is_some() {
                return Err(TableError::DuplicatePuzzleSize(size));
            }
        }

        Ok(ScramblerConfig::new(self.generator, puzzles))
    }
}

impl PuzzleEntry {
    fn into_puzzle(self) -> Result<Puzzle, TableError> {
        let size = self.size;
        let parse_face = |name: String| {
            Face::new(&name).map_err(|source| TableError::InvalidFace { size, name, source })
        };

        let faces = self
            .faces
            .into_iter()
            .map(|entry| -> Result<FaceInfo, TableError> {
                Ok(FaceInfo {
                    face: parse_face(entry.name)?,
                    opposite: entry.opposite.map(parse_face).transpose()?,
                    description: entry.description,
                })
            })
            .try_collect()?;

        Puzzle::new(size, self.name, self.default_length, faces)
    }
}
