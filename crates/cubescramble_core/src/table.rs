use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_RETRY_BUDGET, DEFAULT_WINDOW, Puzzle, RandomSource, Scramble, ScrambleError,
    ScrambleGenerator, ScrambleParams, SeededScramble, TableError, schema,
};

const CONFIG_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_CONFIG_STR: &str = include_str!("default.yaml");

/// Prefix for environment variables that override configuration values.
///
/// Nested keys are separated by `__`; for example,
/// `CUBESCRAMBLE_GENERATOR__WINDOW=2`.
pub const ENV_PREFIX: &str = "CUBESCRAMBLE";

lazy_static! {
    static ref BUILTIN_CONFIG: ScramblerConfig = ScramblerConfig::from_yaml_str(DEFAULT_CONFIG_STR)
        .expect("error loading builtin puzzle table");
}

/// Settings that control how strictly moves are filtered.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Number of random proposals to try for each move before falling back to
    /// choosing from the allowed faces directly.
    pub retry_budget: u32,
    /// Number of preceding moves whose faces (and opposite faces) a new move
    /// may not use.
    pub window: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            retry_budget: DEFAULT_RETRY_BUDGET,
            window: DEFAULT_WINDOW,
        }
    }
}

/// Generator settings and the table of supported puzzles.
#[derive(Debug, Clone)]
pub struct ScramblerConfig {
    /// Generator settings shared by all puzzles.
    pub settings: GeneratorSettings,
    puzzles: BTreeMap<u32, Arc<Puzzle>>,
}

impl ScramblerConfig {
    pub(crate) fn new(settings: GeneratorSettings, puzzles: BTreeMap<u32, Arc<Puzzle>>) -> Self {
        Self { settings, puzzles }
    }

    /// Returns the built-in configuration, with puzzles from 2x2x2 to 5x5x5.
    pub fn builtin() -> &'static Self {
        &BUILTIN_CONFIG
    }

    /// Parses a complete configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, TableError> {
        serde_norway::from_str::<schema::ConfigFile>(s)?.into_config()
    }

    /// Loads the built-in configuration, then layers `user_file` (if any) and
    /// environment variables prefixed with [`ENV_PREFIX`] on top of it.
    ///
    /// A user file that defines `puzzles` replaces the built-in list of
    /// puzzles. A user file that only defines `generator` settings keeps it.
    pub fn load(user_file: Option<&Path>) -> Result<Self, TableError> {
        Self::load_with_env(user_file, None)
    }

    /// Same as [`Self::load()`], but reads environment variables from `env`
    /// instead of the process environment if it is `Some`.
    pub(crate) fn load_with_env(
        user_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, TableError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG_STR, CONFIG_FILE_FORMAT));

        if let Some(path) = user_file {
            log::debug!("loading puzzle table from {}", path.display());
            builder = builder.add_source(config::File::from(path).format(CONFIG_FILE_FORMAT));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        builder
            .build()?
            .try_deserialize::<schema::ConfigFile>()?
            .into_config()
    }

    /// Returns a copy of the configuration with different generator settings.
    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the puzzle with the given size.
    pub fn puzzle(&self, size: u32) -> Result<&Arc<Puzzle>, ScrambleError> {
        self.puzzles
            .get(&size)
            .ok_or(ScrambleError::UnsupportedPuzzleSize(size))
    }

    /// Returns all puzzles, in order of size.
    pub fn puzzles(&self) -> impl Iterator<Item = &Arc<Puzzle>> {
        self.puzzles.values()
    }

    /// Returns a scramble generator for the puzzle with the given size.
    pub fn generator(&self, size: u32) -> Result<ScrambleGenerator, ScrambleError> {
        let puzzle = Arc::clone(self.puzzle(size)?);
        Ok(ScrambleGenerator::new(puzzle, self.settings))
    }

    /// Generates a scramble of `move_count` moves for the puzzle with the given
    /// size, using `rng` for all random choices.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        size: u32,
        move_count: u32,
        rng: &mut R,
    ) -> Result<Scramble, ScrambleError> {
        self.generator(size)?.generate(move_count, rng)
    }

    /// Generates a scramble deterministically from `params`.
    pub fn scramble(&self, params: ScrambleParams) -> Result<SeededScramble, ScrambleError> {
        let generator = self.generator(params.puzzle)?;
        let puzzle = generator.puzzle();
        let move_count = params.length.resolve(puzzle.default_length);
        let scramble = generator.generate(move_count, &mut params.rng())?;
        Ok(SeededScramble {
            puzzle_name: puzzle.name.clone(),
            params,
            scramble,
        })
    }
}
