//! Configuration for move selection.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How to choose among moves with equal minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Any optimal move, drawn uniformly
    #[default]
    Random,
    /// The first optimal move in row-major order
    RowMajor,
}

/// Configuration for a [`Searcher`](super::Searcher).
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::search::{SearchConfig, TieBreak};
///
/// let config = SearchConfig::new()
///     .with_tie_break(TieBreak::RowMajor)
///     .with_seed(7);
/// assert!(config.immediate_win_shortcut);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Tie-break among equally valued moves
    pub tie_break: TieBreak,
    /// Cut a subtree off as soon as the mover can complete a line
    pub immediate_win_shortcut: bool,
    /// Seed for the random tie-break; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Random tie-break, shortcut enabled, unseeded
    pub fn new() -> Self {
        Self {
            tie_break: TieBreak::default(),
            immediate_win_shortcut: true,
            seed: None,
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_immediate_win_shortcut(mut self, enabled: bool) -> Self {
        self.immediate_win_shortcut = enabled;
        self
    }

    /// Set the random seed for deterministic tie-breaking.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this type.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read search config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
