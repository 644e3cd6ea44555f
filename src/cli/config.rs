//! Search options shared across commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::search::{SearchConfig, TieBreak};

/// Flags that override a [`SearchConfig`], optionally loaded from a file
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON file with search settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed for tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to choose among equally good moves
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Disable the immediate-win cutoff
    #[arg(long)]
    pub no_shortcut: bool,
}

impl SearchArgs {
    /// Build the effective configuration: file values first, then flags.
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SearchConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(tie_break) = self.tie_break {
            config = config.with_tie_break(tie_break);
        }
        if self.no_shortcut {
            config = config.with_immediate_win_shortcut(false);
        }
        Ok(config)
    }
}
