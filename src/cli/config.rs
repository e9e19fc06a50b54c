//! Shared configuration handling for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::EngineConfig;

/// Options accepted by every engine-backed command
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON engine configuration (missing fields take defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducible Easy play
    #[arg(long)]
    pub seed: Option<u64>,
}

impl EngineArgs {
    /// Load the configured engine settings, applying a `--seed` override
    pub fn load(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}
