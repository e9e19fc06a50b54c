//! Engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Position, move_priority};

/// Sampling weights for the Easy policy, by cell class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasyWeights {
    pub center: u32,
    pub corner: u32,
    pub edge: u32,
}

impl EasyWeights {
    pub fn weight_for(&self, pos: Position) -> u32 {
        match move_priority(pos) {
            3 => self.center,
            2 => self.corner,
            _ => self.edge,
        }
    }
}

impl Default for EasyWeights {
    fn default() -> Self {
        Self {
            center: 3,
            corner: 2,
            edge: 1,
        }
    }
}

/// Configuration for move selection.
///
/// # Examples
///
/// ```
/// use noughts::config::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(7).with_medium_depth(2);
/// assert_eq!(config.hard_depth, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Remaining-depth budget below each root move for Medium
    pub medium_depth: u8,
    /// Remaining-depth budget below each root move for Hard
    pub hard_depth: u8,
    pub easy_weights: EasyWeights,
    /// Seed for the Easy sampler; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn with_medium_depth(mut self, depth: u8) -> Self {
        self.medium_depth = depth;
        self
    }

    pub fn with_hard_depth(mut self, depth: u8) -> Self {
        self.hard_depth = depth;
        self
    }

    pub fn with_easy_weights(mut self, weights: EasyWeights) -> Self {
        self.easy_weights = weights;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for zero search budgets
    /// or Easy weights that are all zero.
    pub fn validate(&self) -> crate::Result<()> {
        if self.medium_depth == 0 || self.hard_depth == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "search depths must be at least 1 (medium={}, hard={})",
                    self.medium_depth, self.hard_depth
                ),
            });
        }
        let w = self.easy_weights;
        if w.center == 0 && w.corner == 0 && w.edge == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "easy weights must not all be zero".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config; missing fields take defaults.
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            medium_depth: 4,
            hard_depth: 8,
            easy_weights: EasyWeights::default(),
            seed: None,
        }
    }
}
