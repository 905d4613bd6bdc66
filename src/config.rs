//! Game configuration.

use crate::error::ConfigurationError;
use crate::games::tictactoe::{DEFAULT_SIZE, MIN_SIZE, Player, ResolutionOrder};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who opens the game.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FirstMover {
    /// Coin flip, once per game.
    #[default]
    Random,
    /// The human always opens.
    Human,
    /// The computer always opens.
    Computer,
}

impl FirstMover {
    /// Picks the opening player; `Random` flips a fair coin on every call.
    #[instrument]
    pub fn resolve(self) -> Player {
        match self {
            FirstMover::Random => {
                if rand::random::<bool>() {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
            FirstMover::Human => Player::Human,
            FirstMover::Computer => Player::Computer,
        }
    }
}

/// Configuration for one game instance.
///
/// Missing fields in a TOML file fall back to a 3×3 board, a random first
/// mover and win-before-tie resolution.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board dimension.
    #[serde(default = "default_size")]
    size: usize,

    /// Who opens the game.
    #[serde(default)]
    first_mover: FirstMover,

    /// How a move that both fills the board and completes a line is scored.
    #[serde(default)]
    resolution: ResolutionOrder,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

impl GameConfig {
    /// Creates a configuration for a board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Rejects boards too small to have meaningful lines.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.size < MIN_SIZE {
            return Err(ConfigurationError::new(format!(
                "Board size must be at least {}, got {}",
                MIN_SIZE, self.size
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            first_mover: FirstMover::default(),
            resolution: ResolutionOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.size(), 3);
        assert_eq!(*config.first_mover(), FirstMover::Random);
        assert_eq!(*config.resolution(), ResolutionOrder::WinFirst);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_sizes_rejected() {
        for size in [0, 1, 2] {
            assert!(GameConfig::new(size).validate().is_err());
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("size = 4").unwrap();
        assert_eq!(*config.size(), 4);
        assert_eq!(*config.first_mover(), FirstMover::Random);

        let config: GameConfig =
            toml::from_str("first_mover = \"computer\"\nresolution = \"tie-first\"").unwrap();
        assert_eq!(*config.size(), 3);
        assert_eq!(*config.first_mover(), FirstMover::Computer);
        assert_eq!(*config.resolution(), ResolutionOrder::TieFirst);
    }

    #[test]
    fn test_fixed_first_mover() {
        assert_eq!(FirstMover::Human.resolve(), Player::Human);
        assert_eq!(FirstMover::Computer.resolve(), Player::Computer);
    }

    #[test]
    fn test_random_first_mover_picks_both_sides() {
        let picks: Vec<_> = (0..64).map(|_| FirstMover::Random.resolve()).collect();
        assert!(picks.contains(&Player::Human));
        assert!(picks.contains(&Player::Computer));
    }
}
