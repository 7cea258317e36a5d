//! Command-line and environment configuration for the terminal game.

use crate::agents::ThresholdPlayer;
use clap::Parser;
use std::ffi::OsStr;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "blackjack-rs", version, about = "Play Blackjack against the dealer")]
pub struct Cli {
    /// Seed for a reproducible shoe
    #[arg(long, env = "BLACKJACK_SEED")]
    pub seed: Option<u64>,

    /// Number of rounds to play
    #[arg(long, env = "BLACKJACK_ROUNDS", default_value_t = 1)]
    pub rounds: u32,

    /// Let the computer play, hitting below THRESHOLD
    #[arg(
        long,
        value_name = "THRESHOLD",
        num_args = 0..=1,
        default_missing_value = "17"
    )]
    pub auto: Option<u32>,

    /// Disable coloured output (also set by a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("at least one round must be played")]
    NoRounds,
    #[error("auto-play threshold must be between 2 and 21, got {0}")]
    Threshold(u32),
}

/// How the player's decisions are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    Prompt,
    Auto(ThresholdPlayer),
}

/// Validated settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub rounds: u32,
    pub player: PlayerMode,
    pub color: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        let player = match self.auto {
            None => PlayerMode::Prompt,
            Some(t) if (2..=21).contains(&t) => PlayerMode::Auto(ThresholdPlayer::new(t)),
            Some(t) => return Err(ConfigError::Threshold(t)),
        };
        let no_color = color_disabled(self.no_color, std::env::var_os("NO_COLOR").as_deref());
        Ok(Config { seed: self.seed, rounds: self.rounds, player, color: !no_color })
    }
}

/// Any non-empty `NO_COLOR` turns colour off, whatever its value.
fn color_disabled(flag: bool, no_color_env: Option<&OsStr>) -> bool {
    flag || no_color_env.is_some_and(|v| !v.is_empty())
}
