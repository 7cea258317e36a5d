//! Agents: who decides whether the player hits or stays.
//!
//! The round controller only sees the `DecisionSource` trait. A source must
//! always come back with a valid `Decision`; anything that reads raw input
//! (see `console::PromptedPlayer`) validates and re-asks on its own side.

use crate::hand::Hand;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// The player's choice on each turn iteration.
///
/// ```
/// use blackjack_rs::agents::Decision;
///
/// assert_eq!("h".parse::<Decision>().unwrap(), Decision::Hit);
/// assert_eq!(" Stay ".parse::<Decision>().unwrap(), Decision::Stay);
/// assert!("x".parse::<Decision>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Hit,
    Stay,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Hit => "Hit",
            Decision::Stay => "Stay",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecisionParseError {
    #[error("invalid decision: '{0}'")]
    Invalid(String),
}

impl FromStr for Decision {
    type Err = DecisionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" | "HIT" => Ok(Decision::Hit),
            "S" | "STAY" => Ok(Decision::Stay),
            _ => Err(DecisionParseError::Invalid(s.to_string())),
        }
    }
}

/// Supplies the player's decisions.
pub trait DecisionSource {
    /// Called once per player-turn iteration with the player's current hand.
    /// Must not return until it has a valid decision.
    fn next_decision(&mut self, hand: &Hand) -> Decision;

    /// True once the source can no longer reach a real player, e.g. its input
    /// has ended. Decisions it still returns are fallbacks, not choices.
    fn input_closed(&self) -> bool {
        false
    }
}

impl<D: DecisionSource + ?Sized> DecisionSource for &mut D {
    fn next_decision(&mut self, hand: &Hand) -> Decision {
        (**self).next_decision(hand)
    }
    fn input_closed(&self) -> bool {
        (**self).input_closed()
    }
}

/// Replays queued decisions, then stays forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    queue: VecDeque<Decision>,
    asked: usize,
}

impl ScriptedDecisions {
    pub fn new<I>(decisions: I) -> Self
    where
        I: IntoIterator<Item = Decision>,
    {
        Self { queue: decisions.into_iter().collect(), asked: 0 }
    }

    /// How many times the round polled this source.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl DecisionSource for ScriptedDecisions {
    fn next_decision(&mut self, _hand: &Hand) -> Decision {
        self.asked += 1;
        self.queue.pop_front().unwrap_or(Decision::Stay)
    }
}

/// Automatic player that hits while its total is below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPlayer {
    threshold: u32,
}

impl ThresholdPlayer {
    pub const DEFAULT_THRESHOLD: u32 = 17;

    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for ThresholdPlayer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl DecisionSource for ThresholdPlayer {
    fn next_decision(&mut self, hand: &Hand) -> Decision {
        if hand.value().total < self.threshold {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_parse_is_case_insensitive() {
        assert_eq!("H".parse::<Decision>().unwrap(), Decision::Hit);
        assert_eq!("hit".parse::<Decision>().unwrap(), Decision::Hit);
        assert_eq!("s".parse::<Decision>().unwrap(), Decision::Stay);
        assert!(matches!("".parse::<Decision>(), Err(DecisionParseError::Invalid(_))));
        assert!("hs".parse::<Decision>().is_err());
    }

    #[test]
    fn scripted_decisions_fall_back_to_stay() {
        let hand = Hand::new();
        let mut d = ScriptedDecisions::new([Decision::Hit]);
        assert_eq!(d.next_decision(&hand), Decision::Hit);
        assert_eq!(d.next_decision(&hand), Decision::Stay);
        assert_eq!(d.next_decision(&hand), Decision::Stay);
        assert_eq!(d.asked(), 3);
    }

    #[test]
    fn threshold_player_hits_below_threshold() {
        let mut p = ThresholdPlayer::default();
        let low: Hand = "10 6".parse().unwrap();
        let high: Hand = "10 7".parse().unwrap();
        assert_eq!(p.next_decision(&low), Decision::Hit);
        assert_eq!(p.next_decision(&high), Decision::Stay);
    }
}
