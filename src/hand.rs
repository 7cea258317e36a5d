use crate::cards::{parse_ranks, Rank};
use crate::evaluator::{evaluate, HandValue};
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("rank parse error: {0}")]
    RankParse(String),
}

/// Cards held by one party, in the order they were drawn.
///
/// Hands only grow: there is no way to remove or reorder a card once it is in.
///
/// ```
/// use blackjack_rs::cards::Rank;
/// use blackjack_rs::hand::Hand;
///
/// let hand = Hand::from_ranks([Rank::Ace, Rank::King]);
/// assert_eq!(hand.len(), 2);
/// assert_eq!(hand.value().total, 21);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        Self { cards: ranks.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Rank> {
        self.cards.get(index).copied()
    }

    /// Recomputed from every card on each call.
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    pub(crate) fn push(&mut self, rank: Rank) {
        self.cards.push(rank);
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks = parse_ranks(s).map_err(|e| HandError::RankParse(e.to_string()))?;
        Ok(Hand::from_ranks(ranks))
    }
}
