//! Card sources. The shoe is conceptually infinite: every draw is replaced, so
//! nothing is ever depleted.

use crate::cards::Rank;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Anything that can hand out the next card of a round.
pub trait CardSource {
    fn draw(&mut self) -> Rank;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Rank {
        (**self).draw()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShoeError {
    #[error("scripted shoe needs at least one card")]
    Empty,
}

/// Random shoe drawing uniformly over the 13 ranks with replacement.
///
/// ```
/// use blackjack_rs::shoe::{CardSource, Shoe};
///
/// let mut a = Shoe::seeded(42);
/// let mut b = Shoe::seeded(42);
/// assert_eq!(a.draw(), b.draw());
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Shoe with a fixed seed for reproducible rounds.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Shoe seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { rng: ChaCha8Rng::from_seed(seed) }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Rank {
        let idx = self.rng.random_range(0..Rank::ALL.len());
        Rank::ALL[idx]
    }
}

/// Replays a fixed sequence of ranks, starting over once it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedShoe {
    cards: Vec<Rank>,
    next: usize,
}

impl ScriptedShoe {
    pub fn new(cards: Vec<Rank>) -> Result<Self, ShoeError> {
        if cards.is_empty() {
            return Err(ShoeError::Empty);
        }
        Ok(Self { cards, next: 0 })
    }

    /// Number of cards handed out so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl CardSource for ScriptedShoe {
    fn draw(&mut self) -> Rank {
        let card = self.cards[self.next % self.cards.len()];
        self.next += 1;
        card
    }
}
