use crate::cards::Rank;
use core::fmt;

/// Highest total a hand may reach without busting.
pub const BLACKJACK: u32 = 21;

/// Best total of a hand. Always derived from the ranks, never stored on the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct HandValue {
    pub total: u32,
    /// At least one Ace is still counted as 11.
    pub soft: bool,
}

impl HandValue {
    pub const fn is_bust(self) -> bool {
        self.total > BLACKJACK
    }

    pub const fn is_soft(self) -> bool {
        self.soft
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total)
    }
}

/// Evaluate a Blackjack hand.
///
/// Every Ace starts at 11 and face cards at 10. While the total is over 21 and
/// an Ace is still counted high, one Ace at a time drops to 1. If the hand is
/// still over 21 with every Ace low, it is bust.
///
/// ```
/// use blackjack_rs::cards::Rank;
/// use blackjack_rs::evaluator::evaluate;
///
/// let v = evaluate(&[Rank::Ace, Rank::Ace, Rank::Nine]);
/// assert_eq!(v.total, 21);
/// assert!(!v.is_bust());
///
/// let v = evaluate(&[Rank::Ten, Rank::Jack, Rank::Five]);
/// assert_eq!(v.total, 25);
/// assert!(v.is_bust());
/// ```
pub fn evaluate(ranks: &[Rank]) -> HandValue {
    let mut total: u32 = 0;
    let mut soft_aces: u32 = 0;
    for r in ranks {
        total += r.base_value();
        if r.is_ace() {
            soft_aces += 1;
        }
    }
    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    HandValue { total, soft: soft_aces > 0 }
}
