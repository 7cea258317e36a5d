//! Several independent rounds played back to back from one shoe.

use crate::agents::DecisionSource;
use crate::game::{Outcome, Round, TableSink};
use crate::shoe::CardSource;
use log::{info, warn};

/// Running count of round results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_busts: u32,
    pub dealer_busts: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub pushes: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        let slot = match outcome {
            Outcome::PlayerBust => &mut self.player_busts,
            Outcome::DealerBust => &mut self.dealer_busts,
            Outcome::PlayerWin => &mut self.player_wins,
            Outcome::DealerWin => &mut self.dealer_wins,
            Outcome::Push => &mut self.pushes,
        };
        *slot += 1;
    }

    pub fn rounds(&self) -> u32 {
        self.player_busts + self.dealer_busts + self.player_wins + self.dealer_wins + self.pushes
    }

    /// Rounds the player won, by dealer bust or higher total.
    pub fn won(&self) -> u32 {
        self.dealer_busts + self.player_wins
    }

    /// Rounds the player lost, by own bust or lower total.
    pub fn lost(&self) -> u32 {
        self.player_busts + self.dealer_wins
    }
}

/// Play `rounds` rounds, each with fresh hands, and count the results.
///
/// Stops after the current round once the decision source reports its input
/// closed, so fallback decisions never carry a session.
///
/// ```
/// use blackjack_rs::agents::ThresholdPlayer;
/// use blackjack_rs::game::Silent;
/// use blackjack_rs::session::play_rounds;
/// use blackjack_rs::shoe::Shoe;
///
/// let mut shoe = Shoe::seeded(9);
/// let tally = play_rounds(5, &mut shoe, &mut ThresholdPlayer::default(), &mut Silent);
/// assert_eq!(tally.rounds(), 5);
/// ```
pub fn play_rounds<S: CardSource>(
    rounds: u32,
    shoe: &mut S,
    decisions: &mut dyn DecisionSource,
    sink: &mut dyn TableSink,
) -> Tally {
    let mut tally = Tally::default();
    for n in 1..=rounds {
        sink.round_started(n, rounds);
        let mut round = Round::new(&mut *shoe);
        let outcome = round.play(decisions, sink);
        tally.record(outcome);
        if decisions.input_closed() {
            warn!("player input closed, ending session after round {n} of {rounds}");
            break;
        }
    }
    info!("session finished: {} won, {} lost, {} pushed", tally.won(), tally.lost(), tally.pushes);
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::ScriptedDecisions;
    use crate::cards::parse_ranks;
    use crate::game::Silent;
    use crate::shoe::ScriptedShoe;

    #[test]
    fn tally_counts_each_outcome() {
        let mut t = Tally::default();
        for o in Outcome::ALL {
            t.record(o);
        }
        t.record(Outcome::Push);
        assert_eq!(t.rounds(), 6);
        assert_eq!(t.won(), 2);
        assert_eq!(t.lost(), 2);
        assert_eq!(t.pushes, 2);
    }

    #[test]
    fn rounds_share_the_shoe_but_not_hands() {
        // Each round: player 10 9, dealer 10 8 -> player wins with 19.
        let mut shoe = ScriptedShoe::new(parse_ranks("10 9 10 8").unwrap()).unwrap();
        let mut d = ScriptedDecisions::default();
        let tally = play_rounds(3, &mut shoe, &mut d, &mut Silent);
        assert_eq!(tally.player_wins, 3);
        assert_eq!(shoe.drawn(), 12);
    }

    #[derive(Debug, Default)]
    struct HangsUp {
        asked: u32,
    }

    impl DecisionSource for HangsUp {
        fn next_decision(&mut self, _hand: &crate::hand::Hand) -> crate::agents::Decision {
            self.asked += 1;
            crate::agents::Decision::Stay
        }
        fn input_closed(&self) -> bool {
            self.asked > 0
        }
    }

    #[test]
    fn closed_input_ends_session_after_current_round() {
        let mut shoe = ScriptedShoe::new(parse_ranks("10 9 10 8").unwrap()).unwrap();
        let mut d = HangsUp::default();
        let tally = play_rounds(50, &mut shoe, &mut d, &mut Silent);
        assert_eq!(tally.rounds(), 1);
        assert_eq!(d.asked, 1);
        assert_eq!(shoe.drawn(), 4);
    }
}
