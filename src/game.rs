use crate::agents::{Decision, DecisionSource};
use crate::cards::Rank;
use crate::evaluator::HandValue;
use crate::hand::Hand;
use crate::shoe::CardSource;
use core::cmp::Ordering;
use log::{debug, info};

/// The dealer draws until reaching at least this total. There is no soft-17 exception.
pub const DEALER_STANDS_ON: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player,
    Dealer,
}

impl Seat {
    pub fn label(self) -> &'static str {
        match self {
            Seat::Player => "Player",
            Seat::Dealer => "Dealer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::PlayerBust,
        Outcome::DealerBust,
        Outcome::PlayerWin,
        Outcome::DealerWin,
        Outcome::Push,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::PlayerBust => "Player bust",
            Outcome::DealerBust => "Dealer bust",
            Outcome::PlayerWin => "Player wins",
            Outcome::DealerWin => "Dealer wins",
            Outcome::Push => "Push",
        }
    }

    /// Line announced to the player when the round ends.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerBust => "You busted! Your total is over 21. You lose.",
            Outcome::DealerBust => "Dealer busted! You win!",
            Outcome::PlayerWin => "You win!",
            Outcome::DealerWin => "Dealer wins!",
            Outcome::Push => "It's a tie!",
        }
    }

    pub fn player_wins(self) -> bool {
        matches!(self, Outcome::DealerBust | Outcome::PlayerWin)
    }

    pub fn dealer_wins(self) -> bool {
        matches!(self, Outcome::PlayerBust | Outcome::DealerWin)
    }
}

/// Something that happened during a round, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundEvent {
    /// Opening deal. `concealed` marks the dealer's hole card for display only.
    Dealt { seat: Seat, rank: Rank, concealed: bool },
    /// Player's total once the opening deal is complete.
    PlayerTotal { value: HandValue },
    /// A card drawn after the opening deal, with the new total.
    Drew { seat: Seat, rank: Rank, value: HandValue },
    Stayed { value: HandValue },
    /// Dealer's hole card turned face up at the start of the dealer turn.
    Revealed { rank: Rank, value: HandValue },
    Resolved(Outcome),
}

/// Receives round events for display. Nothing flows back into the round.
pub trait TableSink {
    fn show(&mut self, event: &RoundEvent);

    /// Called by sessions before each round starts: round `round` (1-based) of `rounds`.
    fn round_started(&mut self, _round: u32, _rounds: u32) {}
}

impl<T: TableSink + ?Sized> TableSink for &mut T {
    fn show(&mut self, event: &RoundEvent) {
        (**self).show(event)
    }
    fn round_started(&mut self, round: u32, rounds: u32) {
        (**self).round_started(round, rounds)
    }
}

impl TableSink for Vec<RoundEvent> {
    fn show(&mut self, event: &RoundEvent) {
        self.push(event.clone());
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl TableSink for Silent {
    fn show(&mut self, _event: &RoundEvent) {}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("action needs phase {expected:?}, round is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
}

/// Compare two final hands. A bust player loses before the dealer is considered.
///
/// ```
/// use blackjack_rs::game::{settle, Outcome};
/// use blackjack_rs::hand::Hand;
///
/// let player: Hand = "10 9".parse().unwrap();
/// let dealer: Hand = "10 6 9".parse().unwrap();
/// assert_eq!(settle(player.value(), dealer.value()), Outcome::DealerBust);
/// ```
pub fn settle(player: HandValue, dealer: HandValue) -> Outcome {
    if player.is_bust() {
        return Outcome::PlayerBust;
    }
    if dealer.is_bust() {
        return Outcome::DealerBust;
    }
    match dealer.total.cmp(&player.total) {
        Ordering::Greater => Outcome::DealerWin,
        Ordering::Less => Outcome::PlayerWin,
        Ordering::Equal => Outcome::Push,
    }
}

/// One round of Blackjack: `Dealing -> PlayerTurn -> DealerTurn -> Resolved`.
///
/// A round never leaves `Resolved`; play another round with a fresh `Round`.
///
/// ```
/// use blackjack_rs::agents::ScriptedDecisions;
/// use blackjack_rs::cards::parse_ranks;
/// use blackjack_rs::game::{Outcome, Round, Silent};
/// use blackjack_rs::shoe::ScriptedShoe;
///
/// let shoe = ScriptedShoe::new(parse_ranks("5 6 10 8").unwrap()).unwrap();
/// let mut round = Round::new(shoe);
/// let outcome = round.play(&mut ScriptedDecisions::default(), &mut Silent);
/// assert_eq!(outcome, Outcome::DealerWin);
/// ```
#[derive(Debug)]
pub struct Round<S> {
    shoe: S,
    phase: Phase,
    player: Hand,
    dealer: Hand,
    outcome: Option<Outcome>,
    history: Vec<RoundEvent>,
}

impl<S: CardSource> Round<S> {
    pub fn new(shoe: S) -> Self {
        Self {
            shoe,
            phase: Phase::Dealing,
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_value(&self) -> HandValue {
        self.player.value()
    }

    pub fn dealer_value(&self) -> HandValue {
        self.dealer.value()
    }

    /// Set once the round is resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn history(&self) -> &[RoundEvent] {
        &self.history
    }

    pub fn shoe(&self) -> &S {
        &self.shoe
    }

    pub fn into_shoe(self) -> S {
        self.shoe
    }

    /// Run the whole round with the given collaborators and return its outcome.
    /// Picks up from whatever phase the round is in.
    pub fn play(
        &mut self,
        decisions: &mut dyn DecisionSource,
        sink: &mut dyn TableSink,
    ) -> Outcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        if self.phase == Phase::Dealing {
            self.deal_opening(sink);
        }
        while self.phase == Phase::PlayerTurn {
            let decision = decisions.next_decision(&self.player);
            debug!("player decision: {decision}");
            match decision {
                Decision::Hit => {
                    if let Some(outcome) = self.draw_player(sink) {
                        return outcome;
                    }
                }
                Decision::Stay => self.stand(sink),
            }
        }
        self.run_dealer(sink)
    }

    /// Deal two cards to the player, then two to the dealer.
    pub fn deal(&mut self, sink: &mut dyn TableSink) -> Result<HandValue, RoundError> {
        self.expect_phase(Phase::Dealing)?;
        Ok(self.deal_opening(sink))
    }

    /// Draw one card for the player. A bust resolves the round immediately.
    pub fn hit(&mut self, sink: &mut dyn TableSink) -> Result<HandValue, RoundError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.draw_player(sink);
        Ok(self.player.value())
    }

    /// End the player's turn.
    pub fn stay(&mut self, sink: &mut dyn TableSink) -> Result<HandValue, RoundError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.stand(sink);
        Ok(self.player.value())
    }

    /// Reveal the hole card, draw to the dealer rule and resolve the round.
    pub fn play_dealer(&mut self, sink: &mut dyn TableSink) -> Result<Outcome, RoundError> {
        self.expect_phase(Phase::DealerTurn)?;
        Ok(self.run_dealer(sink))
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RoundError> {
        if self.phase != expected {
            return Err(RoundError::WrongPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    fn emit(&mut self, sink: &mut dyn TableSink, event: RoundEvent) {
        sink.show(&event);
        self.history.push(event);
    }

    fn enter(&mut self, phase: Phase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn deal_opening(&mut self, sink: &mut dyn TableSink) -> HandValue {
        self.deal_card(sink, Seat::Player, false);
        self.deal_card(sink, Seat::Player, false);
        let value = self.player.value();
        self.emit(sink, RoundEvent::PlayerTotal { value });

        self.deal_card(sink, Seat::Dealer, false);
        self.deal_card(sink, Seat::Dealer, true);
        self.enter(Phase::PlayerTurn);
        value
    }

    fn deal_card(&mut self, sink: &mut dyn TableSink, seat: Seat, concealed: bool) {
        let rank = self.shoe.draw();
        match seat {
            Seat::Player => self.player.push(rank),
            Seat::Dealer => self.dealer.push(rank),
        }
        debug!("dealt {} {rank}{}", seat.label(), if concealed { " (face down)" } else { "" });
        self.emit(sink, RoundEvent::Dealt { seat, rank, concealed });
    }

    fn draw_player(&mut self, sink: &mut dyn TableSink) -> Option<Outcome> {
        let rank = self.shoe.draw();
        self.player.push(rank);
        let value = self.player.value();
        debug!("player drew {rank}, total {}", value.total);
        self.emit(sink, RoundEvent::Drew { seat: Seat::Player, rank, value });
        if value.is_bust() {
            return Some(self.finish(sink, Outcome::PlayerBust));
        }
        None
    }

    fn stand(&mut self, sink: &mut dyn TableSink) {
        let value = self.player.value();
        self.emit(sink, RoundEvent::Stayed { value });
        self.enter(Phase::DealerTurn);
    }

    fn run_dealer(&mut self, sink: &mut dyn TableSink) -> Outcome {
        let mut value = self.dealer.value();
        if let Some(rank) = self.dealer.get(1) {
            self.emit(sink, RoundEvent::Revealed { rank, value });
        }
        while value.total < DEALER_STANDS_ON {
            let rank = self.shoe.draw();
            self.dealer.push(rank);
            value = self.dealer.value();
            debug!("dealer drew {rank}, total {}", value.total);
            self.emit(sink, RoundEvent::Drew { seat: Seat::Dealer, rank, value });
        }
        debug!("dealer finished on {}", value.total);
        let outcome = settle(self.player.value(), value);
        self.finish(sink, outcome)
    }

    fn finish(&mut self, sink: &mut dyn TableSink, outcome: Outcome) -> Outcome {
        self.enter(Phase::Resolved);
        self.outcome = Some(outcome);
        if outcome == Outcome::PlayerBust {
            info!("round resolved: {} (player {})", outcome.label(), self.player.value());
        } else {
            info!(
                "round resolved: {} (player {}, dealer {})",
                outcome.label(),
                self.player.value(),
                self.dealer.value()
            );
        }
        self.emit(sink, RoundEvent::Resolved(outcome));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::ScriptedDecisions;
    use crate::cards::parse_ranks;
    use crate::shoe::ScriptedShoe;

    fn mk_round(cards: &str) -> Round<ScriptedShoe> {
        Round::new(ScriptedShoe::new(parse_ranks(cards).unwrap()).unwrap())
    }

    #[test]
    fn deal_order_is_player_player_dealer_dealer() {
        let mut r = mk_round("2 3 4 5");
        r.deal(&mut Silent).unwrap();
        assert_eq!(r.player_hand().as_slice(), &[Rank::Two, Rank::Three]);
        assert_eq!(r.dealer_hand().as_slice(), &[Rank::Four, Rank::Five]);
        assert_eq!(r.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn only_the_dealer_second_card_is_concealed() {
        let mut r = mk_round("2 3 4 5");
        let mut events: Vec<RoundEvent> = Vec::new();
        r.deal(&mut events).unwrap();
        let concealed: Vec<bool> = events
            .iter()
            .filter_map(|e| match e {
                RoundEvent::Dealt { concealed, .. } => Some(*concealed),
                _ => None,
            })
            .collect();
        assert_eq!(concealed, vec![false, false, false, true]);
    }

    #[test]
    fn steps_out_of_order_are_rejected() {
        let mut r = mk_round("10 9 10 8");
        assert_eq!(
            r.hit(&mut Silent),
            Err(RoundError::WrongPhase { expected: Phase::PlayerTurn, actual: Phase::Dealing })
        );
        r.deal(&mut Silent).unwrap();
        assert!(r.deal(&mut Silent).is_err());
        assert!(r.play_dealer(&mut Silent).is_err());
        r.stay(&mut Silent).unwrap();
        assert_eq!(r.play_dealer(&mut Silent).unwrap(), Outcome::PlayerWin);
        assert!(matches!(
            r.stay(&mut Silent),
            Err(RoundError::WrongPhase { actual: Phase::Resolved, .. })
        ));
    }

    #[test]
    fn hit_into_bust_resolves_round() {
        let mut r = mk_round("10 5 10 7 10");
        r.deal(&mut Silent).unwrap();
        let v = r.hit(&mut Silent).unwrap();
        assert!(v.is_bust());
        assert_eq!(r.phase(), Phase::Resolved);
        assert_eq!(r.outcome(), Some(Outcome::PlayerBust));
    }

    #[test]
    fn play_on_resolved_round_returns_same_outcome() {
        let mut r = mk_round("10 9 10 7");
        let mut d = ScriptedDecisions::default();
        let first = r.play(&mut d, &mut Silent);
        let second = r.play(&mut d, &mut Silent);
        assert_eq!(first, Outcome::PlayerWin);
        assert_eq!(first, second);
        assert_eq!(d.asked(), 1);
    }

    #[test]
    fn dealer_stands_on_soft_seventeen() {
        let mut r = mk_round("10 8 A 6 5");
        let outcome = r.play(&mut ScriptedDecisions::default(), &mut Silent);
        assert_eq!(r.dealer_hand().len(), 2);
        assert_eq!(r.dealer_value().total, 17);
        assert_eq!(outcome, Outcome::PlayerWin);
    }

    #[test]
    fn settle_compares_totals() {
        let v = |s: &str| s.parse::<Hand>().unwrap().value();
        assert_eq!(settle(v("10 8"), v("10 9")), Outcome::DealerWin);
        assert_eq!(settle(v("10 9"), v("10 8")), Outcome::PlayerWin);
        assert_eq!(settle(v("10 8"), v("9 9")), Outcome::Push);
        assert_eq!(settle(v("10 8 5"), v("10 6 9")), Outcome::PlayerBust);
    }

    struct Capture(std::sync::Mutex<Vec<String>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }
        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }
        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn bust_resolution_logs_only_the_player_total() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Info);

        let mut r = mk_round("10 9 10 7 10 4");
        let mut d = ScriptedDecisions::new([Decision::Hit]);
        assert_eq!(r.play(&mut d, &mut Silent), Outcome::PlayerBust);
        assert_eq!(r.dealer_hand().len(), 2);

        let lines = CAPTURE.0.lock().unwrap();
        let resolved: Vec<&String> =
            lines.iter().filter(|l| l.starts_with("round resolved: Player bust")).collect();
        assert!(resolved.iter().any(|l| l.contains("player 29")));
        assert!(resolved.iter().all(|l| !l.contains("dealer")));
    }

    #[test]
    fn outcome_winner_flags() {
        for o in Outcome::ALL {
            assert!(!(o.player_wins() && o.dealer_wins()));
        }
        assert!(!Outcome::Push.player_wins() && !Outcome::Push.dealer_wins());
    }
}
