use super::art::{card_face, FACE_DOWN};
use crate::game::{Outcome, RoundEvent, Seat, TableSink};
use crate::session::Tally;
use crossterm::style::Stylize;
use log::warn;
use std::io::{self, Write};

/// Prints a round as text, one event at a time.
///
/// Write failures do not interrupt the round: the first one is kept and
/// returned by [`ConsoleTable::finish`], and later events are skipped.
#[derive(Debug)]
pub struct ConsoleTable<W> {
    out: W,
    color: bool,
    player_cards: usize,
    dealer_cards: usize,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleTable<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false, player_cards: 0, dealer_cards: 0, error: None }
    }

    /// Colour the result line with terminal escape codes.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Blackjack!")?;
        writeln!(self.out, "Press Enter to start...")?;
        self.out.flush()
    }

    pub fn summary(&mut self, tally: &Tally) -> io::Result<()> {
        writeln!(
            self.out,
            "Rounds played: {}. You won {}, lost {}, tied {}.",
            tally.rounds(),
            tally.won(),
            tally.lost(),
            tally.pushes
        )?;
        self.out.flush()
    }

    /// Hand back the writer, or the first write error seen while showing events.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn result_line(&self, outcome: Outcome) -> String {
        let msg = outcome.message();
        if !self.color {
            return msg.to_string();
        }
        if outcome.player_wins() {
            msg.green().bold().to_string()
        } else if outcome.dealer_wins() {
            msg.red().bold().to_string()
        } else {
            msg.yellow().bold().to_string()
        }
    }

    fn render(&mut self, event: &RoundEvent) -> io::Result<()> {
        match event {
            RoundEvent::Dealt { seat: Seat::Player, rank, .. } => {
                self.player_cards += 1;
                let nth = ordinal(self.player_cards);
                writeln!(self.out, "Your {nth} card is:")?;
                write!(self.out, "{}", card_face(*rank))?;
            }
            RoundEvent::Dealt { seat: Seat::Dealer, rank, concealed } => {
                self.dealer_cards += 1;
                let nth = ordinal(self.dealer_cards);
                writeln!(self.out, "The dealer's {nth} card is:")?;
                if *concealed {
                    write!(self.out, "{FACE_DOWN}")?;
                    writeln!(self.out, "The dealer's {nth} card is hidden.")?;
                } else {
                    write!(self.out, "{}", card_face(*rank))?;
                }
            }
            RoundEvent::PlayerTotal { value } => {
                writeln!(self.out, "Your total is: {value}")?;
            }
            RoundEvent::Drew { seat: Seat::Player, rank, value } => {
                self.player_cards += 1;
                writeln!(self.out, "You drew:")?;
                write!(self.out, "{}", card_face(*rank))?;
                writeln!(self.out, "Your new total is: {value}")?;
            }
            RoundEvent::Drew { seat: Seat::Dealer, rank, value } => {
                self.dealer_cards += 1;
                writeln!(self.out, "Dealer draws:")?;
                write!(self.out, "{}", card_face(*rank))?;
                writeln!(self.out, "Dealer's new total is: {value}")?;
            }
            RoundEvent::Stayed { value } => {
                writeln!(self.out, "You chose to stay. Your final total is: {value}")?;
            }
            RoundEvent::Revealed { rank, value } => {
                writeln!(self.out, "The dealer's second card is:")?;
                write!(self.out, "{}", card_face(*rank))?;
                writeln!(self.out, "Dealer's total is: {value}")?;
            }
            RoundEvent::Resolved(outcome) => {
                let line = self.result_line(*outcome);
                writeln!(self.out, "{line}")?;
                self.player_cards = 0;
                self.dealer_cards = 0;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> ConsoleTable<W> {
    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            warn!("failed to write to the table: {e}");
            self.error = Some(e);
        }
    }
}

impl<W: Write> TableSink for ConsoleTable<W> {
    fn show(&mut self, event: &RoundEvent) {
        if self.error.is_some() {
            return;
        }
        let result = self.render(event);
        self.record(result);
    }

    fn round_started(&mut self, round: u32, rounds: u32) {
        if self.error.is_some() || rounds <= 1 {
            return;
        }
        let result = writeln!(self.out, "\n--- Round {round} of {rounds} ---")
            .and_then(|_| self.out.flush());
        self.record(result);
    }
}

fn ordinal(n: usize) -> &'static str {
    match n {
        1 => "first",
        2 => "second",
        3 => "third",
        _ => "next",
    }
}
