//! blackjack-rs: single-player Blackjack against a fixed-policy dealer
//!
//! Goals:
//! - Hand totals with variable Ace scoring, recomputed from the cards on every draw
//! - A round state machine that only talks to injected collaborators: a card
//!   source, a decision source and a display sink
//! - Deterministic rounds for tests via scripted or seeded sources
//!
//! ## Quick start: play a scripted round
//! ```
//! use blackjack_rs::agents::{Decision, ScriptedDecisions};
//! use blackjack_rs::cards::parse_ranks;
//! use blackjack_rs::game::{Outcome, Round, RoundEvent};
//! use blackjack_rs::shoe::ScriptedShoe;
//!
//! // Player 10 5, dealer 10 7, player hits and draws a 10.
//! let shoe = ScriptedShoe::new(parse_ranks("10 5 10 7 10").unwrap()).unwrap();
//! let mut round = Round::new(shoe);
//! let mut events: Vec<RoundEvent> = Vec::new();
//! let outcome = round.play(&mut ScriptedDecisions::new([Decision::Hit]), &mut events);
//!
//! assert_eq!(outcome, Outcome::PlayerBust);
//! assert_eq!(round.dealer_hand().len(), 2);
//! ```
//!
//! ## Terminal game
//! ```sh
//! cargo run --bin blackjack-rs -- --rounds 3
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod console;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod session;
pub mod shoe;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
