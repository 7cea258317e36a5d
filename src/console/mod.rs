//! Text frontend: card art, the hit-or-stay prompt, and a table that prints
//! round events.

pub mod art;
mod prompt;
mod table;

pub use prompt::{read_line, PromptedPlayer, HIT_OR_STAY, INVALID_DECISION};
pub use table::ConsoleTable;
