use crate::agents::{Decision, DecisionSource};
use crate::hand::Hand;
use log::{debug, warn};
use std::io::{BufRead, Write};

pub const HIT_OR_STAY: &str = "Do you want to hit (H) or stay (S)?";
pub const INVALID_DECISION: &str = "Invalid input. Please enter 'H' to hit or 'S' to stay.";

/// Read one line, trimmed. `None` on end of input or a read error.
pub fn read_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            warn!("failed to read input: {e}");
            None
        }
    }
}

/// Decision source that asks a person at the terminal.
///
/// Keeps asking until it reads `H` or `S` (any case). If input ends first, the
/// player stays and the source reports [`DecisionSource::input_closed`].
///
/// ```
/// use blackjack_rs::agents::{Decision, DecisionSource};
/// use blackjack_rs::console::PromptedPlayer;
/// use blackjack_rs::hand::Hand;
/// use std::io::Cursor;
///
/// let mut player = PromptedPlayer::new(Cursor::new("maybe\nh\n"), Vec::new());
/// assert_eq!(player.next_decision(&Hand::new()), Decision::Hit);
/// ```
#[derive(Debug)]
pub struct PromptedPlayer<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> PromptedPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, closed: false }
    }

    /// Input has ended or failed; no further decisions can be read.
    pub fn closed(&self) -> bool {
        self.closed
    }

    fn next_line(&mut self) -> Option<String> {
        let line = read_line(&mut self.input);
        if line.is_none() {
            self.closed = true;
        }
        line
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Block until the player presses Enter. Returns false once input has ended.
    pub fn wait_for_enter(&mut self) -> bool {
        self.next_line().is_some()
    }

    fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{line}").and_then(|_| self.output.flush()) {
            warn!("failed to write prompt: {e}");
        }
    }
}

impl<R: BufRead, W: Write> DecisionSource for PromptedPlayer<R, W> {
    fn next_decision(&mut self, _hand: &Hand) -> Decision {
        self.say(HIT_OR_STAY);
        loop {
            let Some(line) = self.next_line() else {
                warn!("input closed while waiting for a decision, staying");
                return Decision::Stay;
            };
            match line.parse::<Decision>() {
                Ok(decision) => return decision,
                Err(e) => {
                    debug!("{e}");
                    self.say(INVALID_DECISION);
                }
            }
        }
    }

    fn input_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(input: &str) -> PromptedPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        PromptedPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reprompts_until_valid() {
        let mut p = player("x\n\nhit me\ns\n");
        assert_eq!(p.next_decision(&Hand::new()), Decision::Stay);
        let (_, out) = p.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(HIT_OR_STAY).count(), 1);
        assert_eq!(out.matches(INVALID_DECISION).count(), 3);
    }

    #[test]
    fn lowercase_and_padding_accepted() {
        let mut p = player("  h  \n");
        assert_eq!(p.next_decision(&Hand::new()), Decision::Hit);
    }

    #[test]
    fn closed_input_stays() {
        let mut p = player("");
        assert!(!p.input_closed());
        assert_eq!(p.next_decision(&Hand::new()), Decision::Stay);
        assert!(p.closed());
        assert!(p.input_closed());
        assert!(!p.wait_for_enter());
    }

    #[test]
    fn input_ending_mid_prompt_is_recorded() {
        let mut p = player("h\nnope\n");
        assert_eq!(p.next_decision(&Hand::new()), Decision::Hit);
        assert!(!p.closed());
        assert_eq!(p.next_decision(&Hand::new()), Decision::Stay);
        assert!(p.closed());
    }
}
