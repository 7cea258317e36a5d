use std::fmt;
use std::str::FromStr;

/// Card ranks from Ace (1) to King (13). Suits play no part in Blackjack totals
/// and are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank in `1..=13`.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Map a rank number back to a `Rank`.
    ///
    /// ```
    /// use blackjack_rs::cards::Rank;
    ///
    /// assert_eq!(Rank::from_number(1).unwrap(), Rank::Ace);
    /// assert_eq!(Rank::from_number(12).unwrap(), Rank::Queen);
    /// assert!(Rank::from_number(14).is_err());
    /// ```
    pub fn from_number(n: u8) -> Result<Self, RankError> {
        match n {
            1..=13 => Ok(Self::ALL[usize::from(n - 1)]),
            _ => Err(RankError::OutOfRange(n)),
        }
    }

    /// Value before soft-Ace adjustment: Ace counts 11, face cards 10.
    pub const fn base_value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other as u32,
        }
    }

    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankError {
    #[error("rank number out of range 1..=13: {0}")]
    OutOfRange(u8),
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl TryFrom<u8> for Rank {
    type Error = RankError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Rank::from_number(n)
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" | "11" => Rank::Jack,
            "Q" | "12" => Rank::Queen,
            "K" | "13" => Rank::King,
            _ => return Err(RankError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Parse ranks separated by whitespace or commas.
///
/// ```
/// use blackjack_rs::cards::{parse_ranks, Rank};
///
/// let ranks = parse_ranks("A, 9 K").unwrap();
/// assert_eq!(ranks, vec![Rank::Ace, Rank::Nine, Rank::King]);
/// ```
pub fn parse_ranks(input: &str) -> Result<Vec<Rank>, RankError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Rank::from_str)
        .collect()
}
