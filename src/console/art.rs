//! ASCII card faces, six lines each with a trailing newline.

use crate::cards::Rank;

const ACE: &str = "   _____
  |A _  |
  | ( ) |
  |(_'_)|
  |  |  |
  |____V|
";

const TWO: &str = "   _____
  |2    |
  |  o  |
  |     |
  |  o  |
  |____Z|
";

const THREE: &str = "   _____
  |3    |
  | o o |
  |     |
  |  o  |
  |____E|
";

const FOUR: &str = "   _____
  |4    |
  | o o |
  |     |
  | o o |
  |____h|
";

const FIVE: &str = "   _____
  |5    |
  | o o |
  |  o  |
  | o o |
  |____S|
";

const SIX: &str = "   _____
  |6    |
  | o o |
  | o o |
  | o o |
  |____6|
";

const SEVEN: &str = "   _____
  |7    |
  | o o |
  |o o o|
  | o o |
  |____7|
";

const EIGHT: &str = "   _____
  |8    |
  |o o o|
  | o o |
  |o o o|
  |____8|
";

const NINE: &str = "   _____
  |9    |
  |o o o|
  |o o o|
  |o o o|
  |____9|
";

const TEN: &str = "   _____
  |10   |
  |o o o|
  |o o o|
  |o o o|
  |___10|
";

const JACK: &str = "   _____
  |J  ww|
  | o {)|
  |o o% |
  | | % |
  |__%%[|
";

const QUEEN: &str = "   _____
  |Q  ww|
  | o {(|
  |o o%%|
  | |%%%|
  |_%%%O|
";

const KING: &str = "   _____
  |K  WW|
  | o {)|
  |o o%%|
  | |%%%|
  |_%%%>|
";

/// Back of a card, shown in place of the dealer's hole card.
pub const FACE_DOWN: &str = "   _____
  |     |
  |  J  |
  | JJJ |
  |  J  |
  |_____|
";

/// Line count of every face.
pub const FACE_HEIGHT: usize = 6;

pub fn card_face(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => ACE,
        Rank::Two => TWO,
        Rank::Three => THREE,
        Rank::Four => FOUR,
        Rank::Five => FIVE,
        Rank::Six => SIX,
        Rank::Seven => SEVEN,
        Rank::Eight => EIGHT,
        Rank::Nine => NINE,
        Rank::Ten => TEN,
        Rank::Jack => JACK,
        Rank::Queen => QUEEN,
        Rank::King => KING,
    }
}
