use std::fmt;

/// A player taking part in the game. Two player games use [`Player::One`] and
/// [`Player::Two`], three player games add [`Player::Three`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Player {
    One,
    Two,
    Three,
}

impl Player {
    /// All players, in their natural order.
    pub const ALL: &'static [Player] = &[Player::One, Player::Two, Player::Three];

    /// The owner tag of this player, counting from 1.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
            Player::Three => 3,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
