//! Errors raised while configuring a board.

use thiserror::Error;

/// Error returned when a board cannot be built for the requested player count and size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidConfiguration {
    /// Only two and three player boards exist.
    #[error("unsupported player count {0}, expected 2 or 3")]
    UnsupportedPlayerCount(usize),
    /// The size leaves no playable vertices, or the grid would not fit in memory.
    #[error("board size {size} is not supported for {players} players")]
    InvalidSize {
        /// Requested number of players.
        players: usize,
        /// Requested board size.
        size: usize,
    },
}
