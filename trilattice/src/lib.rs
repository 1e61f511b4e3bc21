//! Board model for connection games played on a triangular lattice.
//!
//! Two or three players take turns claiming vertices of the lattice. Each player owns
//! a pair of opposite sides of the board from the start, and the derived lattice
//! structure (vertices, edges and triangular faces) is available for drawing the board
//! and highlighting the groups a player has connected.
//!
//! [`game::BoardModel`] owns all state and notifies registered observers after every
//! change. The board shape and turn order come from a [`geometry::Variant`], which is
//! either the two player [`geometry::Rhombus`] or the three player
//! [`geometry::Hexagon`]. [`layout`] maps the lattice onto a pixel canvas for front ends
//! that need to draw it or resolve clicks.
//!
//! ```
//! use trilattice::{board::{Coordinate, Player}, game::BoardModel};
//!
//! let mut model = BoardModel::new();
//! model.reset(2, 10).unwrap();
//! assert!(model.put(Coordinate::new(5, 5)));
//! assert_eq!(model.get(Coordinate::new(5, 5)), Some(Player::One));
//! assert_eq!(model.next_player(), Player::Two);
//! ```

pub mod board;
pub mod game;
pub mod geometry;
pub mod layout;
