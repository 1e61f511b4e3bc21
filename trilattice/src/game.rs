//! The game as a whole: a [`BoardModel`] that owns the current [`Position`] and tells
//! registered [`BoardObserver`]s about every change.
//!
//! The model starts out uninitialized. [`BoardModel::reset`] is the only way to start a
//! game, and may be called again at any time to replace the game in progress. Every
//! other operation panics until the first successful reset.
use std::fmt;

use log::{debug, warn};

use crate::{
    board::{Coordinate, Player},
    geometry::{Edge, Face, Variant},
};

pub use self::position::Position;
pub use crate::geometry::InvalidConfiguration;

mod position;

/// Receives a notification after each change to a [`BoardModel`], with read-only access
/// to the new position.
///
/// Auto-implemented for closures taking a `&Position`.
pub trait BoardObserver {
    /// Called synchronously once the change is complete.
    fn notify(&mut self, position: &Position);
}

impl<F: FnMut(&Position)> BoardObserver for F {
    fn notify(&mut self, position: &Position) {
        self(position)
    }
}

/// Handle returned by [`BoardModel::subscribe`], used to unsubscribe again.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObserverId(usize);

/// Owns the game state and applies moves to it.
pub struct BoardModel {
    /// The game in progress. `None` until the first successful reset.
    position: Option<Position>,

    /// Registered observers, in subscription order.
    observers: Vec<(ObserverId, Box<dyn BoardObserver>)>,

    /// Id to hand out to the next subscriber.
    next_id: usize,
}

impl BoardModel {
    /// Create an uninitialized model with no observers.
    pub fn new() -> Self {
        Self {
            position: None,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. Observers are notified in the order they subscribed.
    pub fn subscribe<O: BoardObserver + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(other, _)| *other == id) {
            Some(idx) => {
                self.observers.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns true once a game has been started with [`BoardModel::reset`].
    pub fn is_ready(&self) -> bool {
        self.position.is_some()
    }

    /// Get the game in progress, if any.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    fn ready(&self) -> &Position {
        match self.position {
            Some(ref position) => position,
            None => panic!("board model used before the first reset"),
        }
    }

    fn ready_mut(&mut self) -> &mut Position {
        match self.position {
            Some(ref mut position) => position,
            None => panic!("board model used before the first reset"),
        }
    }

    /// Start a new game for the given number of players on a board of the given size.
    /// If no such board exists, returns an error and keeps the current game unchanged.
    pub fn reset(&mut self, players: usize, size: usize) -> Result<(), InvalidConfiguration> {
        let position = Variant::new(players, size)
            .and_then(|variant| {
                Position::try_new(variant)
                    .ok_or(InvalidConfiguration::InvalidSize { players, size })
            })
            .map_err(|err| {
                warn!("rejected board configuration: {}", err);
                err
            })?;
        debug!("starting a {} player game on a board of size {}", players, size);
        self.position = Some(position);
        self.notify();
        Ok(())
    }

    /// Get the owner of the given cell, or `None` if it is empty. Panics if the
    /// coordinate is outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<Player> {
        self.ready().get(coord)
    }

    /// Claim the vertex for the player whose turn it is. Returns false, without notifying
    /// anyone, if the vertex was already owned. Panics if the coordinate is not a vertex.
    pub fn put(&mut self, coord: Coordinate) -> bool {
        let placed = self.ready_mut().put(coord);
        if placed {
            self.notify();
        }
        placed
    }

    /// Take back the most recent move. Returns the vertex that was cleared, or `None`,
    /// without notifying anyone, if no moves have been made.
    pub fn undo(&mut self) -> Option<Coordinate> {
        let undone = self.ready_mut().undo();
        if undone.is_some() {
            self.notify();
        }
        undone
    }

    /// The player whose turn it is.
    pub fn next_player(&self) -> Player {
        self.ready().next_player()
    }

    /// Vertices claimed so far, oldest first.
    pub fn history(&self) -> &[Coordinate] {
        self.ready().history()
    }

    /// Returns true if the coordinate is a vertex of the current board.
    pub fn is_vertex(&self, coord: Coordinate) -> bool {
        self.ready().is_vertex(coord)
    }

    /// Iterate the vertices of the board in row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.ready().vertices()
    }

    /// Iterate every pair of adjacent vertices once.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.ready().edges()
    }

    /// Iterate every minimal triangle of the board once.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.ready().faces()
    }

    fn notify(&mut self) {
        if let Some(ref position) = self.position {
            for (_, observer) in self.observers.iter_mut() {
                observer.notify(position);
            }
        }
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoardModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BoardModel")
            .field("position", &self.position)
            .field("observers", &self.observers.len())
            .finish()
    }
}
