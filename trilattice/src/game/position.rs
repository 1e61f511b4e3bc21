//! The rules of play on a single board.
use log::trace;

use crate::{
    board::{Coordinate, Grid, Player},
    geometry::{Edge, Face, Geometry, Variant},
};

/// State of a game in progress: the board, whose turn it is and the moves played so far.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Position {
    /// Shape of the board and turn order.
    variant: Variant,

    /// Owner of every cell. Border vertices are owned from the start.
    grid: Grid,

    /// The player to move.
    next: Player,

    /// Vertices claimed through [`Position::put`], oldest first.
    history: Vec<Coordinate>,
}

impl Position {
    /// Set up a fresh board for the given variant. The first player moves first. Panics
    /// if the board cannot be allocated.
    pub fn new(variant: Variant) -> Self {
        match Self::try_new(variant) {
            Some(position) => position,
            None => panic!("cannot allocate a board for {:?}", variant),
        }
    }

    /// Set up a fresh board for the given variant, or return `None` if the board cannot
    /// be allocated.
    pub fn try_new(variant: Variant) -> Option<Self> {
        Some(Self {
            grid: variant.try_initialize_board()?,
            next: variant.players()[0],
            history: Vec::new(),
            variant,
        })
    }

    /// Get the [`Variant`] being played.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// The player whose turn it is.
    pub fn next_player(&self) -> Player {
        self.next
    }

    /// Vertices claimed so far, oldest first. Border vertices are never included.
    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }

    /// Returns true if the coordinate is a vertex of this board.
    pub fn is_vertex(&self, coord: Coordinate) -> bool {
        self.variant.is_vertex(&coord)
    }

    /// Returns true if the coordinate is a vertex nobody owns yet.
    pub fn is_playable(&self, coord: Coordinate) -> bool {
        self.is_vertex(coord) && self.grid[coord].is_none()
    }

    /// Get the owner of the given cell, or `None` if it is empty. Cells of the grid that
    /// are not vertices are always empty. Panics if the coordinate is outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<Player> {
        self.grid[coord]
    }

    /// Claim the vertex for the player whose turn it is and pass the turn on. Returns
    /// false without changing anything if the vertex is already owned. Panics if the
    /// coordinate is not a vertex of the board.
    pub fn put(&mut self, coord: Coordinate) -> bool {
        if !self.variant.is_vertex(&coord) {
            panic!("{} is not a vertex of {:?}", coord, self.variant);
        }
        let cell = &mut self.grid[coord];
        if cell.is_some() {
            return false;
        }
        *cell = Some(self.next);
        trace!("{} claimed {}", self.next, coord);
        self.next = self.variant.next(self.next);
        self.history.push(coord);
        true
    }

    /// Take back the most recent move, handing the turn back to the player who made it.
    /// Returns the vertex that was cleared, or `None` if no moves have been made.
    pub fn undo(&mut self) -> Option<Coordinate> {
        let coord = self.history.pop()?;
        self.grid[coord] = None;
        self.next = self.variant.prev(self.next);
        trace!("{} took back {}", self.next, coord);
        Some(coord)
    }

    /// Iterate the vertices of the board in row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.variant.vertices()
    }

    /// Iterate every pair of adjacent vertices once.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.variant.edges()
    }

    /// Iterate every minimal triangle of the board once.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.variant.faces()
    }

    /// Iterate the vertices nobody owns yet.
    pub fn empty_vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.vertices().filter(move |&coord| self.grid[coord].is_none())
    }

    /// Iterate the edges with both ends owned by `player`, border vertices included.
    pub fn owned_edges(&self, player: Player) -> impl Iterator<Item = Edge> + '_ {
        self.edges()
            .filter(move |&(a, b)| self.owns(player, a) && self.owns(player, b))
    }

    /// Iterate the faces with all three corners owned by `player`.
    pub fn owned_faces(&self, player: Player) -> impl Iterator<Item = Face> + '_ {
        self.faces()
            .filter(move |face| face.iter().all(|&corner| self.owns(player, corner)))
    }

    fn owns(&self, player: Player, coord: Coordinate) -> bool {
        self.grid[coord] == Some(player)
    }
}
