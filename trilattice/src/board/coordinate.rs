use std::fmt;

/// The coordinates of a cell in the lattice. `i` selects the row and `j` the position
/// within the row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Row of the cell.
    pub i: usize,
    /// Column of the cell.
    pub j: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `i` and `j`.
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Step from this coordinate by the given row and column deltas. Returns `None` if
    /// the step would leave the non-negative quadrant.
    pub fn offset(self, di: isize, dj: isize) -> Option<Self> {
        Some(Self {
            i: self.i.checked_add_signed(di)?,
            j: self.j.checked_add_signed(dj)?,
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(i, j)` pair.
    fn from((i, j): (usize, usize)) -> Self {
        Self::new(i, j)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(i, j)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.i, coord.j)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_non_negative() {
        let origin = Coordinate::new(0, 3);
        assert_eq!(origin.offset(0, 1), Some(Coordinate::new(0, 4)));
        assert_eq!(origin.offset(1, -1), Some(Coordinate::new(1, 2)));
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(Coordinate::new(2, 0).offset(1, -1), None);
    }

    #[test]
    fn orders_row_major() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
            Coordinate::new(0, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            [(0, 1), (0, 2), (1, 0)]
                .iter()
                .copied()
                .map(Coordinate::from)
                .collect::<Vec<_>>()
        );
    }
}
