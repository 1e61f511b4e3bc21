//! Boundary lines of the board region.

use enumflags2::BitFlags;

use crate::board::Player;

/// One of the straight lines bounding a board. A coordinate lies on a side when the
/// side's distance measure for it is zero.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Side {
    /// `i = 0`.
    FirstRow = 0b00_0001,
    /// `i` at its maximum.
    LastRow = 0b00_0010,
    /// `j = 0`.
    FirstColumn = 0b00_0100,
    /// `j` at its maximum.
    LastColumn = 0b00_1000,
    /// `j - i = size`. Only bounds the hexagon.
    UpperDiagonal = 0b01_0000,
    /// `i - j = size`. Only bounds the hexagon.
    LowerDiagonal = 0b10_0000,
}

impl Side {
    /// All sides, in declaration order.
    pub const ALL: &'static [Side] = &[
        Side::FirstRow,
        Side::LastRow,
        Side::FirstColumn,
        Side::LastColumn,
        Side::UpperDiagonal,
        Side::LowerDiagonal,
    ];

    /// The player whose border cells line this side. Opposite sides share an owner.
    pub fn owner(self) -> Player {
        match self {
            Side::FirstRow | Side::LastRow => Player::One,
            Side::FirstColumn | Side::LastColumn => Player::Two,
            Side::UpperDiagonal | Side::LowerDiagonal => Player::Three,
        }
    }
}

/// Collect the sides whose distance measure is zero. Returns `None` if any measure is
/// negative, meaning the coordinate is outside the region.
pub(super) fn measure(distances: &[(Side, isize)]) -> Option<BitFlags<Side>> {
    let mut sides = BitFlags::empty();
    for &(side, distance) in distances {
        if distance < 0 {
            return None;
        }
        if distance == 0 {
            sides.insert(side);
        }
    }
    Some(sides)
}

/// The single side in `sides`, if there is exactly one.
pub(super) fn single(sides: BitFlags<Side>) -> Option<Side> {
    if sides.bits().count_ones() == 1 {
        Side::ALL.iter().copied().find(|&side| sides.contains(side))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_distance_is_outside() {
        assert_eq!(
            measure(&[(Side::FirstRow, 1), (Side::LastRow, -1)]),
            None
        );
    }

    #[test]
    fn zero_distances_are_collected() {
        let sides = measure(&[
            (Side::FirstRow, 0),
            (Side::FirstColumn, 0),
            (Side::LastColumn, 4),
        ])
        .unwrap();
        assert!(sides.contains(Side::FirstRow));
        assert!(sides.contains(Side::FirstColumn));
        assert!(!sides.contains(Side::LastColumn));
        assert_eq!(single(sides), None);
    }

    #[test]
    fn single_side_is_found() {
        let sides = measure(&[(Side::UpperDiagonal, 0), (Side::LastRow, 3)]).unwrap();
        assert_eq!(single(sides), Some(Side::UpperDiagonal));
        assert_eq!(single(BitFlags::empty()), None);
    }
}
