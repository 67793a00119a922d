use enum_iterator::IntoEnumIterator;
use Direction::*;

/// The eight cells of a Moore neighborhood, in the order they are queried.
///
/// Rows grow to the north and columns grow to the east.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The `(row, col)` offset of this neighbor.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            North => (1, 0),
            NorthEast => (1, 1),
            East => (0, 1),
            SouthEast => (-1, 1),
            South => (-1, 0),
            SouthWest => (-1, -1),
            West => (0, -1),
            NorthWest => (1, -1),
        }
    }

    #[inline]
    pub fn directions() -> <Direction as IntoEnumIterator>::Iterator {
        Direction::into_enum_iter()
    }

    /// The `n`th direction in query order, if there is one.
    #[inline]
    pub fn nth(n: usize) -> Option<Self> {
        Self::directions().nth(n)
    }

    /// Apply this offset to a coordinate.
    #[inline]
    pub fn offset(self, row: isize, col: isize) -> (isize, isize) {
        let (dr, dc) = self.delta();
        (row + dr, col + dc)
    }
}
