use crate::BOARD_LEN;
use std::iter;

/// A tuple with two components for horizontal and vertical position on the board, both in
/// `0..`[BOARD_LEN] for a square on the board.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Move](crate::Move)
pub type Coordinate = (usize, usize);

/// Whether both components of `coordinate` lie on the board.
#[inline]
pub fn on_board((x, y): Coordinate) -> bool {
    x < BOARD_LEN && y < BOARD_LEN
}

/// The direction a line of [tiles](crate::TileCode) runs along the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Left to right, `x` increasing.
    Horizontal,
    /// Top to bottom, `y` increasing.
    Vertical,
}

impl Axis {
    /// # Returns
    ///
    /// The axis at a right angle to this one.
    #[inline]
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) one step back along the axis, or [None] past the edge of
    /// the board.
    #[inline]
    pub fn previous(self, (x, y): Coordinate) -> Option<Coordinate> {
        match self {
            Axis::Horizontal => x.checked_sub(1).map(|x| (x, y)),
            Axis::Vertical => y.checked_sub(1).map(|y| (x, y)),
        }
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) one step forward along the axis, or [None] past the edge of
    /// the board.
    #[inline]
    pub fn next(self, (x, y): Coordinate) -> Option<Coordinate> {
        let next = match self {
            Axis::Horizontal => (x + 1, y),
            Axis::Vertical => (x, y + 1),
        };
        on_board(next).then_some(next)
    }

    /// An [iterator](Iterator) of [coordinates](Coordinate) walking back along the axis from
    /// `coordinate` (exclusive) to the edge of the board.
    pub fn backward(self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> {
        iter::successors(self.previous(coordinate), move |&coordinate| {
            self.previous(coordinate)
        })
    }

    /// An [iterator](Iterator) of [coordinates](Coordinate) walking forward along the axis from
    /// `coordinate` (exclusive) to the edge of the board.
    pub fn forward(self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> {
        iter::successors(self.next(coordinate), move |&coordinate| self.next(coordinate))
    }
}

/// Lists the [coordinates](Coordinate) from `from` to `to`, both inclusive, along `axis`.
/// If `to` is not reachable from `from` along `axis`, an empty vector is returned.
///
/// # See Also
///
/// * [resolve](crate::resolve)
pub fn line(from: Coordinate, to: Coordinate, axis: Axis) -> Vec<Coordinate> {
    let ((from_x, from_y), (to_x, to_y)) = (from, to);
    match axis {
        Axis::Horizontal if from_y == to_y => (from_x..=to_x).map(|x| (x, from_y)).collect(),
        Axis::Vertical if from_x == to_x => (from_y..=to_y).map(|y| (from_x, y)).collect(),
        _ => Vec::new(),
    }
}

/// Finds the adjacent [coordinates](Coordinate) of the argument [coordinate](Coordinate)
/// along `axis`.
///
/// # Returns
///
/// A tuple of the [coordinate](Coordinate) before and the [coordinate](Coordinate) after,
/// either of which is [None] past the edge of the board.
pub fn adjacent_coordinates(
    coordinate: Coordinate,
    axis: Axis,
) -> (Option<Coordinate>, Option<Coordinate>) {
    (axis.previous(coordinate), axis.next(coordinate))
}
