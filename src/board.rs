use crate::{on_board, Coordinate, TileCode, BOARD_LEN, CELLS_LEN};
use itertools::Itertools;
use thiserror::Error;

/// The contents of one square: [None] when empty, otherwise the [tile](TileCode) on it.
pub type Cell = Option<TileCode>;

/// The number of bit positions the checksum cycles through.
const CHECKSUM_BITS: usize = 32;

/// Describes the reason why a [tile](TileCode) could not be [placed](Board::place).
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlaceError {
    /// Attempting to place a [tile](TileCode) on a square that already holds one.
    #[error("square {coordinate:?} is already occupied")]
    IllegalOverlap {
        /// The occupied square.
        coordinate: Coordinate,
    },
    /// Attempting to place a [tile](TileCode) off the board.
    #[error("square {coordinate:?} is off the board")]
    OutOfBounds {
        /// The square outside `0..BOARD_LEN` on some axis.
        coordinate: Coordinate,
    },
}

/// A grid of [BOARD_LEN] by [BOARD_LEN] [cells](Cell) indexed by `[y][x]`.
///
/// Squares only ever go from empty to occupied. Nothing clears or overwrites a placed
/// [tile](TileCode).
///
/// # See Also
///
/// * [bonus_at](crate::bonus_at)
/// * [resolve](crate::resolve)
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_LEN]; BOARD_LEN],
}

impl Board {
    /// # Returns
    ///
    /// A board with every square empty.
    pub fn new() -> Board {
        Board::default()
    }

    /// # Returns
    ///
    /// The [cell](Cell) at `(x, y)`, or [None] if `(x, y)` is off the board.
    #[inline]
    pub fn get(&self, (x, y): Coordinate) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// # Returns
    ///
    /// The [tile](TileCode) at `coordinate` if the square is on the board and occupied.
    #[inline]
    pub fn tile(&self, coordinate: Coordinate) -> Option<TileCode> {
        self.get(coordinate).flatten()
    }

    /// Whether the square at `coordinate` is on the board and holds a [tile](TileCode).
    #[inline]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.tile(coordinate).is_some()
    }

    /// Writes `tile` to the empty square at `coordinate`.
    ///
    /// # Errors
    ///
    /// * [PlaceError::OutOfBounds] if `coordinate` is off the board.
    /// * [PlaceError::IllegalOverlap] if the square already holds a [tile](TileCode). The board
    /// is left unchanged.
    pub fn place(&mut self, coordinate: Coordinate, tile: TileCode) -> Result<(), PlaceError> {
        if !on_board(coordinate) {
            return Err(PlaceError::OutOfBounds { coordinate });
        }
        let (x, y) = coordinate;
        let cell = &mut self.cells[y][x];
        if cell.is_some() {
            return Err(PlaceError::IllegalOverlap { coordinate });
        }
        *cell = Some(tile);
        Ok(())
    }

    /// An [iterator](Iterator) of occupied squares and their [tiles](TileCode) in row-major
    /// order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, TileCode)> + '_ {
        (0..BOARD_LEN)
            .cartesian_product(0..BOARD_LEN)
            .filter_map(move |(y, x)| self.cells[y][x].map(|tile| ((x, y), tile)))
    }

    /// The number of occupied squares.
    pub fn occupied_len(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Fingerprints the board the way the game service does to detect when two copies of a
    /// game disagree.
    ///
    /// Scans every square in row-major order with a bit position `j` cycling through
    /// `0..32`. An empty square XORs the accumulator with `1`, the blank in slot `0` XORs it
    /// with `2^j`, and any other [tile](TileCode) XORs it with the tile's code. When an odd
    /// number of squares is occupied the result is negated, and lowered by `2` more if it is
    /// even after XOR with `2`. All arithmetic wraps at 32 bits.
    ///
    /// # Returns
    ///
    /// The checksum as a signed 32-bit integer.
    pub fn checksum(&self) -> i32 {
        let mut accumulator = 0u32;
        let mut occupied = CELLS_LEN;

        for (index, cell) in self.cells.iter().flatten().enumerate() {
            let j = index % CHECKSUM_BITS;
            accumulator ^= match cell {
                None => {
                    occupied -= 1;
                    1
                }
                Some(tile) if tile.blank_slot() == Some(0) => 1u32 << j,
                Some(tile) => u32::from(tile.code()),
            };
        }

        let mut checksum = accumulator as i32;
        if occupied % 2 == 1 {
            checksum = checksum.wrapping_neg();
            if (checksum ^ 2).rem_euclid(2) == 0 {
                checksum = checksum.wrapping_sub(2);
            }
        }
        checksum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_board;
    use rand::Rng;

    fn tile(code: u8) -> TileCode {
        TileCode::new(code).unwrap()
    }

    fn board_with(tiles: &[(Coordinate, u8)]) -> Board {
        let mut board = Board::new();
        for &(coordinate, code) in tiles {
            board.place(coordinate, tile(code)).unwrap();
        }
        board
    }

    #[test]
    fn new_is_empty() {
        let board = Board::new();

        assert_eq!(0, board.occupied_len());
        assert_eq!(0, board.occupied().count());
        assert_eq!(Some(None), board.get((7, 7)));
    }

    #[test]
    fn get_out_of_bounds() {
        let board = Board::new();

        assert_eq!(None, board.get((BOARD_LEN, 0)));
        assert_eq!(None, board.get((0, BOARD_LEN)));
        assert!(!board.is_occupied((BOARD_LEN, BOARD_LEN)));
    }

    #[test]
    fn place_then_get() {
        let mut board = Board::new();

        board.place((3, 11), tile(42)).unwrap();

        assert_eq!(Some(Some(tile(42))), board.get((3, 11)));
        assert_eq!(None, board.tile((11, 3)));
        assert_eq!(vec![((3, 11), tile(42))], board.occupied().collect::<Vec<_>>());
    }

    #[test]
    fn place_overlap_leaves_board_unchanged() {
        let mut rng = rand::thread_rng();
        let mut board = Board::new();
        let placed = random_board(&mut rng, &mut board);
        let (coordinate, _) = board.occupied().next().unwrap();
        let before = board.clone();

        let result = board.place(coordinate, rng.gen());

        assert_eq!(Err(PlaceError::IllegalOverlap { coordinate }), result);
        assert_eq!(before, board);
        assert_eq!(placed, board.occupied_len());
    }

    #[test]
    fn place_out_of_bounds() {
        let mut board = Board::new();

        assert_eq!(
            Err(PlaceError::OutOfBounds {
                coordinate: (BOARD_LEN, 2)
            }),
            board.place((BOARD_LEN, 2), tile(5))
        );
        assert_eq!(Board::new(), board);
    }

    #[test]
    fn occupied_row_major() {
        let board = board_with(&[((9, 2), 10), ((1, 4), 11), ((0, 2), 12)]);

        let coordinates: Vec<Coordinate> = board.occupied().map(|(c, _)| c).collect();

        assert_eq!(vec![(0, 2), (9, 2), (1, 4)], coordinates);
    }

    #[test]
    fn checksum_empty() {
        assert_eq!(1, Board::new().checksum());
    }

    #[test]
    fn checksum_single_tiles() {
        assert_eq!(-4, board_with(&[((7, 7), 2)]).checksum());
        assert_eq!(-51, board_with(&[((7, 7), 51)]).checksum());
    }

    #[test]
    fn checksum_blanks() {
        assert_eq!(-65538, board_with(&[((7, 7), 0)]).checksum());
        assert_eq!(-1, board_with(&[((7, 7), 1)]).checksum());
        assert_eq!(-1, board_with(&[((0, 0), 0)]).checksum());
        assert_eq!(2, board_with(&[((0, 0), 0), ((1, 0), 2)]).checksum());
    }

    #[test]
    fn checksum_cat() {
        let board = board_with(&[((7, 7), 81), ((8, 7), 15), ((9, 7), 51)]);

        assert_eq!(-109, board.checksum());
    }

    #[test]
    fn checksum_cat_with_crosses() {
        let cat = [((7, 7), 81), ((8, 7), 15), ((9, 7), 51)];
        let ax = board_with(&[&cat[..], &[((8, 8), 102)]].concat());
        let ax_s = board_with(&[&cat[..], &[((8, 8), 102), ((9, 8), 67)]].concat());

        assert_eq!(10, ax.checksum());
        assert_eq!(-74, ax_s.checksum());
    }

    #[test]
    fn checksum_idempotent() {
        let mut board = Board::new();
        random_board(&mut rand::thread_rng(), &mut board);

        assert_eq!(board.checksum(), board.checksum());
        assert_eq!(board.checksum(), board.clone().checksum());
    }
}
