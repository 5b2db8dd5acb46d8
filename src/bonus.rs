use crate::{Coordinate, BOARD_LEN};

/// Describes how a square on the board modifies the score of a [tile](crate::TileCode)
/// newly placed on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bonus {
    /// A plain square.
    None,
    /// Doubles the value of the letter placed on it.
    DoubleLetter,
    /// Triples the value of the letter placed on it.
    TripleLetter,
    /// Doubles the value of the word placed over it.
    DoubleWord,
    /// Triples the value of the word placed over it.
    TripleWord,
}

impl Bonus {
    /// The multiplier applied to a letter placed on the square.
    #[inline]
    pub fn letter_multiplier(self) -> i32 {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    /// The multiplier applied to the primary word when a letter is placed on the square.
    #[inline]
    pub fn word_multiplier(self) -> i32 {
        match self {
            Bonus::DoubleWord => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }
}

const N: Bonus = Bonus::None;
const DL: Bonus = Bonus::DoubleLetter;
const TL: Bonus = Bonus::TripleLetter;
const DW: Bonus = Bonus::DoubleWord;
const TW: Bonus = Bonus::TripleWord;

/// The bonus squares of the board. Symmetric about both axes, both diagonals and the center,
/// so it reads the same indexed by `[x][y]` or `[y][x]`.
///
/// # See Also
///
/// * [bonus_at]
pub const BONUS_LAYOUT: [[Bonus; BOARD_LEN]; BOARD_LEN] = [
    [N, N, N, TW, N, N, TL, N, TL, N, N, TW, N, N, N],
    [N, N, DL, N, N, DW, N, N, N, DW, N, N, DL, N, N],
    [N, DL, N, N, DL, N, N, N, N, N, DL, N, N, DL, N],
    [TW, N, N, TL, N, N, N, DW, N, N, N, TL, N, N, TW],
    [N, N, DL, N, N, N, DL, N, DL, N, N, N, DL, N, N],
    [N, DW, N, N, N, TL, N, N, N, TL, N, N, N, DW, N],
    [TL, N, N, N, DL, N, N, N, N, N, DL, N, N, N, TL],
    [N, N, N, DW, N, N, N, N, N, N, N, DW, N, N, N],
    [TL, N, N, N, DL, N, N, N, N, N, DL, N, N, N, TL],
    [N, DW, N, N, N, TL, N, N, N, TL, N, N, N, DW, N],
    [N, N, DL, N, N, N, DL, N, DL, N, N, N, DL, N, N],
    [TW, N, N, TL, N, N, N, DW, N, N, N, TL, N, N, TW],
    [N, DL, N, N, DL, N, N, N, N, N, DL, N, N, DL, N],
    [N, N, DL, N, N, DW, N, N, N, DW, N, N, DL, N, N],
    [N, N, N, TW, N, N, TL, N, TL, N, N, TW, N, N, N],
];

/// # Returns
///
/// The bonus of the square at `(x, y)`, or [Bonus::None] outside the board.
#[inline]
pub fn bonus_at((x, y): Coordinate) -> Bonus {
    BONUS_LAYOUT
        .get(y)
        .and_then(|row| row.get(x))
        .copied()
        .unwrap_or(Bonus::None)
}
