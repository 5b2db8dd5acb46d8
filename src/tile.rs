use crate::TILES_LEN;
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::array;

/// The number of blank [tiles](TileCode). Blanks hold codes `0` and `1`.
pub const BLANKS_LEN: usize = 2;

/// Identifies one physical tile in a game, distinct from the [letter](Letter) it represents.
///
/// Codes `0` and `1` are the two blanks. Codes `2..104` are lettered tiles laid out in
/// [DISTRIBUTION] order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TileCode(u8);

impl TileCode {
    /// # Returns
    ///
    /// The tile with `code`, or [None] if `code` is not below [TILES_LEN].
    #[inline]
    pub fn new(code: u8) -> Option<TileCode> {
        (usize::from(code) < TILES_LEN).then_some(TileCode(code))
    }

    /// The raw protocol value of the tile.
    #[inline]
    pub fn code(self) -> u8 {
        self.0
    }

    /// # Returns
    ///
    /// The blank slot (`0` or `1`) if the tile is a blank, otherwise [None].
    #[inline]
    pub fn blank_slot(self) -> Option<usize> {
        let slot = usize::from(self.0);
        (slot < BLANKS_LEN).then_some(slot)
    }

    /// Whether the tile is one of the two blanks.
    #[inline]
    pub fn is_blank(self) -> bool {
        self.blank_slot().is_some()
    }

    /// # Returns
    ///
    /// The printed [letter](Letter) of a lettered tile, or [None] for a blank.
    pub fn letter(self) -> Option<Letter> {
        let mut offset = usize::from(self.0).checked_sub(BLANKS_LEN)?;
        for &(letter, count) in DISTRIBUTION.iter() {
            if offset < count {
                return Some(letter);
            }
            offset -= count;
        }
        None
    }

    /// The point value of the tile. Blanks are worth `0` whatever letter they stand for.
    #[inline]
    pub fn value(self) -> i32 {
        self.letter().map_or(0, Letter::value)
    }
}

/// # Returns
///
/// An array of every [tile](TileCode) in a game in code order.
#[inline]
pub fn tiles() -> [TileCode; TILES_LEN] {
    array::from_fn(|code| TileCode(code as u8))
}

/// How many lettered [tiles](TileCode) carry each [letter](Letter), in tile code order
/// starting at code `2`.
///
/// # See Also
///
/// * [TileCode::letter]
/// * [TILES_LEN]
pub const DISTRIBUTION: [(Letter, usize); Letter::LETTERS_LEN] = [
    (Letter::E, 13),
    (Letter::A, 9),
    (Letter::I, 8),
    (Letter::O, 8),
    (Letter::N, 5),
    (Letter::R, 6),
    (Letter::T, 7),
    (Letter::D, 5),
    (Letter::L, 4),
    (Letter::S, 5),
    (Letter::U, 4),
    (Letter::G, 3),
    (Letter::B, 2),
    (Letter::C, 2),
    (Letter::F, 2),
    (Letter::H, 4),
    (Letter::M, 2),
    (Letter::P, 2),
    (Letter::V, 2),
    (Letter::W, 2),
    (Letter::Y, 2),
    (Letter::J, 1),
    (Letter::K, 1),
    (Letter::Q, 1),
    (Letter::X, 1),
    (Letter::Z, 1),
];

/// Describes the letter shown on a [tile](TileCode) or assigned to a blank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Letter {
    /// `0`.
    A = 0,
    /// `1`.
    B = 1,
    /// `2`.
    C = 2,
    /// `3`.
    D = 3,
    /// `4`.
    E = 4,
    /// `5`.
    F = 5,
    /// `6`.
    G = 6,
    /// `7`.
    H = 7,
    /// `8`.
    I = 8,
    /// `9`.
    J = 9,
    /// `10`.
    K = 10,
    /// `11`.
    L = 11,
    /// `12`.
    M = 12,
    /// `13`.
    N = 13,
    /// `14`.
    O = 14,
    /// `15`.
    P = 15,
    /// `16`.
    Q = 16,
    /// `17`.
    R = 17,
    /// `18`.
    S = 18,
    /// `19`.
    T = 19,
    /// `20`.
    U = 20,
    /// `21`.
    V = 21,
    /// `22`.
    W = 22,
    /// `23`.
    X = 23,
    /// `24`.
    Y = 24,
    /// `25`.
    Z = 25,
}

impl Letter {
    /// The number of [`Letter`] variants. 26 letters.
    pub const LETTERS_LEN: usize = 26;

    /// # Returns
    ///
    /// The letter for an ASCII character in either case, or [None].
    pub fn from_char(char: char) -> Option<Letter> {
        if !char.is_ascii_alphabetic() {
            return None;
        }
        num::FromPrimitive::from_u8(char.to_ascii_uppercase() as u8 - b'A')
    }

    /// The uppercase character of the letter.
    #[inline]
    pub fn as_char(self) -> char {
        char::from(b'A' + self as u8)
    }

    /// The number of points the letter is worth before bonus squares.
    pub fn value(self) -> i32 {
        match self {
            Letter::A | Letter::E | Letter::I | Letter::O => 1,
            Letter::R | Letter::S | Letter::T => 1,
            Letter::D | Letter::L | Letter::N | Letter::U => 2,
            Letter::G | Letter::H | Letter::Y => 3,
            Letter::B | Letter::C | Letter::F | Letter::M | Letter::P | Letter::W => 4,
            Letter::K | Letter::V => 5,
            Letter::X => 8,
            Letter::J | Letter::Q | Letter::Z => 10,
        }
    }
}

impl Distribution<Letter> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Letter {
        let index = rng.gen_range(0..Letter::LETTERS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Letter::LETTERS_LEN);
            unreachable!(
                "index ({:?}) should be matched since letters cover all indexes \
                in range 0..Letter::LETTERS_LEN (0..{:?}).",
                index,
                Letter::LETTERS_LEN
            );
        })
    }
}

impl Distribution<TileCode> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileCode {
        TileCode(rng.gen_range(0..TILES_LEN) as u8)
    }
}

/// The letters assigned to the two blank slots for the whole game.
///
/// A slot is assigned the first time its blank is played and is never reassigned, so every
/// later reading of that blank shows the same letter.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Blanks([Option<Letter>; BLANKS_LEN]);

impl Blanks {
    /// # Returns
    ///
    /// The letter assigned to `slot`, or [None] if unassigned or `slot` is not a blank slot.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<Letter> {
        self.0.get(slot).copied().flatten()
    }

    /// Assigns `letter` to `slot` unless the slot already has a letter.
    ///
    /// # Returns
    ///
    /// The letter the slot holds afterwards, or [None] if `slot` is not a blank slot.
    pub fn assign(&mut self, slot: usize, letter: Letter) -> Option<Letter> {
        let assigned = self.0.get_mut(slot)?;
        Some(*assigned.get_or_insert(letter))
    }

    /// # Returns
    ///
    /// The letter `tile` stands for: its printed letter, or its slot's assignment for a blank.
    pub fn letter_of(&self, tile: TileCode) -> Option<Letter> {
        match tile.blank_slot() {
            Some(slot) => self.get(slot),
            None => tile.letter(),
        }
    }
}
