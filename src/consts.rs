use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of cells along each side of the board. `15` cells.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [BONUS_LAYOUT](crate::BONUS_LAYOUT)
pub const BOARD_LEN: usize = 15;
/// The number of cells on the board. `225` cells.
pub const CELLS_LEN: usize = BOARD_LEN * BOARD_LEN;
/// The number of physical [tiles](crate::TileCode) in a game, `2` blanks and `102` lettered
/// tiles.
///
/// # See Also
///
/// * [DISTRIBUTION](crate::DISTRIBUTION)
/// * [LetterBag](crate::LetterBag)
pub const TILES_LEN: usize = 104;
/// The number of [tiles](crate::TileCode) each player holds after drawing. `7` tiles.
///
/// # See Also
///
/// * [GameState::set_random_seed](crate::GameState::set_random_seed)
pub const RACK_LEN: usize = 7;
/// The amount of extra points given for playing every tile of a full rack in one move.
/// `35` additional points.
///
/// # See Also
///
/// * [resolve](crate::resolve)
pub const BINGO_BONUS: i32 = 35;
/// The seed the generator falls back to when it is drawn from without ever being seeded.
/// `4357`.
///
/// # See Also
///
/// * [DeterministicRandom::unseeded](crate::DeterministicRandom::unseeded)
pub const DEFAULT_SEED: u32 = 4357;
/// Racks are stored on the stack until they hold more than `RACK_CAPACITY`
/// [tiles](crate::TileCode), which only happens transiently while tiles are exchanged.
/// If the environment variable named `RACK_CAPACITY` is present at compile time and is able to
/// be parsed into a `usize`, set to the value of the environment variable. Otherwise, it is set
/// to [RACK_LEN].
///
/// # See Also
///
/// * [Rack](crate::Rack)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    RACK_LEN
);
const _: () = assert!(RACK_CAPACITY > 0);
/// Words formed by a single move are stored on the stack until there are more than
/// `WORDS_CAPACITY` of them. If the environment variable named `WORDS_CAPACITY` is present at
/// compile time and is able to be parsed into a `usize`, set to the value of the environment
/// variable. Otherwise, it is set to `8`, one primary word and one cross-word per rack tile.
///
/// # See Also
///
/// * [Words](crate::Words)
pub const WORDS_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("WORDS_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    RACK_LEN + 1
);
const _: () = assert!(WORDS_CAPACITY > 0);
