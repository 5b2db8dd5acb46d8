//! A deterministic replay engine for the word game protocol, reproducing the game service's
//! tile draws, board, scoring, and board checksum so that a client can validate and predict
//! a game without trusting the service's description of it.
//!
//! ## Summary
//!
//! A [GameState] owns the board, the [letter bag](LetterBag), both [players](Player) and the
//! game's [generator](DeterministicRandom). Once [seeded](GameState::set_random_seed), each
//! player draws [RACK_LEN] [tiles](TileCode) and [moves](Move) reported by the service are
//! [added](GameState::add_move) one at a time in order. Every move is [resolved](resolve)
//! against a copy of the board first and only committed when every check passes, so a
//! rejected move leaves the game exactly as it was.
//!
//! ## How are tiles drawn?
//!
//! The bag starts with all [TILES_LEN] tiles in code order. Each draw removes the tile at
//! index `next % len` where `next` is the next word of a 32-bit Mersenne Twister seeded with
//! the game's seed. [GameState::peek_remaining] replays the remaining draws on copies to
//! predict the order the rest of the bag will come out in.
//!
//! ## What can a move do?
//!
//! * Place [tiles](TileCode) along a row or column, optionally reading through tiles already
//! on the board. The move earns points for the primary word and every cross-word it forms.
//! * Signal an [event](Event) with a `from_x` past the board: pass, exchange, decline, resign
//! on timeout, or win. Listed tiles are exchanged with the bag. Declines, timeouts and wins
//! end the game, and a win settles the remaining racks between the players.
//!
//! ## How are points calculated?
//!
//! Newly placed letters are worth their value times their square's letter
//! [bonus](Bonus), summed and multiplied by the word bonuses under them. Existing letters in
//! or extending the primary word add their plain value. Each cross-word adds the new letter's
//! bonused value plus the plain values of its neighbours. Playing a full rack adds
//! [BINGO_BONUS].
//!
//! ## How is the board checked against the service?
//!
//! [Board::checksum] fingerprints the board the same way the service does. When a move
//! carries a nonzero checksum, the checksum of the board after the move must match it.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds constructors and methods to get mutable references
//! to private properties, along with helpers in a `random` module to add random data.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]
#![warn(unused)]

pub use bag::*;
pub use board::*;
pub use bonus::*;
pub use consts::*;
pub use coordinate::*;
pub use game_state::*;
pub use play::*;
#[cfg(test)]
pub use random::*;
pub use resolve::*;
pub use tile::*;
pub use twister::*;

mod bag;
mod board;
mod bonus;
mod consts;
mod coordinate;
mod game_state;
mod play;
#[cfg(test)]
mod random;
mod resolve;
mod tile;
mod twister;
