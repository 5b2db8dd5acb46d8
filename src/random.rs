use crate::{Board, Coordinate, DeterministicRandom, LetterBag, Rack, BOARD_LEN, RACK_LEN};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// A random seed for the game's generator.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen()
}

/// `n` distinct random squares from those empty on the board, or all of them if fewer.
pub fn random_squares<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    n: usize,
) -> Vec<Coordinate> {
    (0..BOARD_LEN)
        .cartesian_product(0..BOARD_LEN)
        .filter(|&coordinate| !board.is_occupied(coordinate))
        .collect_vec()
        .tap_mut(|squares| squares.shuffle(rng))
        .into_iter()
        .take(n)
        .collect()
}

/// Draws a random, small, non-zero number of [tiles](crate::TileCode) from the bag with a
/// randomly seeded generator and places them on random empty squares. The tiles need not
/// form words.
///
/// # Returns
///
/// The number of additional [tiles](crate::TileCode) on the board.
pub fn random_board_from<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    bag: &mut LetterBag,
) -> usize {
    let n = rng.gen_range(5..20);
    let squares = random_squares(rng, board, n);
    let mut random = DeterministicRandom::new(random_seed(rng));
    let tiles = bag.draw(squares.len(), &mut random);

    for (&coordinate, &tile) in squares.iter().zip(&tiles) {
        board.place(coordinate, tile).unwrap();
    }

    tiles.len()
}

/// Places a random, small, non-zero number of distinct [tiles](crate::TileCode) on random
/// empty squares of the board.
///
/// # Returns
///
/// The number of additional [tiles](crate::TileCode) on the board.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> usize {
    random_board_from(rng, board, &mut LetterBag::new())
}

/// Draws a random, non-zero number of [tiles](crate::TileCode) up to [RACK_LEN] from the bag
/// into the rack with a randomly seeded generator.
///
/// # Returns
///
/// The number of additional [tiles](crate::TileCode) in the rack.
pub fn random_rack<R: Rng + ?Sized>(
    rng: &mut R,
    rack: &mut Rack,
    bag: &mut LetterBag,
) -> usize {
    let n = rng.gen_range(1..=RACK_LEN);
    let mut random = DeterministicRandom::new(random_seed(rng));
    let tiles = bag.draw(n, &mut random);
    rack.extend(tiles.iter().copied());

    tiles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TileCode, CELLS_LEN, TILES_LEN};

    #[test]
    fn random_squares_distinct_and_empty() {
        let mut rng = rand::thread_rng();
        let mut board = Board::new();
        random_board(&mut rng, &mut board);

        let squares = random_squares(&mut rng, &board, 30);

        assert_eq!(30, squares.len());
        assert_eq!(0, squares.iter().duplicates().count());
        assert!(squares.iter().all(|&square| !board.is_occupied(square)));
    }

    #[test]
    fn random_squares_full_board() {
        let board = Board::new();

        let squares = random_squares(&mut rand::thread_rng(), &board, CELLS_LEN + 10);

        assert_eq!(CELLS_LEN, squares.len());
    }

    #[test]
    fn random_board_empty() {
        let mut board = Board::new();

        let board_len = random_board(&mut rand::thread_rng(), &mut board);

        assert!(board_len >= 5);
        assert_eq!(board_len, board.occupied_len());
        let tiles: Vec<TileCode> = board.occupied().map(|(_, tile)| tile).collect();
        assert_eq!(0, tiles.iter().duplicates().count());
    }

    #[test]
    fn random_board_from_draws_bag() {
        let mut board = Board::new();
        let mut bag = LetterBag::new();

        let board_len = random_board_from(&mut rand::thread_rng(), &mut board, &mut bag);

        assert_eq!(TILES_LEN, board_len + bag.len());
        assert!(board
            .occupied()
            .all(|(_, tile)| !bag.remaining().contains(&tile)));
    }

    #[test]
    fn random_rack_empty() {
        let mut rack = Rack::new();
        let mut bag = LetterBag::new();

        let rack_len = random_rack(&mut rand::thread_rng(), &mut rack, &mut bag);

        assert!((1..=RACK_LEN).contains(&rack_len));
        assert_eq!(rack_len, rack.len());
        assert_eq!(TILES_LEN, rack_len + bag.len());
    }
}
