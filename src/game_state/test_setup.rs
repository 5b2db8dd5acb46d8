use crate::{
    random_board_from, random_rack, Board, DeterministicRandom, GameState, LetterBag, Player,
    Status, DEFAULT_SEED,
};
use rand::Rng;

impl GameState {
    /// Generates a seeded [GameState] that has not drawn any tiles.
    ///
    /// # Returns
    ///
    /// A [GameState] struct with the properties set to the following:
    /// * `creator`: Player `1` named `creator` with an empty rack.
    /// * `opponent`: Player `2` named `opponent` with an empty rack.
    /// * `bag`: A full bag.
    /// * `seed`: [DEFAULT_SEED].
    /// * everything else as [GameState::new].
    pub fn empty_game_state() -> GameState {
        let mut game_state =
            GameState::new(Player::new(1, "creator"), Player::new(2, "opponent"));
        game_state.set_seed(DEFAULT_SEED);
        game_state
    }

    /// Replaces the seed and generator without drawing any tiles.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = Some(seed);
        self.random = Some(DeterministicRandom::new(seed));
    }

    /// A mutable reference to `self.creator`.
    pub fn mut_creator(&mut self) -> &mut Player {
        &mut self.creator
    }

    /// A mutable reference to `self.opponent`.
    pub fn mut_opponent(&mut self) -> &mut Player {
        &mut self.opponent
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut LetterBag {
        &mut self.bag
    }

    /// A mutable reference to `self.status`.
    pub fn mut_status(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Takes every tile held in either rack out of the bag, so that hand-picked racks keep
    /// each tile in exactly one place.
    pub fn remove_racks_from_bag(&mut self) {
        let held: Vec<_> = self
            .creator
            .rack
            .iter()
            .chain(self.opponent.rack.iter())
            .copied()
            .collect();
        self.bag
            .mut_remaining()
            .retain(|tile| !held.contains(tile));
    }

    /// Draws a random, non-zero number of tiles from the bag into each rack.
    ///
    /// # Returns
    ///
    /// The number of additional tiles in the racks.
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_rack(rng, &mut self.creator.rack, &mut self.bag)
            + random_rack(rng, &mut self.opponent.rack, &mut self.bag)
    }

    /// Draws a random, small, non-zero number of tiles from the bag onto random empty squares.
    ///
    /// # Returns
    ///
    /// The number of additional tiles on the board.
    pub fn random_board<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_board_from(rng, &mut self.board, &mut self.bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, TILES_LEN};

    #[test]
    fn empty_game_state() {
        let game_state = GameState::empty_game_state();

        assert_eq!(LetterBag::new(), game_state.bag);
        assert_eq!(Board::new(), game_state.board);
        assert!(game_state.creator.rack.is_empty());
        assert!(game_state.opponent.rack.is_empty());
        assert_eq!(Some(DEFAULT_SEED), game_state.seed);
        assert_eq!(Some(DeterministicRandom::new(DEFAULT_SEED)), game_state.random);
        assert_eq!(Status::Active, game_state.status);
    }

    #[test]
    fn remove_racks_from_bag() {
        let mut game_state = GameState::empty_game_state();
        let tiles = LetterBag::new().remaining()[..3].to_vec();
        game_state.mut_creator().rack.extend(tiles.iter().copied());

        game_state.remove_racks_from_bag();

        assert_eq!(TILES_LEN - 3, game_state.bag.len());
        assert!(tiles
            .iter()
            .all(|tile| !game_state.bag.remaining().contains(tile)));
    }

    #[test]
    fn random_racks_and_board_conserve_tiles() {
        let mut rng = rand::thread_rng();
        let mut game_state = GameState::empty_game_state();

        let racks = game_state.random_racks(&mut rng);
        let board = game_state.random_board(&mut rng);

        assert_eq!(TILES_LEN, racks + board + game_state.bag.len());
    }

    #[test]
    fn mut_status_ends_game() {
        let mut game_state = GameState::empty_game_state();

        *game_state.mut_status() = Status::Over(Event::Declined);

        assert!(matches!(game_state.status(), Status::Over(_)));
    }
}
