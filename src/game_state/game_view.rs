use crate::{AppliedMove, Board, GameState, Rack, Side, Status};

/// Immutably borrows properties from [GameState] visible to both players.
#[derive(Debug)]
pub struct GameView<'a> {
    /// The tiles played so far.
    pub board: &'a Board,
    /// The number of tiles still in the bag.
    pub bag_len: usize,
    /// The creator's points.
    pub creator_score: i32,
    /// The opponent's points.
    pub opponent_score: i32,
    /// The number of tiles in the creator's rack.
    pub creator_rack_len: usize,
    /// The number of tiles in the opponent's rack.
    pub opponent_rack_len: usize,
    /// Whether the game still accepts moves.
    pub status: Status,
    /// The checksum of the board.
    pub checksum: i32,
    /// Every committed move in order.
    pub history: &'a [AppliedMove],
}

impl GameState {
    /// # Returns
    ///
    /// A new [GameView] struct, which immutably borrows properties from [GameState], but
    /// with the bag replaced by its length and each rack replaced by the number of tiles in it.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: self.board(),
            bag_len: self.bag_len(),
            creator_score: self.player(Side::Creator).score,
            opponent_score: self.player(Side::Opponent).score,
            creator_rack_len: self.player(Side::Creator).rack.len(),
            opponent_rack_len: self.player(Side::Opponent).rack.len(),
            status: self.status(),
            checksum: self.board_checksum(),
            history: self.history(),
        }
    }

    /// # Returns
    ///
    /// The tiles held by the player on `side`, private to that player.
    pub fn get_rack(&self, side: Side) -> &Rack {
        &self.player(side).rack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_seed, Event, Move, Placements, TILES_LEN};

    #[test]
    fn view_after_seed() {
        let mut rng = rand::thread_rng();
        let mut game_state = GameState::empty_game_state();
        game_state.random_racks(&mut rng);
        let placed = game_state.random_board(&mut rng);

        let view = game_state.view();

        assert_eq!(game_state.board(), view.board);
        assert_eq!(placed, view.board.occupied_len());
        assert_eq!(
            TILES_LEN,
            view.bag_len + view.creator_rack_len + view.opponent_rack_len + placed
        );
        assert_eq!(Status::Active, view.status);
        assert_eq!(game_state.board_checksum(), view.checksum);
        assert!(view.history.is_empty());
    }

    #[test]
    fn view_tracks_moves() {
        let mut rng = rand::thread_rng();
        let mut game_state = GameState::empty_game_state();
        game_state.set_seed(random_seed(&mut rng));
        game_state.random_racks(&mut rng);
        let creator_rack_len = game_state.get_rack(Side::Creator).len();
        let creator = game_state.player(Side::Creator).id;
        let mv = Move::event(creator, Event::Won, Placements::new());
        game_state.add_move(&mv).unwrap();

        let view = game_state.view();

        assert_eq!(1, view.history.len());
        assert_eq!(Status::Over(Event::Won), view.status);
        assert_eq!(
            -view.opponent_score,
            view.creator_score,
            "settled points move between players"
        );
        assert!(view.creator_score < 0);
        assert_eq!(creator_rack_len, view.creator_rack_len);
    }

    #[test]
    fn get_rack_each_side() {
        let mut game_state = GameState::empty_game_state();
        game_state.random_racks(&mut rand::thread_rng());

        for side in [Side::Creator, Side::Opponent] {
            assert_eq!(&game_state.player(side).rack, game_state.get_rack(side));
            assert_ne!(
                game_state.get_rack(side),
                game_state.get_rack(side.other())
            );
        }
    }
}
