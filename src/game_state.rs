use crate::{
    resolve, Blanks, Board, DeterministicRandom, Event, LetterBag, Letter, Move, Orientation,
    Placements, ResolveError, TileCode, UserId, Words, RACK_CAPACITY, RACK_LEN,
};
use either::Either;
pub use game_view::*;
use itertools::Itertools;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info, instrument};

mod game_view;
#[cfg(test)]
mod test_setup;

/// A vector of [tiles](TileCode) held by one player.
///
/// # See Also
///
/// * [RACK_CAPACITY]
/// * [Player]
pub type Rack = SmallVec<[TileCode; RACK_CAPACITY]>;

/// One of the two players of a game.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Player {
    /// The player's account.
    pub id: UserId,
    /// The player's display name.
    pub name: String,
    /// The [tiles](TileCode) the player holds.
    pub rack: Rack,
    /// The player's points, which can go negative when the game is settled.
    pub score: i32,
}

impl Player {
    /// # Returns
    ///
    /// A player with an empty rack and no points.
    pub fn new(id: UserId, name: impl Into<String>) -> Player {
        Player {
            id,
            name: name.into(),
            rack: Rack::new(),
            score: 0,
        }
    }

    /// The sum of the point values of the [tiles](TileCode) in the rack.
    pub fn rack_value(&self) -> i32 {
        self.rack.iter().map(|tile| tile.value()).sum()
    }

    /// # Returns
    ///
    /// The printed [letters](Letter) of the rack in alphabetical order, with [None] for each
    /// blank first.
    pub fn rack_letters(&self) -> Vec<Option<Letter>> {
        self.rack.iter().map(|tile| tile.letter()).sorted().collect()
    }
}

/// Which of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The player who created the game and draws first.
    Creator,
    /// The player invited to the game.
    Opponent,
}

impl Side {
    /// # Returns
    ///
    /// The other side.
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Creator => Side::Opponent,
            Side::Opponent => Side::Creator,
        }
    }
}

/// Whether a game still accepts moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    /// The game accepts moves.
    Active,
    /// The game was ended by the [event](Event).
    Over(Event),
}

/// A move as it was committed to the game.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AppliedMove {
    /// The zero-based position of the move in the game.
    pub move_index: usize,
    /// The side that made the move.
    pub side: Side,
    /// The account that made the move.
    pub user_id: UserId,
    /// The placements or handed back [tiles](TileCode) of the move.
    pub placements: Placements,
    /// The event the move signalled, or [None] for a placement move.
    pub event: Option<Event>,
    /// The number of [tiles](TileCode) the move took from the rack.
    pub tiles_placed: usize,
    /// The points earned by the move, before any settling of racks.
    pub score: i32,
    /// The [words](crate::Word) formed, primary word first.
    pub words: Words,
    /// The board checksum after a placement move.
    pub checksum: Option<i32>,
    /// The direction of a placement move.
    pub orientation: Option<Orientation>,
}

/// Describes the reason why the [seed](GameState::set_random_seed) could not be set.
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum SeedError {
    /// Attempting to seed a game a second time.
    #[error("game is already seeded with {seed}")]
    AlreadySeeded {
        /// The seed the game already has.
        seed: u32,
    },
}

/// Describes the reason why a [move](Move) could not be [added](GameState::add_move).
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AddMoveError {
    /// Attempting to add a move after the game is over.
    #[error("game is over")]
    TerminatedGame,
    /// Attempting to add a move before the game is seeded.
    #[error("game has no random seed")]
    Unseeded,
    /// Attempting to add a move out of order.
    #[error("expected move index {expected} but got {actual}")]
    SequenceError {
        /// The index of the next move.
        expected: usize,
        /// The index the move was sent with.
        actual: usize,
    },
    /// Attempting to add a move by an account that is not playing.
    #[error("user {user_id} is not playing this game")]
    UnknownPlayer {
        /// The account the move was sent by.
        user_id: UserId,
    },
    /// Attempting to use a [tile](TileCode) the acting player does not hold.
    #[error("tile {tile:?} is not in the player's rack")]
    MissingTile {
        /// The missing tile.
        tile: TileCode,
    },
    /// The move itself is invalid against the board.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Describes the reason why a [game record](GameRecord) could not be replayed.
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum RecordError {
    /// The seed could not be set.
    #[error(transparent)]
    Seed(#[from] SeedError),
    /// Some recorded move could not be added.
    #[error(transparent)]
    AddMove(#[from] AddMoveError),
}

/// A game as the game service describes it, to be replayed from the start.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct GameRecord {
    /// The service's id of the game.
    pub game_id: u64,
    /// The player who created the game.
    pub creator: Player,
    /// The invited player.
    pub opponent: Player,
    /// The seed of the game's generator, if the service has sent it.
    pub random_seed: Option<u32>,
    /// The moves of the game in any order.
    pub moves: Vec<Move>,
}

/// Owns the replayed state of one game and commits moves to it.
///
/// Every [tile](TileCode) of the game is always in exactly one of the board, the two racks,
/// and the bag.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The service's id of the game.
    game_id: Option<u64>,
    /// The player who created the game.
    creator: Player,
    /// The invited player.
    opponent: Player,
    /// The tiles played so far.
    board: Board,
    /// The letters of the blanks played so far.
    blanks: Blanks,
    /// The tiles not yet drawn.
    bag: LetterBag,
    /// The seed, once set.
    seed: Option<u32>,
    /// The generator drawing from the bag, once seeded.
    random: Option<DeterministicRandom>,
    /// Whether the game still accepts moves.
    status: Status,
    /// Every committed move in order.
    history: Vec<AppliedMove>,
}

impl GameState {
    /// # Arguments
    ///
    /// * `creator`: The player who created the game. Its rack is emptied and filled when
    /// seeded.
    /// * `opponent`: The invited player. Its rack is emptied and filled when seeded.
    ///
    /// # Returns
    ///
    /// An active, unseeded game with an empty board, empty racks and a full bag.
    pub fn new(mut creator: Player, mut opponent: Player) -> GameState {
        creator.rack.clear();
        opponent.rack.clear();
        GameState {
            game_id: None,
            creator,
            opponent,
            board: Board::new(),
            blanks: Blanks::default(),
            bag: LetterBag::new(),
            seed: None,
            random: None,
            status: Status::Active,
            history: Vec::new(),
        }
    }

    /// Sets the service's id of the game.
    pub fn with_game_id(mut self, game_id: u64) -> GameState {
        self.game_id = Some(game_id);
        self
    }

    /// Replays a [game record](GameRecord): seeds the game if the record has a seed, then
    /// adds its moves ordered by `move_index`. Moves without an index keep their relative
    /// order after the indexed ones.
    ///
    /// # Errors
    ///
    /// * [RecordError::AddMove] Some move could not be [added](GameState::add_move), including
    /// [AddMoveError::Unseeded] when the record has moves but no seed.
    ///
    /// # Returns
    ///
    /// The game with every recorded move committed.
    pub fn from_record(record: GameRecord) -> Result<GameState, RecordError> {
        let GameRecord {
            game_id,
            creator,
            opponent,
            random_seed,
            moves,
        } = record;
        let mut game_state = GameState::new(creator, opponent).with_game_id(game_id);
        if let Some(seed) = random_seed {
            game_state.set_random_seed(seed)?;
        }
        for mv in moves
            .iter()
            .sorted_by_key(|mv| mv.move_index.unwrap_or(usize::MAX))
        {
            game_state.add_move(mv)?;
        }
        Ok(game_state)
    }

    /// Seeds the game's generator with `seed`, then draws [RACK_LEN] tiles for the creator
    /// followed by [RACK_LEN] tiles for the opponent.
    ///
    /// # Errors
    ///
    /// * [SeedError::AlreadySeeded] The game already has a seed. Nothing changes.
    #[instrument(skip(self), fields(game_id = ?self.game_id))]
    pub fn set_random_seed(&mut self, seed: u32) -> Result<(), SeedError> {
        if let Some(existing) = self.seed {
            return Err(SeedError::AlreadySeeded { seed: existing });
        }

        let mut random = DeterministicRandom::new(seed);
        self.creator.rack = self.bag.draw(RACK_LEN, &mut random).into_iter().collect();
        self.opponent.rack = self.bag.draw(RACK_LEN, &mut random).into_iter().collect();
        self.random = Some(random);
        self.seed = Some(seed);

        debug!(bag_len = self.bag.len(), "seeded game");
        Ok(())
    }

    /// Checks the [move](Move) against the game, then commits it all at once: the acting
    /// player's used [tiles](TileCode) leave the rack, replacements are drawn from the bag,
    /// and the move's points are added to the player.
    ///
    /// For a move signalling an [event](Event), the listed tiles are exchanged: replacements
    /// are drawn first, then the listed tiles go back to the end of the bag. A
    /// [win](Event::Won) settles the racks: if the creator's rack is empty the creator gains
    /// the value of the opponent's rack from the opponent, otherwise the creator gives the
    /// value of their own rack to the opponent. [Terminal](Event::is_terminal) events end the
    /// game.
    ///
    /// # Errors
    ///
    /// * [AddMoveError::TerminatedGame] The game is over.
    /// * [AddMoveError::Unseeded] The game has no seed yet.
    /// * [AddMoveError::SequenceError] The move's index is not the next index.
    /// * [AddMoveError::UnknownPlayer] The move is by neither player.
    /// * [AddMoveError::Resolve] The move is invalid against the board. See
    /// [resolve](crate::resolve).
    /// * [AddMoveError::MissingTile] The move uses a tile the player does not hold.
    ///
    /// On any error the game is left unchanged.
    ///
    /// # Returns
    ///
    /// The committed move.
    #[instrument(
        skip_all,
        fields(game_id = ?self.game_id, move_index = ?mv.move_index, user_id = mv.user_id)
    )]
    pub fn add_move(&mut self, mv: &Move) -> Result<&AppliedMove, AddMoveError> {
        if let Status::Over(_) = self.status {
            return Err(AddMoveError::TerminatedGame);
        }
        let Some(random) = &self.random else {
            return Err(AddMoveError::Unseeded);
        };
        let move_index = self.history.len();
        if let Some(actual) = mv.move_index {
            if actual != move_index {
                return Err(AddMoveError::SequenceError {
                    expected: move_index,
                    actual,
                });
            }
        }
        let side = self
            .side_of(mv.user_id)
            .ok_or(AddMoveError::UnknownPlayer {
                user_id: mv.user_id,
            })?;

        let resolution = resolve(&self.board, &self.blanks, mv)?;
        let tiles_placed = resolution
            .as_ref()
            .either(|play| play.tiles_placed(), |event| event.tiles_placed());

        let mut random = random.clone();
        let mut bag = self.bag.clone();
        let mut creator = self.creator.clone();
        let mut opponent = self.opponent.clone();
        let player = match side {
            Side::Creator => &mut creator,
            Side::Opponent => &mut opponent,
        };
        for tile in mv.placements.tiles() {
            let index = player
                .rack
                .iter()
                .position(|&held| held == tile)
                .ok_or(AddMoveError::MissingTile { tile })?;
            player.rack.remove(index);
        }
        player.rack.extend(bag.draw(tiles_placed, &mut random));

        let (applied, placed) = match resolution {
            Either::Left(play) => {
                player.score += play.score;
                let applied = AppliedMove {
                    move_index,
                    side,
                    user_id: mv.user_id,
                    placements: mv.placements.clone(),
                    event: None,
                    tiles_placed,
                    score: play.score,
                    words: play.words,
                    checksum: Some(play.checksum),
                    orientation: Some(play.orientation),
                };
                (applied, Some((play.board, play.blanks)))
            }
            Either::Right(event_play) => {
                bag.return_tiles(event_play.tiles.iter().copied());
                let applied = AppliedMove {
                    move_index,
                    side,
                    user_id: mv.user_id,
                    placements: mv.placements.clone(),
                    event: Some(event_play.event),
                    tiles_placed,
                    score: 0,
                    words: Words::new(),
                    checksum: None,
                    orientation: None,
                };
                (applied, None)
            }
        };

        let status = match applied.event {
            Some(event) if event.is_terminal() => {
                if event == Event::Won {
                    let settled = settle_racks(&mut creator, &mut opponent);
                    debug!(settled, "settled racks");
                }
                Status::Over(event)
            }
            _ => Status::Active,
        };

        if let Some((board, blanks)) = placed {
            self.board = board;
            self.blanks = blanks;
        }
        self.random = Some(random);
        self.bag = bag;
        self.creator = creator;
        self.opponent = opponent;
        self.status = status;

        debug!(
            move_index,
            ?side,
            score = applied.score,
            tiles_placed,
            checksum = ?applied.checksum,
            "committed move"
        );
        if let Status::Over(event) = status {
            info!(
                ?event,
                creator_score = self.creator.score,
                opponent_score = self.opponent.score,
                "game over"
            );
        }

        self.history.push(applied);
        Ok(&self.history[move_index])
    }

    /// # Returns
    ///
    /// The [tiles](TileCode) left in the bag in the order they would be drawn, without
    /// drawing them. An unseeded game is predicted with the generator's default seed.
    pub fn peek_remaining(&self) -> Vec<TileCode> {
        match &self.random {
            Some(random) => self.bag.peek_remaining(random),
            None => self.bag.peek_remaining(&DeterministicRandom::unseeded()),
        }
    }

    /// # Returns
    ///
    /// The printed [letters](Letter) of [peek_remaining](GameState::peek_remaining), with
    /// [None] for a blank.
    pub fn remaining_letters(&self) -> Vec<Option<Letter>> {
        self.peek_remaining()
            .into_iter()
            .map(TileCode::letter)
            .collect()
    }

    /// The checksum of the board as it stands.
    #[inline]
    pub fn board_checksum(&self) -> i32 {
        self.board.checksum()
    }

    /// # Returns
    ///
    /// Which side `user_id` plays, or [None] if neither.
    pub fn side_of(&self, user_id: UserId) -> Option<Side> {
        if user_id == self.creator.id {
            Some(Side::Creator)
        } else if user_id == self.opponent.id {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// The player on `side`.
    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Creator => &self.creator,
            Side::Opponent => &self.opponent,
        }
    }

    /// The tiles played so far.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The letters of the blanks played so far.
    #[inline]
    pub fn blanks(&self) -> &Blanks {
        &self.blanks
    }

    /// Whether the game still accepts moves.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The seed of the game, once set.
    #[inline]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// The service's id of the game.
    #[inline]
    pub fn game_id(&self) -> Option<u64> {
        self.game_id
    }

    /// The number of tiles still in the bag.
    #[inline]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// The index the next move must have.
    #[inline]
    pub fn next_move_index(&self) -> usize {
        self.history.len()
    }

    /// Every committed move in order.
    #[inline]
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }
}

/// Moves the value of one rack to the other player's score. The creator is paid the
/// opponent's rack if the creator's rack is empty, otherwise the creator pays their own rack
/// to the opponent.
///
/// # Returns
///
/// The number of points moved.
fn settle_racks(creator: &mut Player, opponent: &mut Player) -> i32 {
    let (giver, receiver) = if creator.rack.is_empty() {
        (opponent, creator)
    } else {
        (creator, opponent)
    };
    let points = giver.rack_value();
    giver.score -= points;
    receiver.score += points;
    points
}
