use crate::{
    adjacent_coordinates, bonus_at, line, on_board, Axis, Blanks, Board, Coordinate, Event, Move,
    Orientation, PlaceError, Placement, TileCode, BINGO_BONUS, RACK_LEN, WORDS_CAPACITY,
};
use bimap::BiBTreeMap;
use either::Either;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::warn;

/// A word formed by a move and the points it contributed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Word {
    /// The letters of the word in reading order.
    pub letters: String,
    /// The points the word added to the move's score.
    pub points: i32,
}

/// A vector of [words](Word) formed by one move, primary word first.
///
/// # See Also
///
/// * [WORDS_CAPACITY]
/// * [Play]
pub type Words = SmallVec<[Word; WORDS_CAPACITY]>;

/// The outcome of a move that places [tiles](TileCode) on the board.
///
/// Holds the board and blank assignments as they stand after the move. Nothing is
/// committed until the caller adopts them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Play {
    /// The newly placed [tiles](TileCode) by square.
    pub placed: BiBTreeMap<Coordinate, TileCode>,
    /// The total points earned by the move.
    pub score: i32,
    /// The primary word followed by cross-words in the order they were found.
    pub words: Words,
    /// The board with the move applied.
    pub board: Board,
    /// The blank assignments with the move applied.
    pub blanks: Blanks,
    /// The checksum of `board`.
    pub checksum: i32,
    /// The direction the move was read in.
    pub orientation: Orientation,
}

impl Play {
    /// The number of [tiles](TileCode) the move took from the rack.
    #[inline]
    pub fn tiles_placed(&self) -> usize {
        self.placed.len()
    }
}

/// The outcome of a move that signals an [event](Event) instead of placing
/// [tiles](TileCode).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct EventPlay {
    /// The signalled event.
    pub event: Event,
    /// The [tiles](TileCode) listed by the move, exchanged with the bag.
    pub tiles: Vec<TileCode>,
}

impl EventPlay {
    /// The number of [tiles](TileCode) listed by the move.
    #[inline]
    pub fn tiles_placed(&self) -> usize {
        self.tiles.len()
    }
}

/// Describes the reason why a [move](Move) could not be [resolved](resolve).
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum ResolveError {
    /// Attempting to place a [tile](TileCode) on an occupied square.
    #[error("square {coordinate:?} is already occupied")]
    IllegalOverlap {
        /// The occupied square.
        coordinate: Coordinate,
    },
    /// The board after the move does not match the checksum the game service declared.
    #[error("declared board checksum {declared} does not match computed {computed}")]
    ChecksumMismatch {
        /// The nonzero checksum sent with the move.
        declared: i32,
        /// The checksum of the board with the move applied.
        computed: i32,
    },
    /// Attempting to play over squares that are not all on the board.
    #[error("span from {from:?} to {to:?} leaves the board")]
    CoordinatesOutOfBounds {
        /// The first square of the span.
        from: Coordinate,
        /// The last square of the span.
        to: Coordinate,
    },
    /// Attempting to play over squares that do not form a row or column running forward.
    #[error("span from {from:?} to {to:?} is not a forward line")]
    NotInLine {
        /// The first square of the span.
        from: Coordinate,
        /// The last square of the span.
        to: Coordinate,
    },
    /// The number of placements differs from the number of squares in the span.
    #[error("span covers {expected} squares but {actual} placements were given")]
    PlacementsMismatch {
        /// The number of squares in the span.
        expected: usize,
        /// The number of placements.
        actual: usize,
    },
    /// Attempting to read through an [existing](Placement::Existing) tile on an empty square.
    #[error("square {coordinate:?} is marked existing but is empty")]
    ReferencedEmpty {
        /// The empty square.
        coordinate: Coordinate,
    },
    /// Attempting to play a blank without a letter before its slot has one.
    #[error("blank in slot {slot} at {coordinate:?} has no letter")]
    UnassignedBlank {
        /// The square of the blank.
        coordinate: Coordinate,
        /// The slot of the blank.
        slot: usize,
    },
    /// The declared direction tag differs from the direction the move reads in.
    #[error("declared orientation {declared:?} does not match computed {computed:?}")]
    OrientationMismatch {
        /// The tag sent with the move.
        declared: Orientation,
        /// The direction computed from the span.
        computed: Orientation,
    },
}

impl From<PlaceError> for ResolveError {
    fn from(error: PlaceError) -> Self {
        match error {
            PlaceError::IllegalOverlap { coordinate } => {
                ResolveError::IllegalOverlap { coordinate }
            }
            PlaceError::OutOfBounds { coordinate } => ResolveError::CoordinatesOutOfBounds {
                from: coordinate,
                to: coordinate,
            },
        }
    }
}

/// Checks a [move](Move) against `board` and `blanks` and computes what it does, without
/// changing either.
///
/// # Points Calculation
///
/// The value of each newly placed letter is multiplied by its square's letter bonus and
/// summed, then the sum is multiplied by the product of the word bonuses under the newly
/// placed letters. The plain values of existing letters inside the span and of existing
/// letters extending the primary word past either end are added unmultiplied. Each cross-word
/// earns the newly placed letter's bonused value plus the plain values of its neighbours,
/// also unmultiplied. Playing [RACK_LEN] tiles earns an extra [BINGO_BONUS].
///
/// # Errors
///
/// * [ResolveError::CoordinatesOutOfBounds] The span leaves the board.
/// * [ResolveError::NotInLine] The span is not a row or column running forward.
/// * [ResolveError::OrientationMismatch] The declared tag differs from the span's direction.
/// * [ResolveError::PlacementsMismatch] The placements do not cover the span one to one.
/// * [ResolveError::ReferencedEmpty] An existing tile is referenced on an empty square.
/// * [ResolveError::UnassignedBlank] A blank has no letter.
/// * [ResolveError::IllegalOverlap] A tile is placed on an occupied square.
/// * [ResolveError::ChecksumMismatch] The declared checksum is nonzero and wrong.
///
/// # Returns
///
/// Either the [play](Play) with the resulting board for a placement move, or the
/// [event](EventPlay) for a move signalled past the board.
pub fn resolve(
    board: &Board,
    blanks: &Blanks,
    mv: &Move,
) -> Result<Either<Play, EventPlay>, ResolveError> {
    if let Some(event) = mv.event_kind() {
        return Ok(Either::Right(EventPlay {
            event,
            tiles: mv.placements.tiles().collect(),
        }));
    }

    let (from, to) = (mv.from(), mv.to());
    let (axis, orientation) = find_axis(board, from, to)?;
    if let Some(declared) = mv.declared_orientation {
        if declared != orientation {
            return Err(ResolveError::OrientationMismatch {
                declared,
                computed: orientation,
            });
        }
    }

    let span = line(from, to, axis);
    if span.len() != mv.placements.len() {
        return Err(ResolveError::PlacementsMismatch {
            expected: span.len(),
            actual: mv.placements.len(),
        });
    }

    let mut board = board.clone();
    let mut blanks = *blanks;
    let mut placed = BiBTreeMap::new();
    let mut primary = String::with_capacity(span.len());
    let mut placed_sum = 0;
    let mut plain_sum = 0;
    let mut word_multiplier = 1;

    for (&coordinate, placement) in span.iter().zip(mv.placements.iter()) {
        let tile = match placement {
            Placement::Existing => {
                let tile = board
                    .tile(coordinate)
                    .ok_or(ResolveError::ReferencedEmpty { coordinate })?;
                primary.push(letter_at(&blanks, coordinate, tile)?);
                plain_sum += tile.value();
                continue;
            }
            Placement::Tile(tile) => tile,
            Placement::Blank { tile, letter } => {
                if let Some(slot) = tile.blank_slot() {
                    blanks.assign(slot, letter);
                }
                tile
            }
        };

        primary.push(letter_at(&blanks, coordinate, tile)?);
        board.place(coordinate, tile)?;
        placed.insert(coordinate, tile);

        let bonus = bonus_at(coordinate);
        placed_sum += tile.value() * bonus.letter_multiplier();
        word_multiplier *= bonus.word_multiplier();
    }

    // cross-words only meet existing tiles, never other tiles of this move
    let mut crosses = Words::new();
    for (&coordinate, &tile) in placed.iter() {
        let letter_value = tile.value() * bonus_at(coordinate).letter_multiplier();
        let cross = axis.perpendicular();
        let before = run(&board, cross.backward(coordinate));
        let after = run(&board, cross.forward(coordinate));
        if before.is_empty() && after.is_empty() {
            continue;
        }

        let mut letters = String::with_capacity(before.len() + after.len() + 1);
        let mut points = letter_value;
        for &(other, other_tile) in before.iter().rev() {
            letters.push(letter_at(&blanks, other, other_tile)?);
            points += other_tile.value();
        }
        letters.push(letter_at(&blanks, coordinate, tile)?);
        for &(other, other_tile) in after.iter() {
            letters.push(letter_at(&blanks, other, other_tile)?);
            points += other_tile.value();
        }
        crosses.push(Word { letters, points });
    }

    let before = run(&board, axis.backward(from));
    let after = run(&board, axis.forward(to));
    let mut letters = String::with_capacity(before.len() + primary.len() + after.len());
    for &(other, other_tile) in before.iter().rev() {
        letters.push(letter_at(&blanks, other, other_tile)?);
        plain_sum += other_tile.value();
    }
    letters.push_str(&primary);
    for &(other, other_tile) in after.iter() {
        letters.push(letter_at(&blanks, other, other_tile)?);
        plain_sum += other_tile.value();
    }

    let primary_points = placed_sum * word_multiplier + plain_sum;
    let bingo = if placed.len() == RACK_LEN { BINGO_BONUS } else { 0 };
    let score = primary_points + crosses.iter().map(|word| word.points).sum::<i32>() + bingo;

    let mut words = Words::with_capacity(crosses.len() + 1);
    words.push(Word {
        letters,
        points: primary_points,
    });
    words.extend(crosses);

    let checksum = board.checksum();
    match mv.declared_checksum {
        Some(declared) if declared != 0 && declared != checksum => {
            warn!(declared, computed = checksum, "board checksum mismatch");
            return Err(ResolveError::ChecksumMismatch {
                declared,
                computed: checksum,
            });
        }
        _ => {}
    }

    Ok(Either::Left(Play {
        placed,
        score,
        words,
        board,
        blanks,
        checksum,
        orientation,
    }))
}

/// # Returns
///
/// The axis a span from `from` to `to` is read along and its direction tag. A single
/// square reads vertically when a square directly above or below it is occupied.
fn find_axis(
    board: &Board,
    from: Coordinate,
    to: Coordinate,
) -> Result<(Axis, Orientation), ResolveError> {
    if !on_board(from) || !on_board(to) {
        return Err(ResolveError::CoordinatesOutOfBounds { from, to });
    }

    let ((from_x, from_y), (to_x, to_y)) = (from, to);
    if from == to {
        let (above, below) = adjacent_coordinates(from, Axis::Vertical);
        let axis = if [above, below]
            .into_iter()
            .flatten()
            .any(|coordinate| board.is_occupied(coordinate))
        {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        Ok((axis, Orientation::SingleTile))
    } else if from_x == to_x && from_y < to_y {
        Ok((Axis::Vertical, Orientation::Vertical))
    } else if from_y == to_y && from_x < to_x {
        Ok((Axis::Horizontal, Orientation::Horizontal))
    } else {
        Err(ResolveError::NotInLine { from, to })
    }
}

/// Collects the occupied squares of `coordinates` up to the first empty one.
fn run(
    board: &Board,
    coordinates: impl Iterator<Item = Coordinate>,
) -> Vec<(Coordinate, TileCode)> {
    coordinates
        .map_while(|coordinate| board.tile(coordinate).map(|tile| (coordinate, tile)))
        .collect()
}

/// # Returns
///
/// The character `tile` reads as at `coordinate`.
fn letter_at(
    blanks: &Blanks,
    coordinate: Coordinate,
    tile: TileCode,
) -> Result<char, ResolveError> {
    blanks
        .letter_of(tile)
        .map(|letter| letter.as_char())
        .ok_or_else(|| ResolveError::UnassignedBlank {
            coordinate,
            slot: tile.blank_slot().unwrap_or_default(),
        })
}
