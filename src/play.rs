use crate::{Coordinate, Letter, TileCode, BOARD_LEN, TILES_LEN};
use num_derive::FromPrimitive;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies a player account on the game service.
pub type UserId = u64;

/// The `from_x` of a move declining a new game.
pub const DECLINE_CODE: usize = 97;
/// The `from_x` of a move resigning after failing to play in time.
pub const TIMEOUT_CODE: usize = 99;
/// The `from_x` of a move winning the game.
pub const WIN_CODE: usize = 100;
/// The `from_x` of a move exchanging [tiles](TileCode) with the bag.
pub const EXCHANGE_CODE: usize = 101;

/// The text the game service sends for a move with no placements.
const NULL_TEXT: &str = "(null)";

/// What a single square of a move's span holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Placement {
    /// The square already holds a [tile](TileCode) that the move reads through.
    Existing,
    /// A lettered [tile](TileCode) from the rack, or a blank whose letter was assigned
    /// earlier in the game.
    Tile(TileCode),
    /// A blank from the rack together with the letter it is played as.
    Blank {
        /// The blank [tile](TileCode), code `0` or `1`.
        tile: TileCode,
        /// The letter chosen for the blank.
        letter: Letter,
    },
}

impl Placement {
    /// # Returns
    ///
    /// The [tile](TileCode) taken from the rack, or [None] for [Placement::Existing].
    #[inline]
    pub fn tile(self) -> Option<TileCode> {
        match self {
            Placement::Existing => None,
            Placement::Tile(tile) | Placement::Blank { tile, .. } => Some(tile),
        }
    }
}

/// The placements of a move, one per square of its span in order, or the
/// [tiles](TileCode) handed back for a non-placement [event](Event).
///
/// Parses from and displays as the game service's move text, e.g. `"81,*,0,S,"`: one
/// comma-terminated token per entry where `*` is an [existing](Placement::Existing) tile,
/// a number is a [tile code](TileCode), and a letter after a blank's code is the letter it is
/// played as. `(null)` is the empty list.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Placements(SmallVec<[Placement; BOARD_LEN]>);

impl Placements {
    /// # Returns
    ///
    /// An empty list of placements.
    pub fn new() -> Placements {
        Placements::default()
    }

    /// The number of placements, including [existing](Placement::Existing) squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no placements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An [iterator](Iterator) over the placements in order.
    pub fn iter(&self) -> impl Iterator<Item = Placement> + '_ {
        self.0.iter().copied()
    }

    /// An [iterator](Iterator) over the [tiles](TileCode) taken from the rack, skipping
    /// [existing](Placement::Existing) squares.
    pub fn tiles(&self) -> impl Iterator<Item = TileCode> + '_ {
        self.iter().filter_map(Placement::tile)
    }
}

impl FromIterator<Placement> for Placements {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Placements(iter.into_iter().collect())
    }
}

impl FromIterator<TileCode> for Placements {
    fn from_iter<I: IntoIterator<Item = TileCode>>(iter: I) -> Self {
        iter.into_iter().map(Placement::Tile).collect()
    }
}

/// Describes the reason why move text could not be parsed into [placements](Placements).
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum ParsePlacementsError {
    /// A number that is not a [tile code](TileCode).
    #[error("`{code}` is not a tile code below {}", TILES_LEN)]
    InvalidTileCode {
        /// The out-of-range number.
        code: u64,
    },
    /// A letter that does not follow a blank's code.
    #[error("letter `{token}` does not follow a blank")]
    UnexpectedLetter {
        /// The stray letter token.
        token: String,
    },
    /// A token that is not `*`, a number, or a letter.
    #[error("`{token}` is not a placement")]
    InvalidToken {
        /// The unrecognised token.
        token: String,
    },
}

impl FromStr for Placements {
    type Err = ParsePlacementsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() || text == NULL_TEXT {
            return Ok(Placements::new());
        }

        let mut placements = Placements::new();
        let mut tokens = text.strip_suffix(',').unwrap_or(text).split(',').peekable();
        while let Some(token) = tokens.next() {
            let token = token.trim();
            if token == "*" {
                placements.0.push(Placement::Existing);
                continue;
            }
            if let Ok(code) = token.parse::<u64>() {
                let tile = u8::try_from(code)
                    .ok()
                    .and_then(TileCode::new)
                    .ok_or(ParsePlacementsError::InvalidTileCode { code })?;
                let letter = if tile.is_blank() {
                    tokens.peek().and_then(|token| letter_token(token))
                } else {
                    None
                };
                if letter.is_some() {
                    tokens.next();
                }
                placements.0.push(match letter {
                    Some(letter) => Placement::Blank { tile, letter },
                    None => Placement::Tile(tile),
                });
                continue;
            }
            return Err(match letter_token(token) {
                Some(_) => ParsePlacementsError::UnexpectedLetter {
                    token: token.to_owned(),
                },
                None => ParsePlacementsError::InvalidToken {
                    token: token.to_owned(),
                },
            });
        }
        Ok(placements)
    }
}

/// # Returns
///
/// The [letter](Letter) of a single-character alphabetic token.
fn letter_token(token: &str) -> Option<Letter> {
    let mut chars = token.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(char), None) => Letter::from_char(char),
        _ => None,
    }
}

impl fmt::Display for Placements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(NULL_TEXT);
        }
        for placement in self.iter() {
            match placement {
                Placement::Existing => write!(f, "*,")?,
                Placement::Tile(tile) => write!(f, "{},", tile.code())?,
                Placement::Blank { tile, letter } => {
                    write!(f, "{},{},", tile.code(), letter.as_char())?
                }
            }
        }
        Ok(())
    }
}

/// The direction tag the game service attaches to every placement move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Orientation {
    /// A line of squares along a row.
    Horizontal = 1,
    /// A line of squares along a column.
    Vertical = 2,
    /// A single square.
    SingleTile = 3,
}

impl Orientation {
    /// # Returns
    ///
    /// The orientation for a protocol tag, or [None] for an unknown tag.
    pub fn from_tag(tag: u8) -> Option<Orientation> {
        num::FromPrimitive::from_u8(tag)
    }

    /// The protocol tag of the orientation.
    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// A move that does not place [tiles](TileCode), signalled by a `from_x` past the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Event {
    /// The player passed. Any listed [tiles](TileCode) go back to the bag.
    Passed {
        /// The `from_x` the pass was sent with.
        code: usize,
    },
    /// The player exchanged the listed [tiles](TileCode) with the bag.
    Exchanged,
    /// The player declined the game.
    Declined,
    /// The player resigned by failing to play in time.
    TimedOut,
    /// The game was won, settling the remaining racks.
    Won,
    /// Some other code that ends the game.
    Ended {
        /// The `from_x` the event was sent with.
        code: usize,
    },
}

impl Event {
    /// # Returns
    ///
    /// The event signalled by `from_x`, or [None] for a square on the board.
    pub fn from_code(code: usize) -> Option<Event> {
        match code {
            code if code < BOARD_LEN => None,
            DECLINE_CODE => Some(Event::Declined),
            TIMEOUT_CODE => Some(Event::TimedOut),
            WIN_CODE => Some(Event::Won),
            EXCHANGE_CODE => Some(Event::Exchanged),
            code if (DECLINE_CODE..=WIN_CODE).contains(&code) => Some(Event::Ended { code }),
            code => Some(Event::Passed { code }),
        }
    }

    /// The `from_x` the event is sent with.
    pub fn code(self) -> usize {
        match self {
            Event::Passed { code } | Event::Ended { code } => code,
            Event::Exchanged => EXCHANGE_CODE,
            Event::Declined => DECLINE_CODE,
            Event::TimedOut => TIMEOUT_CODE,
            Event::Won => WIN_CODE,
        }
    }

    /// Whether the event ends the game.
    #[inline]
    pub fn is_terminal(self) -> bool {
        (DECLINE_CODE..=WIN_CODE).contains(&self.code())
    }
}

/// One move record of a game as the game service reports it.
///
/// Owned by the caller and only read while it is [added](crate::GameState::add_move).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    /// The service's id of the move.
    pub id: u64,
    /// The service's id of the game the move belongs to.
    pub game_id: u64,
    /// The player who made the move.
    pub user_id: UserId,
    /// The column of the first square, or an [event](Event) code past the board.
    pub from_x: usize,
    /// The row of the first square.
    pub from_y: usize,
    /// The column of the last square.
    pub to_x: usize,
    /// The row of the last square.
    pub to_y: usize,
    /// The zero-based position of the move in the game, assigned on add when [None].
    pub move_index: Option<usize>,
    /// One placement per square of the span, or the handed back tiles of an event.
    pub placements: Placements,
    /// The service's checksum of the board after the move. [None] or `Some(0)` is not yet
    /// known.
    pub declared_checksum: Option<i32>,
    /// The service's direction tag, adopted when [None].
    pub declared_orientation: Option<Orientation>,
    /// When the service recorded the move.
    pub created_at: Option<String>,
}

impl Move {
    /// # Returns
    ///
    /// A move by `user_id` placing `placements` over the squares from `from` to `to`.
    pub fn play(
        user_id: UserId,
        (from_x, from_y): Coordinate,
        (to_x, to_y): Coordinate,
        placements: Placements,
    ) -> Move {
        Move {
            id: 0,
            game_id: 0,
            user_id,
            from_x,
            from_y,
            to_x,
            to_y,
            move_index: None,
            placements,
            declared_checksum: None,
            declared_orientation: None,
            created_at: None,
        }
    }

    /// # Returns
    ///
    /// A move by `user_id` signalling `event` and handing back `tiles`.
    pub fn event(user_id: UserId, event: Event, tiles: Placements) -> Move {
        let code = event.code();
        Move::play(user_id, (code, code), (code, code), tiles)
    }

    /// Sets the service's ids of the move and its game.
    pub fn with_ids(mut self, id: u64, game_id: u64) -> Move {
        self.id = id;
        self.game_id = game_id;
        self
    }

    /// Sets the position of the move in the game.
    pub fn with_index(mut self, move_index: usize) -> Move {
        self.move_index = Some(move_index);
        self
    }

    /// Sets the service's checksum of the board after the move.
    pub fn with_checksum(mut self, checksum: i32) -> Move {
        self.declared_checksum = Some(checksum);
        self
    }

    /// Sets the service's direction tag.
    pub fn with_orientation(mut self, orientation: Orientation) -> Move {
        self.declared_orientation = Some(orientation);
        self
    }

    /// The first square of the span.
    #[inline]
    pub fn from(&self) -> Coordinate {
        (self.from_x, self.from_y)
    }

    /// The last square of the span.
    #[inline]
    pub fn to(&self) -> Coordinate {
        (self.to_x, self.to_y)
    }

    /// # Returns
    ///
    /// The [event](Event) the move signals, or [None] for a placement move.
    #[inline]
    pub fn event_kind(&self) -> Option<Event> {
        Event::from_code(self.from_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(code: u8) -> TileCode {
        TileCode::new(code).unwrap()
    }

    #[test]
    fn parse_tiles() {
        let placements: Placements = "81,15,51,".parse().unwrap();

        assert_eq!(
            vec![
                Placement::Tile(tile(81)),
                Placement::Tile(tile(15)),
                Placement::Tile(tile(51))
            ],
            placements.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn parse_existing_and_blank() {
        let placements: Placements = "*,0,s,67,".parse().unwrap();

        assert_eq!(
            vec![
                Placement::Existing,
                Placement::Blank {
                    tile: tile(0),
                    letter: Letter::S
                },
                Placement::Tile(tile(67)),
            ],
            placements.iter().collect::<Vec<_>>()
        );
        assert_eq!(vec![tile(0), tile(67)], placements.tiles().collect::<Vec<_>>());
    }

    #[test]
    fn parse_blank_without_letter() {
        let placements: Placements = "1,2,".parse().unwrap();

        assert_eq!(
            vec![Placement::Tile(tile(1)), Placement::Tile(tile(2))],
            placements.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn parse_null_and_empty() {
        assert!("(null)".parse::<Placements>().unwrap().is_empty());
        assert!("".parse::<Placements>().unwrap().is_empty());
    }

    #[test]
    fn parse_without_trailing_comma() {
        let placements: Placements = "5,6".parse().unwrap();

        assert_eq!(2, placements.len());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Err(ParsePlacementsError::InvalidTileCode { code: 104 }),
            "2,104,".parse::<Placements>()
        );
        assert_eq!(
            Err(ParsePlacementsError::UnexpectedLetter {
                token: "S".to_owned()
            }),
            "15,S,".parse::<Placements>()
        );
        assert_eq!(
            Err(ParsePlacementsError::InvalidToken {
                token: "-3".to_owned()
            }),
            "-3,".parse::<Placements>()
        );
    }

    #[test]
    fn display_matches_protocol_text() {
        for text in ["81,15,51,", "*,0,S,67,", "1,", "(null)"] {
            let placements: Placements = text.parse().unwrap();

            assert_eq!(text, placements.to_string());
        }
    }

    #[test]
    fn orientation_tags() {
        assert_eq!(Some(Orientation::Horizontal), Orientation::from_tag(1));
        assert_eq!(Some(Orientation::Vertical), Orientation::from_tag(2));
        assert_eq!(Some(Orientation::SingleTile), Orientation::from_tag(3));
        assert_eq!(None, Orientation::from_tag(0));
        assert_eq!(None, Orientation::from_tag(4));
        assert_eq!(3, Orientation::SingleTile.tag());
    }

    #[test]
    fn event_codes() {
        assert_eq!(None, Event::from_code(0));
        assert_eq!(None, Event::from_code(BOARD_LEN - 1));
        assert_eq!(Some(Event::Passed { code: 15 }), Event::from_code(15));
        assert_eq!(Some(Event::Declined), Event::from_code(DECLINE_CODE));
        assert_eq!(Some(Event::Ended { code: 98 }), Event::from_code(98));
        assert_eq!(Some(Event::TimedOut), Event::from_code(TIMEOUT_CODE));
        assert_eq!(Some(Event::Won), Event::from_code(WIN_CODE));
        assert_eq!(Some(Event::Exchanged), Event::from_code(EXCHANGE_CODE));
        assert_eq!(Some(Event::Passed { code: 102 }), Event::from_code(102));
    }

    #[test]
    fn event_terminal() {
        assert!(Event::Declined.is_terminal());
        assert!(Event::TimedOut.is_terminal());
        assert!(Event::Won.is_terminal());
        assert!(Event::Ended { code: 98 }.is_terminal());
        assert!(!Event::Exchanged.is_terminal());
        assert!(!Event::Passed { code: 20 }.is_terminal());
    }

    #[test]
    fn event_move_round_trip() {
        for event in [Event::Exchanged, Event::Won, Event::Passed { code: 50 }] {
            let mv = Move::event(1, event, Placements::new());

            assert_eq!(Some(event), mv.event_kind());
        }
    }

    #[test]
    fn play_move_builders() {
        let placements: Placements = "81,".parse().unwrap();
        let mv = Move::play(7, (1, 2), (1, 2), placements)
            .with_ids(3, 4)
            .with_index(5)
            .with_checksum(-81)
            .with_orientation(Orientation::SingleTile);

        assert_eq!((1, 2), mv.from());
        assert_eq!((1, 2), mv.to());
        assert_eq!(None, mv.event_kind());
        assert_eq!((3, 4), (mv.id, mv.game_id));
        assert_eq!(Some(5), mv.move_index);
        assert_eq!(Some(-81), mv.declared_checksum);
        assert_eq!(Some(Orientation::SingleTile), mv.declared_orientation);
    }
}
