use crate::{tiles, DeterministicRandom, TileCode, TILES_LEN};
use tracing::trace;

/// This is a bag of all the [tiles](TileCode) that haven't been drawn yet, in the order the
/// game service keeps them.
///
/// # See Also
///
/// * [DeterministicRandom]
/// * [GameState](crate::GameState)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LetterBag {
    remaining: Vec<TileCode>,
}

impl LetterBag {
    /// # Returns
    ///
    /// A full bag of every [tile](TileCode) in code order.
    pub fn new() -> LetterBag {
        LetterBag {
            remaining: tiles().to_vec(),
        }
    }

    /// # Returns
    ///
    /// An empty bag.
    pub fn empty() -> LetterBag {
        LetterBag {
            remaining: Vec::with_capacity(TILES_LEN),
        }
    }

    /// The number of [tiles](TileCode) still in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether every [tile](TileCode) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The undrawn [tiles](TileCode) in bag order.
    #[inline]
    pub fn remaining(&self) -> &[TileCode] {
        &self.remaining
    }

    /// Removes up to `n` [tiles](TileCode) from the bag, each at index
    /// `random.next_u32() % len` of the tiles left at that point. Drawing from an empty bag
    /// stops early without error.
    ///
    /// # Returns
    ///
    /// The drawn [tiles](TileCode) in draw order, fewer than `n` if the bag ran out.
    pub fn draw(&mut self, n: usize, random: &mut DeterministicRandom) -> Vec<TileCode> {
        let mut drawn = Vec::with_capacity(n.min(self.remaining.len()));
        for _ in 0..n {
            if self.remaining.is_empty() {
                break;
            }
            let index = random.next_u32() as usize % self.remaining.len();
            let tile = self.remaining.remove(index);
            trace!(index, tile = tile.code(), "drew tile");
            drawn.push(tile);
        }
        drawn
    }

    /// Appends `tiles` to the end of the bag.
    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = TileCode>) {
        let before = self.remaining.len();
        self.remaining.extend(tiles);
        trace!(returned = self.remaining.len() - before, "returned tiles");
    }

    /// Replays [drawing](LetterBag::draw) every remaining [tile](TileCode) on copies of the bag
    /// and of `random`, leaving both untouched.
    ///
    /// # Returns
    ///
    /// The remaining [tiles](TileCode) in the order they would be drawn.
    pub fn peek_remaining(&self, random: &DeterministicRandom) -> Vec<TileCode> {
        let mut bag = self.clone();
        let mut random = random.clone();
        bag.draw(bag.len(), &mut random)
    }
}

#[cfg(test)]
impl LetterBag {
    /// A mutable reference to `self.remaining`.
    pub fn mut_remaining(&mut self) -> &mut Vec<TileCode> {
        &mut self.remaining
    }
}

impl Default for LetterBag {
    fn default() -> Self {
        LetterBag::new()
    }
}
