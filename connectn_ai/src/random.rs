use connectn::{Board, PlayerColour};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::Strategy;

/// Drops every counter into a random column with spare capacity. No attempt
/// is made at assessing the board.
pub struct RandomPlacement<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomPlacement<R> {
    fn choose_column(&mut self, board: &Board, colour: PlayerColour) -> Option<usize> {
        let column = random_column(board, &mut self.rng);
        trace!(%colour, ?column, "Random placement");
        column
    }
}

/// Picks uniformly among the columns with spare capacity, consulting the rng once.
pub(crate) fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.columns_with_spare_capacity().choose(rng).copied()
}
