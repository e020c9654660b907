mod difficulty;
mod lookahead;
mod random;
pub use difficulty::*;
pub use lookahead::*;
pub use random::*;

use connectn::{Board, BoardFull, PlayerColour};

/// A trait to simplify writing computer players.
pub trait Strategy {
    /// Picks the column to drop the next counter of `colour` into.
    ///
    /// Returns `None` only if the board is full.
    fn choose_column(&mut self, board: &Board, colour: PlayerColour) -> Option<usize>;

    /// Chooses a column and drops the counter into it on the real board.
    fn take_turn(&mut self, board: &mut Board, colour: PlayerColour) -> Result<usize, BoardFull> {
        let column = self.choose_column(board, colour).ok_or(BoardFull)?;
        board
            .drop_counter(colour, column)
            .expect("Strategy chose a column without spare capacity");
        Ok(column)
    }
}
