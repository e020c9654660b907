use connectn::Board;
use tracing::debug;

use crate::console::Console;
use crate::error::TurnError;
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player who moved achieved their victory condition.
    Won,
    /// The move took the last free cell without anybody winning.
    BoardFilled,
    Normal,
}

/// Lets `player` make one move and evaluates the board afterwards.
///
/// Only the moving player's victory condition is checked.
pub fn execute_turn(
    player: &mut Player,
    board: &mut Board,
    console: &mut dyn Console,
) -> Result<TurnOutcome, TurnError> {
    let column = player.take_turn(board, console)?;
    debug!(colour = %player.colour(), column, "Counter dropped");

    let outcome = if player.has_won(board) {
        TurnOutcome::Won
    } else if board.is_full() {
        TurnOutcome::BoardFilled
    } else {
        TurnOutcome::Normal
    };
    Ok(outcome)
}
