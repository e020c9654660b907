use connectn::{Board, PlayerColour, VictoryCondition};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::random::random_column;
use crate::Strategy;

/// Looks one move ahead: takes an immediately winning move if there is one,
/// otherwise blocks another player's immediately winning move, otherwise
/// places the counter randomly.
///
/// Every candidate move is simulated on a copy of the board and checked
/// against the victory condition this strategy was created for. That same
/// condition is used when checking the other players.
pub struct CheckOneTurn<R = StdRng> {
    victory_condition: VictoryCondition,
    rng: R,
}

impl<R: Rng> CheckOneTurn<R> {
    pub fn new(victory_condition: VictoryCondition, rng: R) -> Self {
        Self {
            victory_condition,
            rng,
        }
    }

    /// The lowest-numbered column in which a counter of `colour` would win straight away.
    pub fn winning_column(&self, board: &Board, colour: PlayerColour) -> Option<usize> {
        board
            .columns_with_spare_capacity()
            .into_iter()
            .find(|&column| is_winning_move(&self.victory_condition, board, colour, column))
    }
}

impl<R: Rng> Strategy for CheckOneTurn<R> {
    fn choose_column(&mut self, board: &Board, colour: PlayerColour) -> Option<usize> {
        if let Some(column) = self.winning_column(board, colour) {
            debug!(%colour, column, "Taking winning move");
            return Some(column);
        }

        // Only the first threatening player found gets blocked, even if
        // several could win next turn.
        let block = board
            .all_players_present()
            .into_iter()
            .filter(|&other| other != colour)
            .find_map(|other| Some((other, self.winning_column(board, other)?)));
        if let Some((other, column)) = block {
            debug!(%colour, %other, column, "Blocking winning move");
            return Some(column);
        }

        random_column(board, &mut self.rng)
    }
}

/// Would dropping a counter of `colour` into `column` achieve the victory condition?
///
/// The move is made on a copy, `board` itself is left untouched. Columns
/// that cannot take the counter are never winning moves.
pub fn is_winning_move(
    victory_condition: &VictoryCondition,
    board: &Board,
    colour: PlayerColour,
    column: usize,
) -> bool {
    let mut speculative = board.clone();
    let wins = speculative.drop_counter(colour, column).is_ok()
        && victory_condition.is_achieved_by(colour, &speculative);
    trace!(%colour, column, wins, "Simulated move");
    wins
}
