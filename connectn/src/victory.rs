use crate::{Board, ConfigurationError, PlayerColour};

/// Victory by lining up a number of consecutive counters horizontally,
/// vertically or along either diagonal.
///
/// A longer line than required also counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VictoryCondition {
    consecutive_counters_required: usize,
}

impl VictoryCondition {
    pub const DEFAULT_CONSECUTIVE_COUNTERS: usize = 4;

    pub fn new(consecutive_counters_required: usize) -> Result<Self, ConfigurationError> {
        if consecutive_counters_required < 1 {
            return Err(ConfigurationError::VictoryConditionTooSmall {
                required: consecutive_counters_required,
            });
        }
        Ok(Self {
            consecutive_counters_required,
        })
    }

    pub fn consecutive_counters_required(&self) -> usize {
        self.consecutive_counters_required
    }

    /// Has the player with this colour connected enough counters on the board?
    ///
    /// Requiring more counters than fit on the board is not an error, the
    /// condition is then simply never achieved.
    pub fn is_achieved_by(&self, colour: PlayerColour, board: &Board) -> bool {
        self.wins_on_horizontal(colour, board)
            || self.wins_on_vertical(colour, board)
            || self.wins_on_leading_diagonal(colour, board)
            || self.wins_on_counter_diagonal(colour, board)
    }

    fn wins_on_horizontal(&self, colour: PlayerColour, board: &Board) -> bool {
        (1..=board.height()).any(|row| {
            let cells = (1..=board.width()).map(|column| (row, column));
            self.has_run(colour, board, cells)
        })
    }

    fn wins_on_vertical(&self, colour: PlayerColour, board: &Board) -> bool {
        (1..=board.width()).any(|column| {
            let cells = (1..=board.height()).map(|row| (row, column));
            self.has_run(colour, board, cells)
        })
    }

    // Diagonals running down and to the right, started from the left and top
    // edges. Start points whose diagonal is shorter than the required run are
    // skipped.
    fn wins_on_leading_diagonal(&self, colour: PlayerColour, board: &Board) -> bool {
        let required = self.consecutive_counters_required;
        let from_left_edge = (required..=board.height()).rev().map(|row| (row, 1));
        // The top-left corner was already covered by the left edge
        let max_column = (board.width() + 1).saturating_sub(required);
        let from_top_edge = (2..=max_column).map(|column| (board.height(), column));

        from_left_edge.chain(from_top_edge).any(|(start_row, start_column)| {
            let len = start_row.min(board.width() + 1 - start_column);
            let cells = (0..len).map(|i| (start_row - i, start_column + i));
            self.has_run(colour, board, cells)
        })
    }

    // Diagonals running up and to the right, started from the bottom and left
    // edges.
    fn wins_on_counter_diagonal(&self, colour: PlayerColour, board: &Board) -> bool {
        let required = self.consecutive_counters_required;
        let max_column = (board.width() + 1).saturating_sub(required);
        let from_bottom_edge = (1..=max_column).rev().map(|column| (1, column));
        // The bottom-left corner was already covered by the bottom edge
        let max_row = (board.height() + 1).saturating_sub(required);
        let from_left_edge = (2..=max_row).map(|row| (row, 1));

        from_bottom_edge.chain(from_left_edge).any(|(start_row, start_column)| {
            let len = usize::min(board.height() + 1 - start_row, board.width() + 1 - start_column);
            let cells = (0..len).map(|i| (start_row + i, start_column + i));
            self.has_run(colour, board, cells)
        })
    }

    /// Walks along the cells, counting consecutive counters of the colour.
    /// Any other cell resets the count.
    fn has_run(
        &self,
        colour: PlayerColour,
        board: &Board,
        cells: impl Iterator<Item = (usize, usize)>,
    ) -> bool {
        let mut consecutive_count = 0;
        for (row, column) in cells {
            if board.get(row, column) == Some(colour) {
                consecutive_count += 1;
                if consecutive_count >= self.consecutive_counters_required {
                    return true;
                }
            } else {
                consecutive_count = 0;
            }
        }
        false
    }
}

impl Default for VictoryCondition {
    fn default() -> Self {
        Self {
            consecutive_counters_required: Self::DEFAULT_CONSECUTIVE_COUNTERS,
        }
    }
}

impl std::fmt::Display for VictoryCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} counters in a row",
            self.consecutive_counters_required
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKED: PlayerColour = PlayerColour::Purple;
    const OTHER: PlayerColour = PlayerColour::Orange;

    fn board(rows: &[&str]) -> Board {
        Board::from_layout(rows, &[('x', CHECKED), ('-', OTHER)])
    }

    fn connect(required: usize) -> VictoryCondition {
        VictoryCondition::new(required).unwrap()
    }

    #[test]
    fn zero_counters_is_rejected() {
        assert_eq!(
            VictoryCondition::new(0),
            Err(ConfigurationError::VictoryConditionTooSmall { required: 0 })
        );
    }

    #[test]
    fn no_win_on_board_too_small() {
        let board = board(&["xxx", "xxx", "xxx"]);
        assert!(!connect(4).is_achieved_by(CHECKED, &board));
        assert!(connect(3).is_achieved_by(CHECKED, &board));
    }

    #[test]
    fn horizontal_win_at_bottom() {
        let left = board(&["     ", "     ", "xxxx "]);
        assert!(connect(4).is_achieved_by(CHECKED, &left));
        let right = board(&["     ", "     ", " xxxx"]);
        assert!(connect(4).is_achieved_by(CHECKED, &right));
    }

    #[test]
    fn horizontal_win_at_top() {
        let board = board(&["xxxx ", "--x--", "--x--"]);
        assert!(connect(4).is_achieved_by(CHECKED, &board));
        assert!(!connect(4).is_achieved_by(OTHER, &board));
        assert!(connect(2).is_achieved_by(OTHER, &board));
        assert!(!connect(3).is_achieved_by(OTHER, &board));
    }

    #[test]
    fn horizontal_win_not_triggered_by_flowing_onto_next_row() {
        let board = board(&["xx xx", "xx xx", "xx xx"]);
        assert!(!connect(4).is_achieved_by(CHECKED, &board));
    }

    #[test]
    fn longer_run_still_wins() {
        let five = board(&["      ", "      ", "xxxxx-"]);
        assert!(connect(4).is_achieved_by(CHECKED, &five));
    }

    #[test]
    fn vertical_win() {
        let bottom_left = board(&["   ", "x  ", "x  ", "x  ", "x  "]);
        assert!(connect(4).is_achieved_by(CHECKED, &bottom_left));
        let top_right = board(&["  x", "  x", "  x", "  x", "  -"]);
        assert!(connect(4).is_achieved_by(CHECKED, &top_right));
    }

    #[test]
    fn vertical_run_interrupted() {
        let board = board(&["x  ", "x  ", "-  ", "x  ", "x  "]);
        assert!(!connect(4).is_achieved_by(CHECKED, &board));
    }

    #[test]
    fn leading_diagonal_win() {
        let board = board(&["x   ", "-x  ", "--x ", "---x"]);
        assert!(connect(4).is_achieved_by(CHECKED, &board));
    }

    #[test]
    fn leading_diagonal_from_top_edge_on_wide_board() {
        let board = board(&["   x   ", "   -x  ", "   --x ", "   ---x"]);
        assert!(connect(4).is_achieved_by(CHECKED, &board));
    }

    #[test]
    fn counter_diagonal_win() {
        let board = board(&["   x", "  x-", " x--", "x---"]);
        assert!(connect(4).is_achieved_by(CHECKED, &board));
    }

    #[test]
    fn counter_diagonal_from_left_edge_on_tall_board() {
        let board = board(&["   x", "  x-", " x--", "x---", "----", "----"]);
        assert!(connect(4).is_achieved_by(CHECKED, &board));
        assert!(connect(4).is_achieved_by(OTHER, &board));
    }

    #[test]
    fn diagonal_interrupted_by_other_player() {
        let board = board(&["   x", "  --", " x--", "x---"]);
        assert!(!connect(4).is_achieved_by(CHECKED, &board));
        assert!(!connect(3).is_achieved_by(CHECKED, &board));
        assert!(connect(3).is_achieved_by(OTHER, &board));
    }

    #[test]
    fn single_counter_wins_when_one_is_required() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(!connect(1).is_achieved_by(CHECKED, &board));
        board.drop_counter(CHECKED, 3).unwrap();
        assert!(connect(1).is_achieved_by(CHECKED, &board));
        assert!(!connect(1).is_achieved_by(OTHER, &board));
    }

    #[test]
    fn unreachable_condition_never_achieved() {
        let board = board(&["xxx", "xxx", "xxx"]);
        assert!(!connect(10).is_achieved_by(CHECKED, &board));
    }

    #[test]
    fn display() {
        let default = VictoryCondition::default();
        assert_eq!(default.to_string(), "4 counters in a row");
    }
}
