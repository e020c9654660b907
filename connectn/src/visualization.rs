use crate::Board;

/// Draws the board with the top row first and the column numbers underneath.
///
/// ```text
/// |   |   |   |
/// | y |   |   |
/// | r | y | r |
/// | 1 | 2 | 3 |
/// ```
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::new();
    for row in (1..=board.height()).rev() {
        for column in 1..=board.width() {
            let icon = board.get(row, column).map_or(' ', |colour| colour.icon());
            result += &format!("| {} ", icon);
        }
        result += "|\n";
    }
    for column in 1..=board.width() {
        result += &format!("| {} ", column);
    }
    result += "|\n";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerColour;

    #[test]
    fn draws_top_row_first() {
        let board = Board::from_layout(
            &["   ", "y  ", "ryr"],
            &[('r', PlayerColour::Red), ('y', PlayerColour::Yellow)],
        );
        assert_eq!(
            visualize_board(&board),
            "|   |   |   |\n| y |   |   |\n| r | y | r |\n| 1 | 2 | 3 |\n"
        );
        assert_eq!(board.to_string(), visualize_board(&board));
    }
}
