use connectn::BoardFull;

#[derive(Debug)]
/// Error type for one turn.
///
/// Invalid moves never show up here, human players are asked again until
/// they pick a legal column.
pub enum TurnError {
    /// A move was requested although no column has spare capacity.
    BoardFull,
    /// Talking to the people playing failed.
    Console(std::io::Error),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::BoardFull => Some(&BoardFull),
            TurnError::Console(err) => Some(err),
        }
    }
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::BoardFull => write!(f, "Could not take a turn"),
            TurnError::Console(_) => write!(f, "Could not write to the console"),
        }
    }
}

impl From<BoardFull> for TurnError {
    fn from(_: BoardFull) -> Self {
        TurnError::BoardFull
    }
}

impl From<std::io::Error> for TurnError {
    fn from(err: std::io::Error) -> Self {
        TurnError::Console(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn board_full_is_the_source() {
        let err = TurnError::from(BoardFull);
        assert_eq!(err.to_string(), "Could not take a turn");
        assert_eq!(
            err.source().map(|src| src.to_string()).as_deref(),
            Some("No counter can be placed as the board is full")
        );
    }
}
