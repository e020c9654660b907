use crate::PlayerColour;

/// The error type for [`Board::drop_counter()`](crate::Board::drop_counter), i.e. for one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    NoSuchColumn { column: usize },
    ColumnFull { column: usize },
    NotAColumnNumber { input: String },
}

impl std::error::Error for InvalidMove {}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::NoSuchColumn { column } => write!(f, "There's no column {}", column),
            InvalidMove::ColumnFull { column } => write!(
                f,
                "No counter can be placed in column {} as the column is full",
                column
            ),
            InvalidMove::NotAColumnNumber { input } => {
                write!(f, "'{}' is not a valid column number", input)
            }
        }
    }
}

/// The error type for [`Board::owner_at()`](crate::Board::owner_at).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub row: usize,
    pub column: usize,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "There is no position at row {}, column {} on the board",
            self.row, self.column
        )
    }
}

/// A move was requested although no column has any space left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardFull;

impl std::error::Error for BoardFull {}

impl std::fmt::Display for BoardFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No counter can be placed as the board is full")
    }
}

/// Describes why a game cannot be set up. The game never starts when this is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    BoardTooSmall {
        width: usize,
        height: usize,
    },
    VictoryConditionTooSmall {
        required: usize,
    },
    UnreachableVictoryCondition {
        required: usize,
        smallest_dimension: usize,
    },
    InvalidPlayerCount {
        count: usize,
        min: usize,
        max: usize,
    },
    DuplicateColour {
        player_number: usize,
        colour: PlayerColour,
    },
    InvalidValue {
        key: String,
        value: String,
    },
    CountersOutOfRange {
        counters: usize,
    },
}

impl std::error::Error for ConfigurationError {}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::BoardTooSmall { width, height } => write!(
                f,
                "A board of size [{}, {}] is too small, neither dimension can be less than 3",
                width, height
            ),
            ConfigurationError::VictoryConditionTooSmall { required } => write!(
                f,
                "Consecutive counters must be > 0, but {} were requested",
                required
            ),
            ConfigurationError::UnreachableVictoryCondition {
                required,
                smallest_dimension,
            } => write!(
                f,
                "Consecutive counters required cannot be > {}, but {} were requested",
                smallest_dimension, required
            ),
            ConfigurationError::InvalidPlayerCount { count, min, max } => write!(
                f,
                "Illegal number of players {} - number of players must be between {} and {} (inclusive)",
                count, min, max
            ),
            ConfigurationError::DuplicateColour {
                player_number,
                colour,
            } => write!(
                f,
                "Player {} cannot use colour {} as this colour is already in use",
                player_number, colour
            ),
            ConfigurationError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for {}", value, key)
            }
            ConfigurationError::CountersOutOfRange { counters } => write!(
                f,
                "Illegal number of counters {}. Must be >2 and <7",
                counters
            ),
        }
    }
}
