use connectn::{Board, BoardFull, InvalidMove, PlayerColour, VictoryCondition};
use connectn_ai::{Difficulty, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::PlayerConfig;
use crate::console::Console;
use crate::error::TurnError;

/// Who decides where a player's counters go.
pub enum Controller {
    /// Asks at the console for every move.
    Human,
    Computer {
        difficulty: Difficulty,
        strategy: Box<dyn Strategy>,
    },
}

/// One participant of a game. The colour is the player's identity on the board.
pub struct Player {
    colour: PlayerColour,
    victory_condition: VictoryCondition,
    controller: Controller,
}

impl Player {
    pub fn human(colour: PlayerColour, victory_condition: VictoryCondition) -> Self {
        Self {
            colour,
            victory_condition,
            controller: Controller::Human,
        }
    }

    pub fn computer(
        colour: PlayerColour,
        victory_condition: VictoryCondition,
        difficulty: Difficulty,
        rng: StdRng,
    ) -> Self {
        Self {
            colour,
            victory_condition,
            controller: Controller::Computer {
                difficulty,
                strategy: difficulty.strategy(victory_condition, rng),
            },
        }
    }

    /// Computer players get their own rng, seeded from `rng`.
    pub fn from_config(config: &PlayerConfig, rng: &mut StdRng) -> Self {
        match config.computer {
            Some(difficulty) => Self::computer(
                config.colour,
                config.victory_condition,
                difficulty,
                StdRng::seed_from_u64(rng.gen()),
            ),
            None => Self::human(config.colour, config.victory_condition),
        }
    }

    pub fn colour(&self) -> PlayerColour {
        self.colour
    }

    pub fn victory_condition(&self) -> VictoryCondition {
        self.victory_condition
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.controller, Controller::Computer { .. })
    }

    pub fn has_won(&self, board: &Board) -> bool {
        self.victory_condition.is_achieved_by(self.colour, board)
    }

    /// Drops exactly one counter on the board and returns its column.
    ///
    /// Fails with [`TurnError::BoardFull`] before anybody is asked for a move
    /// if the board has no spare capacity.
    pub fn take_turn(
        &mut self,
        board: &mut Board,
        console: &mut dyn Console,
    ) -> Result<usize, TurnError> {
        if board.is_full() {
            return Err(BoardFull.into());
        }
        let colour = self.colour;
        match &mut self.controller {
            Controller::Human => take_human_turn(colour, board, console),
            Controller::Computer { strategy, .. } => {
                writeln!(console, "{} player is thinking...", colour)?;
                console.blank_line()?;
                Ok(strategy.take_turn(board, colour)?)
            }
        }
    }
}

// Keeps asking until the input names a column that can take the counter
fn take_human_turn(
    colour: PlayerColour,
    board: &mut Board,
    console: &mut dyn Console,
) -> Result<usize, TurnError> {
    writeln!(console, "{} player it's your turn!", colour)?;
    loop {
        console.write_text("Choose a column: ")?;
        let input = match console.read_line() {
            Some(line) => line,
            None => {
                console.write_line("Could not read input")?;
                String::new()
            }
        };
        let dropped = parse_column(&input)
            .and_then(|column| board.drop_counter(colour, column).map(|()| column));
        match dropped {
            Ok(column) => return Ok(column),
            Err(err) => {
                debug!(%colour, %err, "Rejected move");
                writeln!(console, "{}", err)?;
            }
        }
    }
}

fn parse_column(input: &str) -> Result<usize, InvalidMove> {
    let input = input.trim();
    input.parse().map_err(|_| InvalidMove::NotAColumnNumber {
        input: String::from(input),
    })
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.controller {
            Controller::Human => write!(f, "{} - Human", self.colour),
            Controller::Computer { difficulty, .. } => {
                write!(f, "{} - Computer ({})", self.colour, difficulty)
            }
        }
    }
}
