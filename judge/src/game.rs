use connectn::{Board, ConfigurationError};
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::TurnError;
use crate::instructions::print_instructions;
use crate::player::Player;
use crate::turn::{execute_turn, TurnOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove { player_idx: usize },
    GameOver(GameResult),
}

/// One game on a single live board. Players move in the order they were given.
pub struct Game<'c> {
    board: Board,
    players: Vec<Player>,
    state: GameState,
    console: &'c mut dyn Console,
}

impl<'c> Game<'c> {
    /// Panics if `players` is empty.
    pub fn new(board: Board, players: Vec<Player>, console: &'c mut dyn Console) -> Self {
        assert!(!players.is_empty(), "A game needs at least one player");
        Self {
            board,
            players,
            state: GameState::AwaitingMove { player_idx: 0 },
            console,
        }
    }

    pub fn from_config(
        config: &GameConfig,
        rng: &mut StdRng,
        console: &'c mut dyn Console,
    ) -> Result<Self, ConfigurationError> {
        let board = Board::new(config.width, config.height)?;
        let players = config
            .players
            .iter()
            .map(|player_config| Player::from_config(player_config, rng))
            .collect();
        Ok(Self::new(board, players, console))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Advances the game by at most one move.
    ///
    /// A full board ends the game as a tie without asking anybody to move.
    /// Once the game is over, this does nothing.
    pub fn step(&mut self) -> Result<GameState, TurnError> {
        let player_idx = match self.state {
            GameState::AwaitingMove { player_idx } => player_idx,
            GameState::GameOver(_) => return Ok(self.state),
        };
        if self.board.is_full() {
            self.state = GameState::GameOver(GameResult::Tie);
            return Ok(self.state);
        }

        let outcome = execute_turn(
            &mut self.players[player_idx],
            &mut self.board,
            &mut *self.console,
        )?;
        self.state = match outcome {
            TurnOutcome::Won => GameState::GameOver(GameResult::WonByPlayer { player_idx }),
            TurnOutcome::BoardFilled => GameState::GameOver(GameResult::Tie),
            TurnOutcome::Normal => GameState::AwaitingMove {
                player_idx: (player_idx + 1) % self.players.len(),
            },
        };
        Ok(self.state)
    }

    /// Plays until somebody wins or the board is full, showing the board
    /// after every move.
    pub fn play(&mut self) -> Result<GameResult, TurnError> {
        print_instructions(&self.players, &mut *self.console)?;
        write!(self.console, "{}", self.board)?;

        let result = loop {
            let state = self.step()?;
            write!(self.console, "{}", self.board)?;
            if let GameState::GameOver(result) = state {
                break result;
            }
            self.console.blank_line()?;
        };

        match result {
            GameResult::WonByPlayer { player_idx } => {
                let colour = self.players[player_idx].colour();
                debug!(%colour, "Game won");
                writeln!(self.console, "{} player wins!", colour)?;
            }
            GameResult::Tie => {
                debug!("Game tied");
                self.console
                    .write_line("No more moves can be made, and no victor has emerged.")?;
                self.console.write_line("The game is a tie!")?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use connectn::{PlayerColour, VictoryCondition};
    use connectn_ai::Difficulty;
    use rand::SeedableRng;

    use super::*;
    use crate::config::parse_properties;
    use crate::console::{ScriptedConsole, TerminalConsole};

    fn two_humans() -> Vec<Player> {
        vec![
            Player::human(PlayerColour::Red, VictoryCondition::new(3).unwrap()),
            Player::human(PlayerColour::Yellow, VictoryCondition::new(3).unwrap()),
        ]
    }

    #[test]
    fn first_to_connect_wins() {
        let mut console = TerminalConsole::new("1\n2\n1\n2\n1\n".as_bytes(), Vec::new());
        let mut game = Game::new(Board::new(3, 3).unwrap(), two_humans(), &mut console);

        let result = game.play().unwrap();
        assert_eq!(result, GameResult::WonByPlayer { player_idx: 0 });
        assert_eq!(
            game.state(),
            GameState::GameOver(GameResult::WonByPlayer { player_idx: 0 })
        );
        assert_eq!(game.board().owner_at(3, 1), Ok(Some(PlayerColour::Red)));
        assert_eq!(game.board().owner_at(3, 2), Ok(None));
        drop(game);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Red player it's your turn!").count(), 3);
        assert_eq!(output.matches("Yellow player it's your turn!").count(), 2);
        assert!(output.ends_with(
            "| r |   |   |\n\
             | r | y |   |\n\
             | r | y |   |\n\
             | 1 | 2 | 3 |\n\
             Red player wins!\n"
        ));
    }

    #[test]
    fn full_board_without_winner_is_a_tie() {
        let moves = "1\n3\n2\n1\n3\n2\n1\n2\n3\n";
        let mut console = TerminalConsole::new(moves.as_bytes(), Vec::new());
        let mut game = Game::new(Board::new(3, 3).unwrap(), two_humans(), &mut console);

        assert_eq!(game.play().unwrap(), GameResult::Tie);
        assert!(game.board().is_full());
        drop(game);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(!output.contains("wins!"));
        assert!(output.ends_with(
            "No more moves can be made, and no victor has emerged.\nThe game is a tie!\n"
        ));
    }

    #[test]
    fn steps_through_turn_order() {
        let mut console = ScriptedConsole::new(&[Some("1"), Some("2"), Some("3"), Some("1")]);
        let players = vec![
            Player::human(PlayerColour::Blue, VictoryCondition::default()),
            Player::human(PlayerColour::Green, VictoryCondition::default()),
            Player::human(PlayerColour::Cyan, VictoryCondition::default()),
        ];
        let mut game = Game::new(Board::new(4, 4).unwrap(), players, &mut console);

        let awaiting = |player_idx| GameState::AwaitingMove { player_idx };
        assert_eq!(game.state(), awaiting(0));
        assert_eq!(game.step().unwrap(), awaiting(1));
        assert_eq!(game.step().unwrap(), awaiting(2));
        assert_eq!(game.step().unwrap(), awaiting(0));
        assert_eq!(game.step().unwrap(), awaiting(1));
        assert_eq!(game.board().owner_at(2, 1), Ok(Some(PlayerColour::Blue)));
    }

    #[test]
    fn full_board_ends_the_game_before_anybody_moves() {
        let board = Board::from_layout(
            &["ryr", "yry", "ryr"],
            &[('r', PlayerColour::Red), ('y', PlayerColour::Yellow)],
        );
        let mut console = ScriptedConsole::new(&[]);
        let mut game = Game::new(board, two_humans(), &mut console);

        assert_eq!(game.step().unwrap(), GameState::GameOver(GameResult::Tie));
        assert_eq!(game.step().unwrap(), GameState::GameOver(GameResult::Tie));
        drop(game);
        assert_eq!(console.output, "");
    }

    #[test]
    fn computers_play_to_the_end() {
        let properties = parse_properties(
            "players.number=3\n\
             players.victory.counters=3\n\
             player1.ai=true\n\
             player2.ai=true\n\
             player2.ai.difficulty=easy\n\
             player3.ai=true",
        );
        let config = GameConfig::from_properties(&properties).unwrap();
        for seed in 0..10 {
            let mut console = ScriptedConsole::new(&[]);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::from_config(&config, &mut rng, &mut console).unwrap();

            let result = game.play().unwrap();
            match result {
                GameResult::WonByPlayer { player_idx } => {
                    assert!(game.players()[player_idx].has_won(game.board()))
                }
                GameResult::Tie => assert!(game.board().is_full()),
            }
            assert_eq!(game.state(), GameState::GameOver(result));
            drop(game);
            assert!(!console.output.contains("it's your turn"));
            assert!(console.output.contains("Red player is thinking..."));
        }
    }

    #[test]
    fn difficulty_from_config_is_used() {
        let properties = parse_properties("player1.ai=true");
        let config = GameConfig::from_properties(&properties).unwrap();
        let mut console = ScriptedConsole::new(&[]);
        let mut rng = StdRng::seed_from_u64(0);
        let game = Game::from_config(&config, &mut rng, &mut console).unwrap();
        let players: Vec<String> = game.players().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            players,
            vec![
                format!("Red - Computer ({})", Difficulty::Moderate),
                String::from("Yellow - Human")
            ]
        );
    }
}
