use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use connectn::{
    ConfigurationError, PlayerColour, VictoryCondition, ALL_COLOURS, MIN_BOARD_DIMENSION,
};
use connectn_ai::Difficulty;

const BOARD_WIDTH_KEY: &str = "board.width";
const BOARD_HEIGHT_KEY: &str = "board.height";
const NUMBER_OF_PLAYERS_KEY: &str = "players.number";
const VICTORY_COUNTERS_KEY: &str = "players.victory.counters";
const AI_DIFFICULTY_KEY: &str = "ai.difficulty";
const PLAYER_COLOUR_SUFFIX: &str = ".colour";
const PLAYER_AI_SUFFIX: &str = ".ai";
const PLAYER_AI_DIFFICULTY_SUFFIX: &str = ".ai.difficulty";
const PLAYER_VICTORY_COUNTERS_SUFFIX: &str = ".victory.counters";

pub const DEFAULT_BOARD_WIDTH: usize = 6;
pub const DEFAULT_BOARD_HEIGHT: usize = 7;
pub const MIN_PLAYERS: usize = 2;
/// Every player needs their own colour.
pub const MAX_PLAYERS: usize = 8;

/// Raw key-value pairs, as read from a properties file.
pub type Properties = BTreeMap<String, String>;

/// Parses the properties file format.
///
/// A key ends at the first unescaped `=`, `:` or whitespace, so `key=value`,
/// `key: value` and `key value` are all accepted. Blank lines and lines
/// starting with `#` or `!` are ignored. A line ending in an odd number of
/// backslashes continues on the next line. Backslash escapes (`\t`, `\n`,
/// `\uXXXX`, `\=` etc.) are resolved in keys and values.
pub fn parse_properties(text: &str) -> Properties {
    let mut properties = Properties::new();
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let mut logical_line = String::from(line);
        while ends_with_continuation(&logical_line) {
            logical_line.pop();
            match lines.next() {
                Some(next) => logical_line.push_str(next.trim_start()),
                None => break,
            }
        }
        let (key, value) = split_key_value(&logical_line);
        properties.insert(unescape(key), unescape(value));
    }
    properties
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

// The separator may be surrounded by whitespace, and whitespace alone also separates
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let key_end = line
        .char_indices()
        .find(|&(_, c)| {
            let is_separator = !escaped && (c == '=' || c == ':' || c.is_whitespace());
            escaped = !escaped && c == '\\';
            is_separator
        })
        .map_or(line.len(), |(idx, _)| idx);
    let rest = line[key_end..].trim_start();
    let rest = rest.strip_prefix(&['=', ':'][..]).unwrap_or(rest);
    (&line[..key_end], rest.trim_start())
}

fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('f') => result.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => result.push(decoded),
                    None => {
                        result.push_str("\\u");
                        result.push_str(&hex);
                    }
                }
            }
            Some(other) => result.push(other),
            None => {}
        }
    }
    result
}

/// The complete, validated setup of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// In turn order.
    pub players: Vec<PlayerConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    pub colour: PlayerColour,
    /// `None` for a human player.
    pub computer: Option<Difficulty>,
    pub victory_condition: VictoryCondition,
}

// Whatever the properties say about one player, before defaults are applied.
#[derive(Default)]
struct PartialPlayerConfig {
    colour: Option<PlayerColour>,
    computer: Option<bool>,
    difficulty: Option<Difficulty>,
    victory_condition: Option<VictoryCondition>,
}

impl GameConfig {
    /// Reads a properties file, see [`Self::from_properties()`].
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not find or open file {}", path.display()))?;
        let config = Self::from_properties(&parse_properties(&text))
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// A three-player game on the default board, where every player needs
    /// `counters` in a row. Only 3 to 6 counters are allowed.
    pub fn connect_n(counters: usize) -> Result<Self, ConfigurationError> {
        if !(3..=6).contains(&counters) {
            return Err(ConfigurationError::CountersOutOfRange { counters });
        }
        let properties = Properties::from([
            (String::from(VICTORY_COUNTERS_KEY), counters.to_string()),
            (String::from(NUMBER_OF_PLAYERS_KEY), String::from("3")),
        ]);
        Self::from_properties(&properties)
    }

    /// Builds the game configuration, filling in defaults for everything the
    /// properties leave out.
    ///
    /// Players without a colour get the first colours nobody asked for. If no
    /// player is explicitly human, the first player without an explicit choice
    /// becomes human. All other players default to computer players.
    pub fn from_properties(properties: &Properties) -> Result<Self, ConfigurationError> {
        let width = get_parsed(properties, BOARD_WIDTH_KEY)?.unwrap_or(DEFAULT_BOARD_WIDTH);
        let height = get_parsed(properties, BOARD_HEIGHT_KEY)?.unwrap_or(DEFAULT_BOARD_HEIGHT);
        if width < MIN_BOARD_DIMENSION || height < MIN_BOARD_DIMENSION {
            return Err(ConfigurationError::BoardTooSmall { width, height });
        }

        let num_players = get_parsed(properties, NUMBER_OF_PLAYERS_KEY)?.unwrap_or(MIN_PLAYERS);
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigurationError::InvalidPlayerCount {
                count: num_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let default_difficulty: Difficulty =
            get_parsed(properties, AI_DIFFICULTY_KEY)?.unwrap_or_default();
        let default_victory_condition =
            get_victory_condition(properties, VICTORY_COUNTERS_KEY)?.unwrap_or_default();

        let partial_configs = (1..=num_players)
            .map(|player_number| PartialPlayerConfig::read(properties, player_number))
            .collect::<Result<Vec<_>, _>>()?;

        // Explicit colours are taken first, so that they can't clash with assigned ones
        let mut available_colours = ALL_COLOURS.to_vec();
        for (idx, partial) in partial_configs.iter().enumerate() {
            if let Some(colour) = partial.colour {
                match available_colours.iter().position(|&c| c == colour) {
                    Some(pos) => {
                        available_colours.remove(pos);
                    }
                    None => {
                        return Err(ConfigurationError::DuplicateColour {
                            player_number: idx + 1,
                            colour,
                        })
                    }
                }
            }
        }
        let mut available_colours = available_colours.into_iter();

        let mut has_human = partial_configs.iter().any(|p| p.computer == Some(false));
        let smallest_dimension = width.min(height);
        let mut players = Vec::with_capacity(num_players);
        for partial in partial_configs {
            let is_computer = match partial.computer {
                Some(is_computer) => is_computer,
                None if !has_human => {
                    has_human = true;
                    false
                }
                None => true,
            };
            let colour = match partial.colour {
                Some(colour) => colour,
                None => available_colours
                    .next()
                    .ok_or(ConfigurationError::InvalidPlayerCount {
                        count: num_players,
                        min: MIN_PLAYERS,
                        max: MAX_PLAYERS,
                    })?,
            };
            let victory_condition = partial
                .victory_condition
                .unwrap_or(default_victory_condition);
            // Nobody can connect 5 in a row on a 4x4 board
            if victory_condition.consecutive_counters_required() > smallest_dimension {
                return Err(ConfigurationError::UnreachableVictoryCondition {
                    required: victory_condition.consecutive_counters_required(),
                    smallest_dimension,
                });
            }
            players.push(PlayerConfig {
                colour,
                computer: is_computer.then(|| partial.difficulty.unwrap_or(default_difficulty)),
                victory_condition,
            });
        }

        Ok(Self {
            width,
            height,
            players,
        })
    }
}

impl Default for GameConfig {
    /// Standard two-player Connect Four, a human against a computer.
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            players: vec![
                PlayerConfig {
                    colour: PlayerColour::Red,
                    computer: None,
                    victory_condition: VictoryCondition::default(),
                },
                PlayerConfig {
                    colour: PlayerColour::Yellow,
                    computer: Some(Difficulty::default()),
                    victory_condition: VictoryCondition::default(),
                },
            ],
        }
    }
}

impl PartialPlayerConfig {
    fn read(properties: &Properties, player_number: usize) -> Result<Self, ConfigurationError> {
        let prefix = format!("player{}", player_number);
        Ok(Self {
            colour: get_parsed(properties, &(prefix.clone() + PLAYER_COLOUR_SUFFIX))?,
            computer: get_parsed(properties, &(prefix.clone() + PLAYER_AI_SUFFIX))?,
            difficulty: get_parsed(properties, &(prefix.clone() + PLAYER_AI_DIFFICULTY_SUFFIX))?,
            victory_condition: get_victory_condition(
                properties,
                &(prefix + PLAYER_VICTORY_COUNTERS_SUFFIX),
            )?,
        })
    }
}

fn get_parsed<T: FromStr>(
    properties: &Properties,
    key: &str,
) -> Result<Option<T>, ConfigurationError> {
    properties
        .get(key)
        .map(|value| {
            value
                .trim()
                .to_ascii_lowercase()
                .parse::<T>()
                .map_err(|_| ConfigurationError::InvalidValue {
                    key: String::from(key),
                    value: value.clone(),
                })
        })
        .transpose()
}

fn get_victory_condition(
    properties: &Properties,
    key: &str,
) -> Result<Option<VictoryCondition>, ConfigurationError> {
    get_parsed::<usize>(properties, key)?
        .map(VictoryCondition::new)
        .transpose()
}
