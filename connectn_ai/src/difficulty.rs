use std::str::FromStr;

use connectn::VictoryCondition;
use rand::rngs::StdRng;

use crate::{CheckOneTurn, RandomPlacement, Strategy};

/// How well a computer player plays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
        }
    }

    /// Creates the strategy that plays towards `victory_condition` at this difficulty.
    pub fn strategy(self, victory_condition: VictoryCondition, rng: StdRng) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomPlacement::new(rng)),
            Difficulty::Moderate => Box::new(CheckOneTurn::new(victory_condition, rng)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for the [`FromStr`] instance of [`Difficulty`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDifficulty {
    pub name: String,
}

impl std::error::Error for UnknownDifficulty {}

impl std::fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No difficulty found with the name {}", self.name)
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    /// Parses a difficulty by its name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Difficulty::Easy, Difficulty::Moderate]
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownDifficulty {
                name: String::from(name),
            })
    }
}
