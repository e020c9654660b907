use std::str::FromStr;

/// The colour of a player's counters.
///
/// A player is identified by its colour alone: two counters of the same
/// colour always belong to the same player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PlayerColour {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
    Cyan,
    White,
}

/// Every colour, in the order in which unassigned colours are handed out.
pub static ALL_COLOURS: [PlayerColour; 8] = [
    PlayerColour::Red,
    PlayerColour::Yellow,
    PlayerColour::Blue,
    PlayerColour::Green,
    PlayerColour::Purple,
    PlayerColour::Orange,
    PlayerColour::Cyan,
    PlayerColour::White,
];

impl PlayerColour {
    /// The user-friendly name of the colour.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerColour::Red => "Red",
            PlayerColour::Yellow => "Yellow",
            PlayerColour::Blue => "Blue",
            PlayerColour::Green => "Green",
            PlayerColour::Purple => "Purple",
            PlayerColour::Orange => "Orange",
            PlayerColour::Cyan => "Cyan",
            PlayerColour::White => "White",
        }
    }

    /// The single character used to draw this colour's counters on the board.
    pub fn icon(&self) -> char {
        match self {
            PlayerColour::Red => 'r',
            PlayerColour::Yellow => 'y',
            PlayerColour::Blue => 'b',
            PlayerColour::Green => 'g',
            PlayerColour::Purple => 'p',
            PlayerColour::Orange => 'o',
            PlayerColour::Cyan => 'c',
            PlayerColour::White => 'w',
        }
    }
}

impl std::fmt::Display for PlayerColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for the [`FromStr`] instance of [`PlayerColour`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColour {
    pub name: String,
}

impl std::error::Error for UnknownColour {}

impl std::fmt::Display for UnknownColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There is no colour called {}", self.name)
    }
}

impl FromStr for PlayerColour {
    type Err = UnknownColour;

    /// Parses a colour by its name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ALL_COLOURS
            .iter()
            .copied()
            .find(|colour| colour.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownColour {
                name: String::from(name),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn icons_and_names_are_distinct() {
        let icons: BTreeSet<char> = ALL_COLOURS.iter().map(PlayerColour::icon).collect();
        let names: BTreeSet<&str> = ALL_COLOURS.iter().map(PlayerColour::name).collect();
        assert_eq!(icons.len(), ALL_COLOURS.len());
        assert_eq!(names.len(), ALL_COLOURS.len());
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("RED".parse(), Ok(PlayerColour::Red));
        assert_eq!("purple".parse(), Ok(PlayerColour::Purple));
        assert_eq!(" Cyan ".parse(), Ok(PlayerColour::Cyan));
    }

    #[test]
    fn parse_unknown_colour() {
        let err = "magenta".parse::<PlayerColour>().unwrap_err();
        assert_eq!(err.to_string(), "There is no colour called magenta");
    }
}
