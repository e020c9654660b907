use std::io;

use crate::console::Console;
use crate::player::Player;

/// Introduces the players and how each of them wins.
pub fn print_instructions(players: &[Player], console: &mut dyn Console) -> io::Result<()> {
    console.write_line("Welcome to Connect N!")?;
    writeln!(console, "There are {} players:", players.len())?;
    for player in players {
        writeln!(console, "- {}", player)?;
    }
    console.blank_line()?;

    console.write_line("How each player wins:")?;
    for player in players {
        let victory_condition = player.victory_condition();
        writeln!(console, "{}: {}", player.colour(), victory_condition)?;
    }

    if players.iter().any(|player| !player.is_computer()) {
        console.blank_line()?;
        console.write_line(
            "To play the game type in the number of the column you want to drop you counter in",
        )?;
    }
    console.blank_line()
}
