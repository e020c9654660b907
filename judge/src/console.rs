use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::warn;

/// Line-based input and output with the people playing.
///
/// Implementing `write_fmt()` makes `write!` and `writeln!` work on any console.
pub trait Console {
    /// Blocks until a line of input is available.
    ///
    /// Returns `None` if reading failed or the input has ended.
    fn read_line(&mut self) -> Option<String>;

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()>;

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.write_fmt(format_args!("{}", text))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_fmt(format_args!("{}\n", line))
    }

    fn blank_line(&mut self) -> io::Result<()> {
        self.write_line("")
    }
}

/// A console on top of any reader/writer pair, such as stdin and stdout.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading.
    // Should always be empty before and after read_line().
    buf: String,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> Option<String> {
        // Prompts don't end in a newline, so make sure they are visible
        if let Err(err) = self.output.flush() {
            warn!(%err, "Could not flush output");
        }
        let line = match self.input.read_line(&mut self.buf) {
            Ok(0) => {
                warn!("Input has ended");
                None
            }
            Ok(_) => Some(String::from(self.buf.trim_end_matches(&['\r', '\n'][..]))),
            Err(err) => {
                warn!(%err, "Could not read input");
                None
            }
        };
        self.buf.clear();
        line
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.output.write_fmt(args)
    }
}

/// Replays scripted input and collects everything written, for tests.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    pub input: std::collections::VecDeque<Option<&'static str>>,
    pub output: String,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(input: &[Option<&'static str>]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: String::new(),
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front().flatten().map(String::from)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.output.push_str(&args.to_string());
        Ok(())
    }
}
