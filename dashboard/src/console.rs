//! Console commands that stand in for the page's click routing.

use anyhow::{bail, Result};

use dash_picker::navigation::Direction;

pub const HELP: &str = "\
commands:
  toggle | open | close    toggle target / explicit visibility
  pick YYYY-MM-DD          activate a calendar cell
  next | prev              move the displayed months
  outside                  activation outside the picker
  show                     render the open picker
  range                    print the current range
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Open,
    Close,
    Pick(String),
    Navigate(Direction),
    Outside,
    Show,
    Range,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "toggle" | "t" => Command::Toggle,
        "open" => Command::Open,
        "close" => Command::Close,
        "pick" | "p" => match words.next() {
            Some(value) => Command::Pick(value.to_string()),
            None => bail!("pick needs a date, e.g. `pick 2024-01-05`"),
        },
        "next" | "n" => Command::Navigate(Direction::Next),
        "prev" => Command::Navigate(Direction::Prev),
        "outside" => Command::Outside,
        "show" | "s" => Command::Show,
        "range" | "r" => Command::Range,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}` (try `help`)"),
    };
    Ok(Some(cmd))
}
