//! Interactive game setup: names and opponent choice.

use crate::players::{MoveSource, PlayerIdentity, RandomAi};
use crate::{Config, Console, Orchestrator, Seat, SessionError};
use std::io::{BufRead, Write};
use tictactoe::Mark;
use tracing::{debug, info, instrument};

/// Answers accepted as "yes", compared after lowercasing.
const YES: [&str; 4] = ["y", "yes", "д", "да"];
/// Answers accepted as "no", compared after lowercasing.
const NO: [&str; 4] = ["n", "no", "н", "нет"];

/// Reads an answer to a yes/no question, or `None` if it is neither.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    let answer = answer.trim().to_lowercase();
    if YES.contains(&answer.as_str()) {
        Some(true)
    } else if NO.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Reads lines until one is not blank.
pub fn read_non_empty<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String, SessionError> {
    loop {
        let line = console.read_line()?;
        if !line.is_empty() {
            return Ok(line);
        }
    }
}

/// Reads lines until one is a recognised yes or no.
pub fn read_yes_no<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<bool, SessionError> {
    loop {
        let line = console.read_line()?;
        match parse_yes_no(&line) {
            Some(answer) => return Ok(answer),
            None => {
                debug!(input = %line, "Unrecognised yes/no answer");
                console.prompt("Please answer y/n: ")?;
            }
        }
    }
}

/// Asks for the players and builds a ready-to-run game.
///
/// Player 1 is always human and plays X. Player 2 plays O and is either a
/// second human or the computer, named from `config`.
#[instrument(skip_all)]
pub fn configure_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<Orchestrator, SessionError> {
    console.say("=== Tic-tac-toe 3x3 ===")?;
    console.prompt("Player 1 name (X): ")?;
    let first = PlayerIdentity::new(read_non_empty(console)?, Mark::X)?;

    console.prompt("Play against the computer? (y/n): ")?;
    let vs_computer = read_yes_no(console)?;

    let second = if vs_computer {
        let ai = match config.seed() {
            Some(seed) => RandomAi::seeded(*seed),
            None => RandomAi::from_entropy(),
        };
        Seat::new(
            PlayerIdentity::new(config.computer_name().as_str(), Mark::O)?,
            MoveSource::Random(ai),
        )
    } else {
        console.prompt("Player 2 name (O): ")?;
        let name = read_non_empty(console)?;
        Seat::new(PlayerIdentity::new(name, Mark::O)?, MoveSource::Human)
    };

    info!(player_one = %first, player_two = %second.identity(), vs_computer, "Players seated");
    Orchestrator::new(Seat::new(first, MoveSource::Human), second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_yes_no_tokens() {
        for yes in ["y", "Y", "yes", "YES", " Yes ", "д", "Да", "ДА"] {
            assert_eq!(parse_yes_no(yes), Some(true), "{yes}");
        }
        for no in ["n", "N", "no", "No", "н", "Нет"] {
            assert_eq!(parse_yes_no(no), Some(false), "{no}");
        }
        for other in ["", "maybe", "yess", "1"] {
            assert_eq!(parse_yes_no(other), None, "{other}");
        }
    }

    #[test]
    fn test_read_yes_no_reprompts() {
        let mut console = Console::new(Cursor::new("sure\n\nNO\n"), Vec::new());
        assert!(!read_yes_no(&mut console).unwrap());
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Please answer y/n: ").count(), 2);
    }

    #[test]
    fn test_read_non_empty_skips_blank_lines() {
        let mut console = Console::new(Cursor::new("\n   \n  Alice \n"), Vec::new());
        assert_eq!(read_non_empty(&mut console).unwrap(), "Alice");
    }

    #[test]
    fn test_configure_two_humans() {
        let input = "Alice\nn\nBob\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let game = configure_game(&mut console, &Config::default()).unwrap();
        assert_eq!(game.current().name(), "Alice");
        assert_eq!(*game.current().mark(), Mark::X);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.starts_with("=== Tic-tac-toe 3x3 ===\nPlayer 1 name (X): "));
        assert!(out.contains("Player 2 name (O): "));
    }

    #[test]
    fn test_configure_vs_computer_skips_second_name() {
        let input = "Alice\nyes\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let game = configure_game(&mut console, &Config::default()).unwrap();
        assert_eq!(game.current().name(), "Alice");
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(!out.contains("Player 2 name"));
    }

    #[test]
    fn test_configure_end_of_input() {
        let mut console = Console::new(Cursor::new("Alice\n"), Vec::new());
        let err = configure_game(&mut console, &Config::default()).unwrap_err();
        assert!(matches!(err, SessionError::EndOfInput));
    }
}
