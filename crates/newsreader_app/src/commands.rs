//! Command language of the terminal shell.

use std::str::FromStr;

use newsreader_core::{Category, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Forward a message to the state machine.
    Dispatch(Msg),
    /// Navigate to a route path (feed or article detail).
    Open(String),
    Help,
    Quit,
}

pub(crate) fn parse(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };
    match verb {
        "search" => Ok(Command::Dispatch(Msg::SearchSubmitted(rest.to_string()))),
        "category" => {
            if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                Ok(Command::Dispatch(Msg::CategorySelected(None)))
            } else {
                let category = Category::from_str(rest).map_err(|err| err.to_string())?;
                Ok(Command::Dispatch(Msg::CategorySelected(Some(category))))
            }
        }
        "more" => Ok(Command::Dispatch(Msg::LoadMoreRequested)),
        "reset" => Ok(Command::Dispatch(Msg::ResetRequested)),
        "open" => {
            if rest.is_empty() {
                Err("usage: open /news/<article-id>".to_string())
            } else {
                Ok(Command::Open(rest.to_string()))
            }
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err("empty command; try `help`".to_string()),
        other => Err(format!("unknown command {other:?}; try `help`")),
    }
}
