//! commands understood by the console and the requests they turn into

use crate::console::CommandError;
use crate::graph::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Query,
    Distance,
    Insert,
    Remove,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Query,
        Command::Distance,
        Command::Insert,
        Command::Remove,
        Command::Help,
        Command::Exit,
    ];

    pub fn letter(self) -> char {
        match self {
            Command::Query => 'Q',
            Command::Distance => 'D',
            Command::Insert => 'I',
            Command::Remove => 'R',
            Command::Help => 'H',
            Command::Exit => 'E',
        }
    }

    pub fn from_letter(letter: char) -> Option<Command> {
        let letter = letter.to_ascii_uppercase();
        Command::ALL.into_iter().find(|command| command.letter() == letter)
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Query => "Query the city information by entering the city code.",
            Command::Distance => "Find the minimum distance between two cities.",
            Command::Insert => "Insert a road by entering two city codes and distance.",
            Command::Remove => "Remove an existing road by entering two city codes.",
            Command::Help => "Display this message.",
            Command::Exit => "Exit.",
        }
    }

    /// prompt shown before reading the arguments, `None` for commands without any
    pub fn argument_prompt(self) -> Option<&'static str> {
        match self {
            Command::Query => Some("City Code:"),
            Command::Distance | Command::Remove => Some("City codes:"),
            Command::Insert => Some("City codes and distance:"),
            Command::Help | Command::Exit => None,
        }
    }

    /// number of whitespace-separated arguments the command reads
    pub fn arity(self) -> usize {
        match self {
            Command::Query => 1,
            Command::Distance | Command::Remove => 2,
            Command::Insert => 3,
            Command::Help | Command::Exit => 0,
        }
    }
}

/// a road map operation with its arguments, as handed to a `Session`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Query { code: String },
    Distance { from: String, to: String },
    Insert { from: String, to: String, distance: Weight },
    Remove { from: String, to: String },
}

impl Request {
    /// Builds the request for `command` from exactly `command.arity()` arguments.
    ///
    /// Returns `Ok(None)` for commands that carry no request (help, exit).
    pub fn parse(command: Command, arguments: &[&str]) -> Result<Option<Request>, CommandError> {
        if arguments.len() != command.arity() {
            return Err(CommandError::WrongArgumentCount {
                expected: command.arity(),
                found: arguments.len(),
            });
        }
        let request = match command {
            Command::Query => Request::Query {
                code: arguments[0].to_string(),
            },
            Command::Distance => Request::Distance {
                from: arguments[0].to_string(),
                to: arguments[1].to_string(),
            },
            Command::Insert => Request::Insert {
                from: arguments[0].to_string(),
                to: arguments[1].to_string(),
                distance: arguments[2]
                    .parse()
                    .map_err(|_| CommandError::DistanceNotInteger)?,
            },
            Command::Remove => Request::Remove {
                from: arguments[0].to_string(),
                to: arguments[1].to_string(),
            },
            Command::Help | Command::Exit => return Ok(None),
        };
        Ok(Some(request))
    }
}
