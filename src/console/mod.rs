//! Interactive command loop over a road map

pub mod command;
pub mod menu;
pub mod session;


use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::graph::GraphError;

pub use command::{Command, Request};
pub use menu::{Menu, MenuError, MenuOption};
pub use session::Session;

/// Reasons a request is refused. The messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("City code {code} does not exist in this graph.")]
    UnknownCity { code: String },

    #[error("No route exists from {from} to {to}.")]
    NoRoute { from: String, to: String },

    #[error("Please enter an integer for the distance.")]
    DistanceNotInteger,

    #[error("This graph does not support negative weights.")]
    NegativeDistance,

    #[error("Insertion of a road with zero distance is not allowed.")]
    ZeroDistance,

    #[error("There exists a road from {from} to {to} already.")]
    RoadExists { from: String, to: String },

    #[error("The road from {from} to {to} does not exist.")]
    RoadMissing { from: String, to: String },

    #[error("Invalid number of inputs (expected {expected}, got {found}).")]
    WrongArgumentCount { expected: usize, found: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Runs the menu loop until the user exits or `input` is exhausted.
///
/// Results go to `out`, refusals and input complaints to `err`. No command error ends the
/// loop; only I/O failures on the streams themselves are returned.
pub fn run<R, W, E>(session: &mut Session, menu: &Menu, input: R, out: &mut W, err: &mut E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{} ", menu.prompt())?;
        out.flush()?;

        let command = loop {
            let Some(line) = lines.next().transpose()? else {
                debug!("input closed");
                return Ok(());
            };
            match menu.parse_command(&line) {
                Ok(letter) => match Command::from_letter(letter) {
                    Some(command) => break command,
                    None => writeln!(err, "{}", MenuError::UnknownCommand)?,
                },
                Err(e) => writeln!(err, "{}", e)?,
            }
        };

        match command {
            Command::Help => {
                writeln!(out, "{}", menu.help())?;
                continue;
            }
            Command::Exit => return Ok(()),
            _ => {}
        }

        if let Some(prompt) = command.argument_prompt() {
            write!(out, "{} ", prompt)?;
            out.flush()?;
        }
        let Some(arguments) = read_arguments(&mut lines, command.arity(), err)? else {
            debug!("input closed while reading arguments");
            return Ok(());
        };
        let arguments: Vec<&str> = arguments.split_whitespace().collect();

        let outcome = Request::parse(command, &arguments).and_then(|request| match request {
            Some(request) => session.execute(request),
            None => Ok(String::new()),
        });
        match outcome {
            Ok(message) => writeln!(out, "{}", message)?,
            Err(e) => {
                if let CommandError::Graph(ref graph_error) = e {
                    warn!(%graph_error, "unexpected graph error");
                }
                writeln!(err, "{}", e)?
            }
        }
    }
}

/// Reads lines until one holds exactly `needed` tokens. `None` means the input ended first.
fn read_arguments<I, E>(lines: &mut I, needed: usize, err: &mut E) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    E: Write,
{
    if needed == 0 {
        return Ok(Some(String::new()));
    }
    for line in lines {
        let line = line?;
        match line.split_whitespace().count() {
            0 => writeln!(err, "Please enter an input.")?,
            n if n != needed => writeln!(err, "Invalid number of inputs.")?,
            _ => return Ok(Some(line)),
        }
    }
    Ok(None)
}
