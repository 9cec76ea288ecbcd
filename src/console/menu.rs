//! a letter-driven option menu

use itertools::Itertools;

use crate::console::command::Command;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Option letter {0} already exists as an option. Duplicates are not allowed.")]
    DuplicateOption(char),

    #[error("Please enter a command.")]
    EmptyCommand,

    #[error("Invalid command given.")]
    InvalidCommand,

    #[error("Command given does not match any of the options.")]
    UnknownCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub letter: char,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Menu {
    prompt: String,
    options: Vec<MenuOption>,
}

impl Menu {
    pub fn new(prompt: &str) -> Menu {
        Menu {
            prompt: prompt.to_string(),
            options: Vec::new(),
        }
    }

    /// the menu offered by the road map console, one option per `Command`
    pub fn road_map() -> Menu {
        let mut menu = Menu::new("Command?");
        for command in Command::ALL {
            // letters in Command::ALL are distinct
            let _ = menu.add_option(command.letter(), command.description());
        }
        menu
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Adds an option; letters are stored upper-cased and compared without case.
    pub fn add_option(&mut self, letter: char, description: &str) -> Result<(), MenuError> {
        let letter = letter.to_ascii_uppercase();
        if self.options.iter().any(|option| option.letter == letter) {
            return Err(MenuError::DuplicateOption(letter));
        }
        self.options.push(MenuOption {
            letter,
            description: description.to_string(),
        });
        Ok(())
    }

    /// one line per option, indented by two spaces
    pub fn help(&self) -> String {
        self.options
            .iter()
            .map(|option| format!("  {} {}", option.letter, option.description))
            .join("\n")
    }

    /// Validates a command line and returns the matching option letter, upper-cased.
    /// Only the first token counts; it must be a single character.
    pub fn parse_command(&self, line: &str) -> Result<char, MenuError> {
        let token = line.split_whitespace().next().ok_or(MenuError::EmptyCommand)?;
        let mut chars = token.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter.to_ascii_uppercase(),
            _ => return Err(MenuError::InvalidCommand),
        };
        self.options
            .iter()
            .find(|option| option.letter == letter)
            .map(|option| option.letter)
            .ok_or(MenuError::UnknownCommand)
    }
}
