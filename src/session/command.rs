//! Interactive command parsing

use std::str::FromStr;

use crate::config::validate_time;
use crate::error::LarderError;
use crate::generator::Diet;
use crate::ingredients::normalize_ingredient;

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add one or more comma-separated ingredients
    Add(String),
    Remove(String),
    Clear,
    /// Show the ingredient chips
    List,
    Generate,
    /// Generate through the AI generator
    Ai,
    Pantry(bool),
    Time(u32),
    Diet(Diet),
    Help,
    Quit,
}

impl SessionCommand {
    pub const HELP: &'static str = "\
Commands:
  add <ingredient>[, <ingredient>...]   add ingredients
  remove <ingredient>                   remove an ingredient
  list                                  show ingredients
  clear                                 remove everything
  generate                              suggest recipe ideas
  ai                                    suggest ideas with AI
  pantry on|off                         assume oil, salt, pepper, spices
  time <minutes>                        set the time budget
  diet <none|vegetarian|vegan|gluten-free|dairy-free>
  help                                  show this help
  quit                                  leave";
}

impl FromStr for SessionCommand {
    type Err = LarderError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let invalid = |reason: String| LarderError::InvalidArgument {
            command: head.to_string(),
            reason,
        };

        match head.to_lowercase().as_str() {
            "add" | "a" if !rest.is_empty() => Ok(SessionCommand::Add(rest.to_string())),
            "add" | "a" => Err(invalid("expected an ingredient".to_string())),
            "remove" | "rm" if !rest.is_empty() => {
                Ok(SessionCommand::Remove(normalize_ingredient(rest)))
            }
            "remove" | "rm" => Err(invalid("expected an ingredient".to_string())),
            "clear" => Ok(SessionCommand::Clear),
            "list" | "ls" => Ok(SessionCommand::List),
            "generate" | "gen" | "g" => Ok(SessionCommand::Generate),
            "ai" => Ok(SessionCommand::Ai),
            "pantry" => match rest.to_lowercase().as_str() {
                "on" | "yes" | "true" => Ok(SessionCommand::Pantry(true)),
                "off" | "no" | "false" => Ok(SessionCommand::Pantry(false)),
                _ => Err(invalid(format!("expected on or off, got '{}'", rest))),
            },
            "time" => {
                let minutes = rest
                    .parse::<u32>()
                    .map_err(|_| invalid(format!("'{}' is not a number of minutes", rest)))?;
                Ok(SessionCommand::Time(validate_time(minutes)?))
            }
            "diet" => Ok(SessionCommand::Diet(rest.parse()?)),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ => Err(LarderError::UnknownCommand {
                command: head.to_string(),
            }),
        }
    }
}
