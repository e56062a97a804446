//! CLI Module
//!
//! Command-line interface for Larder.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::Diet;

/// Larder - recipe ideas from what's in your kitchen
#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preferences file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest recipe ideas for a set of ingredients
    #[command(name = "generate")]
    Generate {
        /// Ingredients; commas inside an argument separate several
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Time budget in minutes
        #[arg(short, long)]
        time: Option<u32>,

        /// Diet: none, vegetarian, vegan, gluten-free, dairy-free
        #[arg(short, long, value_parser = parse_diet)]
        diet: Option<Diet>,

        /// Don't assume oil, salt, pepper and spices are on hand
        #[arg(long)]
        no_pantry: bool,

        /// Ask the AI generator instead of the local one
        #[arg(long)]
        ai: bool,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how ingredient text is normalized
    #[command(name = "normalize")]
    Normalize {
        /// Raw ingredient text
        #[arg(required = true)]
        raw: Vec<String>,
    },

    /// Start an interactive session (default)
    #[command(name = "interactive")]
    Interactive,
}

fn parse_diet(raw: &str) -> std::result::Result<Diet, String> {
    raw.parse::<Diet>().map_err(|e| e.friendly_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "larder", "generate", "chicken", "rice", "--diet", "vegan", "--no-pantry",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate {
                ingredients,
                diet,
                no_pantry,
                time,
                ..
            }) => {
                assert_eq!(ingredients, vec!["chicken", "rice"]);
                assert_eq!(diet, Some(Diet::Vegan));
                assert!(no_pantry);
                assert_eq!(time, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_diet() {
        assert!(Cli::try_parse_from(["larder", "generate", "rice", "--diet", "paleo"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["larder", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
