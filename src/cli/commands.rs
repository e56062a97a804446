//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. Output goes to any
//! `Write` so commands can be driven from tests.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::error::Result;
use crate::generator::{AiRecipeGenerator, GenerateOptions, IdeaGenerator, LocalRecipeGenerator};
use crate::ingredients::normalize_ingredient;
use crate::render::{render_chips, render_session};
use crate::session::{Session, SessionCommand};

const PROMPT: &str = "larder> ";

/// One-shot generation from command-line ingredients.
pub fn generate<W: Write>(
    ingredients: &[String],
    options: GenerateOptions,
    use_ai: bool,
    json: bool,
    out: &mut W,
) -> Result<()> {
    info!("Generating from {} argument(s)", ingredients.len());

    let mut session = Session::new(options);
    for raw in ingredients {
        session.add_many(raw);
    }

    let generator: &dyn IdeaGenerator = if use_ai {
        &AiRecipeGenerator
    } else {
        &LocalRecipeGenerator
    };
    session.generate_with(generator);

    if json {
        let json = serde_json::to_string_pretty(&session)?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "Ingredients: {}", render_chips(session.ingredients()))?;
        writeln!(out)?;
        write!(out, "{}", render_session(&session))?;
    }

    Ok(())
}

/// Print the normalized form of each argument.
pub fn normalize<W: Write>(raw: &[String], out: &mut W) -> Result<()> {
    for r in raw {
        let value = normalize_ingredient(r);
        if value.is_empty() {
            writeln!(out, "{:?} -> (empty, ignored)", r)?;
        } else {
            writeln!(out, "{:?} -> {:?}", r, value)?;
        }
    }
    Ok(())
}

/// Run a line-oriented session until `quit` or end of input.
pub fn interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("Starting interactive session");
    writeln!(out, "Larder v{}. Type 'help' for commands.", env!("CARGO_PKG_VERSION"))?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            let outcome = line
                .parse::<SessionCommand>()
                .and_then(|cmd| execute(session, cmd, out));
            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_recoverable() => {
                    debug!("Rejected input {:?}: {}", line, e);
                    writeln!(out, "{}", e.friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

/// Apply one command. Returns `false` when the session should end.
pub fn execute<W: Write>(session: &mut Session, cmd: SessionCommand, out: &mut W) -> Result<bool> {
    debug!("Executing {:?}", cmd);

    match cmd {
        SessionCommand::Add(raw) => {
            let added = session.add_many(&raw);
            if added == 0 {
                writeln!(out, "Nothing new to add.")?;
            }
            writeln!(out, "{}", render_chips(session.ingredients()))?;
        }
        SessionCommand::Remove(value) => {
            if !session.remove(&value) {
                writeln!(out, "'{}' isn't in the list.", value)?;
            }
            writeln!(out, "{}", render_chips(session.ingredients()))?;
        }
        SessionCommand::Clear => {
            session.clear();
            writeln!(out, "{}", render_chips(session.ingredients()))?;
            write!(out, "{}", render_session(session))?;
        }
        SessionCommand::List => {
            writeln!(out, "{}", render_chips(session.ingredients()))?;
        }
        SessionCommand::Generate => {
            session.generate();
            write!(out, "{}", render_session(session))?;
        }
        SessionCommand::Ai => {
            session.generate_with(&AiRecipeGenerator);
            write!(out, "{}", render_session(session))?;
        }
        SessionCommand::Pantry(on) => {
            session.options_mut().pantry_basics = on;
            writeln!(out, "Pantry basics: {}", if on { "on" } else { "off" })?;
        }
        SessionCommand::Time(minutes) => {
            session.options_mut().time_minutes = minutes;
            writeln!(out, "Time budget: {} min", minutes)?;
        }
        SessionCommand::Diet(diet) => {
            session.options_mut().diet = diet;
            writeln!(out, "Diet: {}", diet)?;
        }
        SessionCommand::Help => {
            writeln!(out, "{}", SessionCommand::HELP)?;
        }
        SessionCommand::Quit => {
            info!("Session ended by user");
            return Ok(false);
        }
    }

    Ok(true)
}
