//! Interactive session state
//!
//! This module provides:
//! - `Session`: the ingredient list, options, latest results and status line
//! - `SessionCommand`: one line of interactive input, parsed

mod command;
mod state;

pub use command::SessionCommand;
pub use state::{Session, MIN_INGREDIENTS, STATUS_NEED_MORE};
