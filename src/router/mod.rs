//! Routing from user input to engines.
//!
//! - `Route`: one name per engine, plus `home`
//! - `Command`: the single discrete action a front-end sends
//! - `Arcade`: looks up the session, starts the engine if needed, applies
//!   the command, and returns the view model to draw

mod arcade;
mod command;
mod route;

pub use arcade::Arcade;
pub use command::Command;
pub use route::{home_view, Route};
