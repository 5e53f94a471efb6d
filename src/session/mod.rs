//! Session state.
//!
//! A `Session` holds one player's engines. The `SessionStore` maps session
//! IDs to sessions and serializes access per session: every request for a
//! given ID runs under that session's mutex, while different IDs proceed
//! independently.
//!
//! Sessions live until removed. Nothing is persisted.

mod session;
mod store;

pub use session::{Session, SessionId};
pub use store::SessionStore;
