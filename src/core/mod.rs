//! Core building blocks shared by every engine: RNG, secret pools,
//! configuration, errors, and view models.
//!
//! Nothing here knows about a particular game.

pub mod rng;
pub mod pool;
pub mod config;
pub mod error;
pub mod view;

pub use rng::GameRng;
pub use pool::SecretPool;
pub use config::ArcadeConfig;
pub use error::{ArcadeError, Result};
pub use view::{Notice, NoticeLevel, ViewModel};
