//! Headless session driver for the grid adventure.
//!
//! A [`Session`] owns a [`GameWorld`](game_core::GameWorld) built from the
//! standard content, feeds it commands and logs every event through
//! `tracing`. The `grid-quest` binary wraps it in a command line.
//!
//! Modules are organized by responsibility:
//! - [`config`] resolves session settings from defaults, files and the environment
//! - [`session`] runs commands against the world
//! - [`error`] exposes the error type shared by both
pub mod config;
pub mod error;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use session::{Session, SessionSummary};
