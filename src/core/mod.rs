//! Core library components.
//!
//! Secret generation, `.env` parsing, template rendering and the Docker
//! Compose bridge. Nothing in here prints to the terminal.

pub mod compose;
pub mod config;
pub mod constants;
pub mod env;
pub mod layout;
pub mod prompt;
pub mod secret;
pub mod template;
