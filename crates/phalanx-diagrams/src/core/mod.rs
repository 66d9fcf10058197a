//! Core abstractions for diagram processing
//!
//! Shared types, configuration, errors and the traits that diagram storage
//! and renderers implement.

mod config;
mod database;
mod error;
pub mod logging;
mod renderer;
mod text;
mod types;

pub use config::*;
pub use database::*;
pub use error::*;
pub use logging::*;
pub use renderer::*;
pub use text::*;
pub use types::*;
