//! Graph model and renderers
//!
//! Diagram storage, the declarative builder, and the three ways a diagram
//! leaves the crate: DOT source, a text outline, or an image file produced by
//! Graphviz.

mod builder;
mod database;
mod dot;
mod graphviz;
mod outline;

pub use builder::*;
pub use database::*;
pub use dot::*;
pub use graphviz::*;
pub use outline::*;
