//! Underground Lab Adventure
//!
//! A menu-driven text adventure: walk from the cave entrance to a hidden
//! laboratory, recover the research documents and review a summary report.

pub mod core;
pub mod error;
pub mod game;

pub use error::{AdventureError, Result};
