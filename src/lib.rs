//! Random colored creature art for the terminal
//!
//! Re-exports modules for use by the binary and tests.

pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod generation;
pub mod language;
pub mod render;
pub mod roster;
pub mod selector;

pub use error::{Error, Result};
