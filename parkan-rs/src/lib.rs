//! Parkan-RS library
//!
//! Command implementations of the `parkan-rs` tool, usable from other binaries.

pub mod cli;
pub mod commands;
pub mod utils;
