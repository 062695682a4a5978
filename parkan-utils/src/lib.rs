//! Shared helpers for the Parkan file format crates.

pub mod debug;
