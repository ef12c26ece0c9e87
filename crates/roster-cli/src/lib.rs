//! Roster CLI library.
//!
//! Argument parsing and command handlers for the `roster` binary.

pub mod cli;
pub mod commands;
