//! Tarab CLI library.
//!
//! Request assembly, logging setup and the subcommand implementations
//! behind the `tarab` binary.

pub mod commands;
pub mod input;
pub mod logging;
