//! Schedule CLI library.
//!
//! This crate provides the `sched` command-line interface over `sched-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
