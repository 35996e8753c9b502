//! CLI subcommand implementations.

pub mod expand;
pub mod merge;
pub mod overlaps;
pub mod util;
pub mod validate;
