//! Smogon usage statistics for dexbot.
//!
//! - [`Format`] - the scope of a query (generation × tier), with the rules
//!   that turn loose user tokens into a valid format
//! - [`MoveSetUsage`] and friends - per-Pokemon usage records
//! - [`DataSource`] - the read-only lookups the bot runs, with
//!   [`MemoryDataSource`] as the JSON-backed implementation

use thiserror::Error;

pub mod format;
mod id;
pub mod source;
pub mod usage;

pub use format::{
    DEFAULT_FORMAT, Format, Generation, Tier, is_format_token, is_valid_generation, is_valid_tier,
};
pub use id::to_id;
pub use source::{DataSource, MemoryDataSource};
pub use usage::{
    ChecksAndCountersData, MoveSetUsage, Section, UsageData, UsageKind, UsageList, UsageRecord,
};

pub use dexbot_dex::Pokemon;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unknown format id: {0}")]
    UnknownFormat(String),
}
