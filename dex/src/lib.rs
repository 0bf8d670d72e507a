//! Pokedex records for dexbot.
//!
//! This crate holds the species data that usage statistics are displayed
//! alongside: types and their effectiveness chart, base stats, and the
//! [`Pokemon`] record itself.
//!
//! ```text
//! dexbot-dex (species records) ← THIS CRATE
//!        │
//!        ▼
//! dexbot-stats (formats + usage records + data source)
//!        │
//!        ▼
//! dexbot (argument parsing, queries, commands)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Pokemon types with effectiveness chart and embed colors
//! - [`BaseStats`] - Base stats with total
//! - [`Pokemon`] - A pokedex entry
//! - [`Matchups`] - Weaknesses, resistances and immunities of a type combination
//!
//! Enable the `serde` feature to load records from JSON.

pub mod query;
pub mod types;

pub use query::Matchups;
pub use types::{BaseStats, Pokemon, Type, TYPE_CHART};
