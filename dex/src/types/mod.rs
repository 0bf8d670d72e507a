//! Pokedex domain types

mod pokemon;
mod pokemon_type;
mod stats;

pub use pokemon::Pokemon;
pub use pokemon_type::{Type, TYPE_CHART};
pub use stats::BaseStats;
