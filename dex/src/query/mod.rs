//! Matchup queries over pokedex records

mod matchup;

pub use matchup::Matchups;
