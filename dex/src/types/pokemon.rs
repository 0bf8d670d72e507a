//! Pokedex record

use super::pokemon_type::Type;
use super::stats::BaseStats;

/// A species entry as loaded from the pokedex
///
/// Read-only: nothing in dexbot mutates a record once it is loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pokemon {
    /// Display name, including forme (e.g. "Charizard-Mega-X")
    pub name: String,

    /// One or two types, primary first
    pub types: Vec<Type>,

    pub base_stats: BaseStats,

    /// Smogon tier label as written in the pokedex ("OU", "UUBL", ...)
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: String,

    /// Generation the species was introduced in
    pub generation: u8,
}

impl Pokemon {
    pub fn new(name: impl Into<String>, types: Vec<Type>, base_stats: BaseStats) -> Self {
        Self {
            name: name.into(),
            types,
            base_stats,
            tier: String::new(),
            generation: 1,
        }
    }

    /// Primary type
    pub fn type1(&self) -> Option<Type> {
        self.types.first().copied()
    }

    /// Secondary type, if dual-typed
    pub fn type2(&self) -> Option<Type> {
        self.types.get(1).copied()
    }

    /// "Steel / Fairy" or "Fire"
    pub fn types_display(&self) -> String {
        self.types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Embed color for this Pokemon, taken from its primary type
    pub fn color(&self) -> u32 {
        self.type1().map(|t| t.color()).unwrap_or(Type::Normal.color())
    }

    /// Sprite file stem used by the Showdown sprite server
    pub fn sprite_id(&self) -> String {
        self.name.replace(' ', "").to_lowercase()
    }
}
