//! Defensive type matchups

use crate::types::{Pokemon, Type};

/// Defensive profile of a type combination against every attacking type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matchups {
    /// Attacking types dealing more than 1x, with their multiplier
    pub weak: Vec<(Type, f32)>,
    /// Attacking types dealing less than 1x but more than 0x
    pub resist: Vec<(Type, f32)>,
    /// Attacking types dealing 0x
    pub immune: Vec<Type>,
}

impl Matchups {
    pub fn of(defender_types: &[Type]) -> Self {
        let mut matchups = Self::default();
        if defender_types.is_empty() {
            return matchups;
        }

        for attacker in Type::all().iter().copied() {
            let eff = attacker.effectiveness_multi(defender_types);
            if eff == 0.0 {
                matchups.immune.push(attacker);
            } else if eff > 1.0 {
                matchups.weak.push((attacker, eff));
            } else if eff < 1.0 {
                matchups.resist.push((attacker, eff));
            }
        }

        matchups
    }

    pub fn of_pokemon(pokemon: &Pokemon) -> Self {
        Self::of(&pokemon.types)
    }
}
