//! The player's collection of caught Pokémon.
//!
//! Lives in memory for the length of a session.

use std::collections::BTreeMap;

/// A caught Pokémon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPokemon {
    pub name: String,
    pub base_experience: Option<u32>,
}

/// Caught Pokémon keyed by name, iterated in name order.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Returns false if it was already recorded.
    pub fn insert(&mut self, pokemon: CaughtPokemon) -> bool {
        if self.caught.contains_key(&pokemon.name) {
            return false;
        }
        self.caught.insert(pokemon.name.clone(), pokemon);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.caught.values()
    }
}
