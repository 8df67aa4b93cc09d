//! Data models for the explorer
//!
//! This module defines the catalog response schema decoded from JSON and the
//! in-memory Pokédex the player fills during a session.

pub mod pokedex;
pub mod responses;

// Re-export commonly used types
pub use pokedex::{CaughtPokemon, Pokedex};
pub use responses::{
    LocationArea, LocationAreaPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonType,
};
