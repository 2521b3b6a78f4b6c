//! Core types for the planet catalog

pub mod planet;

pub use planet::{Planet, PlanetId};
