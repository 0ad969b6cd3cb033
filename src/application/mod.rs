// src/application/mod.rs
pub mod generator;

pub use generator::{CardGenerator, TextGenerator};
