// src/ports/mod.rs
pub mod tsv;

pub use tsv::TsvPresenter;
