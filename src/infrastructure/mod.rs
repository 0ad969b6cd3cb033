// src/infrastructure/mod.rs
pub mod config;
pub mod file_writer;
pub mod openai;

pub use config::Config;
pub use openai::OpenAiGenerator;
