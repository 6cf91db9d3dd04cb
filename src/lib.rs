pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logger;
pub mod models;
pub mod parsers;
pub mod text;
pub mod wordlist;
pub mod writer;

pub use error::{IndexerError, Result};
