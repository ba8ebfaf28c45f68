pub mod cli;
pub mod client;
pub mod config;
pub mod data_models;
pub mod error;
pub mod keywords;
pub mod paginator;
pub mod reporter;
pub mod scanner;

pub use error::{Result, ScanError};
