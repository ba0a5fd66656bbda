pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generated;
pub mod mat;
pub mod ratio;
pub mod splits;
pub mod utils;

pub use error::{MatError, ScanError};
