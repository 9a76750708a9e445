pub mod billing;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
