pub mod classify;
pub mod commands;
pub mod config;
pub mod diff;
pub mod extract;
pub mod fs;
pub mod models;
pub mod parser;
pub mod reconcile;
pub mod render;
pub mod stats;
pub mod table;
pub mod utils;
