//! Command-line interface for the noughts engine
//!
//! Play games against the engine, query recommended moves, and inspect the
//! search tree and strategy table.

pub mod commands;
pub mod config;
pub mod output;
