//! CLI module for ChromaQA
//!
//! This module contains the command definitions, handlers, and output
//! formatting for the ChromaQA CLI.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::Cli;
pub use commands::CollectionCommands;
pub use commands::Commands;
