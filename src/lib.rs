pub mod annotate;
pub mod cli;
pub mod commands;
pub mod layout;
pub mod motif;
pub mod render;
pub mod utils;
