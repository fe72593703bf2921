// crates/enigma-cli/src/io/mod.rs

pub mod config_file;
pub mod keysheet_file;
pub mod text;
