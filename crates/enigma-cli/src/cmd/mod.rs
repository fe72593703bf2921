// crates/enigma-cli/src/cmd/mod.rs

pub mod catalog;
pub mod encipher;
pub mod keysheet;
pub mod machine;
