// crates/enigma-core/src/config/mod.rs

pub mod catalog;
pub mod checksum;
pub mod format;
pub mod model;
pub mod notation;
