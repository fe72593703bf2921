// crates/enigma-core/src/dynamics/mod.rs

pub mod machine;
pub mod stepping;
