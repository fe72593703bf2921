// crates/enigma-core/src/wiring/mod.rs

pub mod plugboard;
pub mod reflector;
pub mod rotor;
