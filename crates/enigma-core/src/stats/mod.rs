// crates/enigma-core/src/stats/mod.rs

pub mod counters;
