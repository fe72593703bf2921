// crates/enigma-core/src/stats/counters.rs

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Symbols enciphered (rejected symbols are not counted).
    pub symbols: u64,
    /// Cycles in which the double-step anomaly fired.
    pub double_steps: u64,
    /// Individual rotor turns across all cycles.
    pub rotor_turns: u64,
}
