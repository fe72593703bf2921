// crates/enigma-core/src/dynamics/machine.rs

use std::sync::Arc;

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::config::model::MachineConfig;
use crate::dynamics::stepping::{step_bank, StepReport};
use crate::error::{ConfigurationError, UnsupportedSymbolError};
use crate::stats::counters::Counters;
use crate::validate;
use crate::wiring::plugboard::Plugboard;
use crate::wiring::reflector::Reflector;
use crate::wiring::rotor::Rotor;

/// A configured machine. Rotor positions are the only state that changes.
///
/// Wiring tables are shared (`Arc`) with clones and with other machines built
/// from the catalog, but each machine turns its own rotors: a clone evolves
/// independently of the original.
#[derive(Clone, Debug)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    plugboard: Plugboard,
    /// Left to right; the last stepping rotor is the fast one.
    rotors: Vec<Rotor>,
    reflector: Reflector,
    stats: Counters,
}

impl Machine {
    pub fn build(config: &MachineConfig) -> Result<Self, ConfigurationError> {
        let alphabet = Arc::new(config.alphabet()?);

        let rotors = config
            .rotors
            .iter()
            .enumerate()
            .map(|(i, slot)| slot.resolve(&alphabet, i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        validate::bank_layout(&rotors)?;

        let reflector = config.reflector.resolve(&alphabet)?;
        let plugboard =
            Plugboard::from_pairs(&alphabet, config.plugboard.iter().map(String::as_str))?;

        let machine = Self {
            alphabet,
            plugboard,
            rotors,
            reflector,
            stats: Counters::default(),
        };

        debug!(
            rotors = %config.wheel_labels().join(" "),
            reflector = machine.reflector.name(),
            plugs = machine.plugboard.pairs().len(),
            window = %machine.window(),
            "machine built"
        );

        Ok(machine)
    }

    /// Encipher one symbol. Stepping happens first and exactly once; a rejected
    /// symbol leaves every rotor where it was.
    pub fn process_symbol(&mut self, symbol: char) -> Result<char, UnsupportedSymbolError> {
        let p = self
            .alphabet
            .index_of(symbol)
            .ok_or(UnsupportedSymbolError { symbol })?;
        let out = self.process_index(p);
        Ok(self.alphabet.symbol_at(out))
    }

    // `p` is a valid position by construction of every caller.
    fn process_index(&mut self, p: u8) -> u8 {
        let report = step_bank(&mut self.rotors);
        self.record(report);
        self.signal_path(p)
    }

    #[inline]
    fn signal_path(&self, p: u8) -> u8 {
        let mut x = self.plugboard.swap(p);
        for rotor in self.rotors.iter().rev() {
            x = rotor.encode_forward(x);
        }
        x = self.reflector.reflect(x);
        for rotor in &self.rotors {
            x = rotor.encode_backward(x);
        }
        self.plugboard.swap(x)
    }

    fn record(&mut self, report: StepReport) {
        self.stats.symbols += 1;
        self.stats.rotor_turns += report.moved as u64;
        if report.double_step {
            self.stats.double_steps += 1;
            trace!(window = %self.window(), "double step");
        }
    }

    /// Lazily encipher `symbols` in order. Each item is enciphered only when pulled.
    pub fn process_sequence<I>(&mut self, symbols: I) -> ProcessSequence<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        ProcessSequence {
            machine: self,
            symbols: symbols.into_iter(),
        }
    }

    /// Encipher a whole string, stopping at the first symbol outside the alphabet.
    /// Symbols before the rejected one have already turned the rotors.
    pub fn process_str(&mut self, text: &str) -> Result<String, UnsupportedSymbolError> {
        self.process_sequence(text.chars()).collect()
    }

    /// Zero-based rotor positions, left to right. This tuple is the machine state.
    pub fn positions(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Letters showing in the rotor windows, left to right.
    pub fn window(&self) -> String {
        self.rotors
            .iter()
            .map(|r| self.alphabet.symbol_at(r.position()))
            .collect()
    }

    /// Turn the rotors to the given window letters (one per rotor).
    pub fn set_window(&mut self, window: &str) -> Result<(), ConfigurationError> {
        let positions = self.alphabet.indices("window", window)?;
        self.set_positions(&positions)
    }

    pub fn set_positions(&mut self, positions: &[u8]) -> Result<(), ConfigurationError> {
        if positions.len() != self.rotors.len() {
            return Err(ConfigurationError::PositionCount {
                expected: self.rotors.len(),
                found: positions.len(),
            });
        }
        if let Some(slot) = positions
            .iter()
            .position(|&p| p as usize >= self.alphabet.len())
        {
            return Err(ConfigurationError::SettingOutOfRange {
                slot: slot + 1,
                value: positions[slot] as u16 + 1,
                size: self.alphabet.len(),
            });
        }
        for (rotor, &p) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(p);
        }
        Ok(())
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    pub fn stats(&self) -> Counters {
        self.stats
    }
}

/// Iterator returned by [`Machine::process_sequence`]. Finite, lazy and not
/// restartable: rebuild the machine to run the same stream again.
pub struct ProcessSequence<'m, I> {
    machine: &'m mut Machine,
    symbols: I,
}

impl<I> Iterator for ProcessSequence<'_, I>
where
    I: Iterator<Item = char>,
{
    type Item = Result<char, UnsupportedSymbolError>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.symbols.next()?;
        Some(self.machine.process_symbol(symbol))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.symbols.size_hint()
    }
}
