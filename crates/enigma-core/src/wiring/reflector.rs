// crates/enigma-core/src/wiring/reflector.rs

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::ConfigurationError;
use crate::validate;

/// Fixed involution with no fixed points. Checked once here, never per symbol.
#[derive(Clone, Debug)]
pub struct Reflector {
    name: Arc<str>,
    table: Arc<[u8]>,
}

impl Reflector {
    pub fn parse(
        alphabet: &Alphabet,
        name: impl Into<Arc<str>>,
        text: &str,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let component = format!("reflector {name}");
        let table = validate::permutation(alphabet, &component, text)?;
        validate::reflector_table(alphabet, &component, &table)?;
        Ok(Self {
            name,
            table: table.into(),
        })
    }

    #[inline]
    pub fn reflect(&self, p: u8) -> u8 {
        self.table[p as usize]
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UKW_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn reflects_both_ways() {
        let a = Alphabet::latin();
        let r = Reflector::parse(&a, "B", UKW_B).unwrap();
        assert_eq!(r.reflect(0), 24); // A -> Y
        assert_eq!(r.reflect(24), 0); // Y -> A
        for p in 0..26u8 {
            assert_ne!(r.reflect(p), p);
        }
    }

    #[test]
    fn rejects_rotor_wiring_as_reflector() {
        let a = Alphabet::latin();
        let err = Reflector::parse(&a, "I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap_err();
        assert!(matches!(err, ConfigurationError::NotInvolution { .. }));
    }
}
