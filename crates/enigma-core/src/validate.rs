// crates/enigma-core/src/validate.rs

use crate::alphabet::Alphabet;
use crate::error::ConfigurationError;
use crate::wiring::rotor::Rotor;

/// Parse `text` as a full permutation of `alphabet`.
pub fn permutation(
    alphabet: &Alphabet,
    component: &str,
    text: &str,
) -> Result<Vec<u8>, ConfigurationError> {
    let found = text.chars().count();
    if found != alphabet.len() {
        return Err(ConfigurationError::AlphabetMismatch {
            component: component.to_string(),
            expected: alphabet.len(),
            found,
        });
    }

    let table = alphabet.indices(component, text)?;
    let mut seen = vec![false; table.len()];
    for &p in &table {
        if seen[p as usize] {
            return Err(ConfigurationError::NonBijective {
                component: component.to_string(),
                symbol: alphabet.symbol_at(p),
            });
        }
        seen[p as usize] = true;
    }
    Ok(table)
}

/// Reflector tables must be self-inverse and must never map a symbol onto itself.
pub fn reflector_table(
    alphabet: &Alphabet,
    component: &str,
    table: &[u8],
) -> Result<(), ConfigurationError> {
    for (i, &to) in table.iter().enumerate() {
        let from = i as u8;
        if to == from {
            return Err(ConfigurationError::ReflectorFixedPoint {
                component: component.to_string(),
                symbol: alphabet.symbol_at(from),
            });
        }
        if table[to as usize] != from {
            return Err(ConfigurationError::NotInvolution {
                component: component.to_string(),
                from: alphabet.symbol_at(from),
                to: alphabet.symbol_at(to),
            });
        }
    }
    Ok(())
}

/// Stationary wheels form a (possibly empty) prefix of the bank, and something must step.
pub fn bank_layout(rotors: &[Rotor]) -> Result<(), ConfigurationError> {
    if rotors.is_empty() {
        return Err(ConfigurationError::EmptyBank);
    }

    let first_stepping = rotors
        .iter()
        .position(|r| !r.is_stationary())
        .ok_or(ConfigurationError::NoSteppingRotor)?;

    if let Some(offset) = rotors[first_stepping..]
        .iter()
        .position(Rotor::is_stationary)
    {
        return Err(ConfigurationError::StationaryPlacement {
            slot: first_stepping + offset + 1,
        });
    }
    Ok(())
}
