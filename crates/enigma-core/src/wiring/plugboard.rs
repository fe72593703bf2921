// crates/enigma-core/src/wiring/plugboard.rs

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::ConfigurationError;

/// Partial involution applied on the way in and again on the way out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugboard {
    map: Arc<[u8]>,
}

impl Plugboard {
    /// Each pair is a two-symbol string such as `"AV"`.
    /// A symbol paired with itself is ignored; a symbol in two pairs is an error.
    pub fn from_pairs<'a, I>(alphabet: &Alphabet, pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map: Vec<u8> = (0..alphabet.len()).map(|p| p as u8).collect();
        let mut used = vec![false; alphabet.len()];

        for pair in pairs {
            let ends = alphabet.indices("plugboard", pair)?;
            let &[a, b] = ends.as_slice() else {
                return Err(ConfigurationError::MalformedPlug(pair.to_string()));
            };
            if a == b {
                continue;
            }
            for p in [a, b] {
                if used[p as usize] {
                    return Err(ConfigurationError::AmbiguousPlug {
                        symbol: alphabet.symbol_at(p),
                    });
                }
                used[p as usize] = true;
            }
            map[a as usize] = b;
            map[b as usize] = a;
        }

        Ok(Self { map: map.into() })
    }

    #[inline]
    pub fn swap(&self, p: u8) -> u8 {
        self.map[p as usize]
    }

    /// Cabled pairs, lower position first.
    pub fn pairs(&self) -> Vec<(u8, u8)> {
        self.map
            .iter()
            .enumerate()
            .filter(|&(a, &b)| (a as u8) < b)
            .map(|(a, &b)| (a as u8, b))
            .collect()
    }
}
