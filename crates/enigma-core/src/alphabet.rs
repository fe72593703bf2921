// crates/enigma-core/src/alphabet.rs

use crate::error::ConfigurationError;

pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest alphabet a machine accepts; positions are stored as `u8`.
pub const MAX_SYMBOLS: usize = 256;

/// Ordered symbol set, mapped bijectively onto positions `0..len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Box<[char]>,
    // Fast path for ASCII lookups; `None` means "not in alphabet".
    ascii: [Option<u8>; 128],
    // Non-ASCII symbols with their positions, sorted by symbol.
    wide: Box<[(char, u8)]>,
}

impl Alphabet {
    /// The 26 capitals every historical wheel is wired over.
    pub fn latin() -> Self {
        Self::new(LATIN).expect("latin alphabet is valid")
    }

    pub fn new(symbols: &str) -> Result<Self, ConfigurationError> {
        let symbols: Box<[char]> = symbols.chars().collect();
        if symbols.len() < 2 || symbols.len() > MAX_SYMBOLS {
            return Err(ConfigurationError::AlphabetSize(symbols.len()));
        }

        let mut ascii = [None; 128];
        let mut wide = Vec::new();
        for (i, &c) in symbols.iter().enumerate() {
            if symbols[..i].contains(&c) {
                return Err(ConfigurationError::AlphabetDuplicate(c));
            }
            if c.is_ascii() {
                ascii[c as usize] = Some(i as u8);
            } else {
                wide.push((c, i as u8));
            }
        }
        wide.sort_unstable_by_key(|&(c, _)| c);

        Ok(Self {
            symbols,
            ascii,
            wide: wide.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects alphabets shorter than two symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<u8> {
        if symbol.is_ascii() {
            self.ascii[symbol as usize]
        } else {
            let found = self.wide.binary_search_by_key(&symbol, |&(c, _)| c);
            found.ok().map(|i| self.wide[i].1)
        }
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Panics if `index` is not below `len()`.
    #[inline]
    pub fn symbol_at(&self, index: u8) -> char {
        self.symbols[index as usize]
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn is_latin(&self) -> bool {
        self.symbols.iter().copied().eq(LATIN.chars())
    }

    /// Map a wiring-style string onto positions, checking every symbol belongs here.
    pub(crate) fn indices(
        &self,
        component: &str,
        text: &str,
    ) -> Result<Vec<u8>, ConfigurationError> {
        let mut out = Vec::with_capacity(text.len());
        for symbol in text.chars() {
            let Some(p) = self.index_of(symbol) else {
                return Err(ConfigurationError::ForeignSymbol {
                    component: component.to_string(),
                    symbol,
                });
            };
            out.push(p);
        }
        Ok(out)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_maps_letters_to_positions() {
        let a = Alphabet::latin();
        assert_eq!(a.len(), 26);
        assert_eq!(a.index_of('A'), Some(0));
        assert_eq!(a.index_of('Z'), Some(25));
        assert_eq!(a.index_of('a'), None);
        assert_eq!(a.symbol_at(4), 'E');
        assert!(a.is_latin());
    }

    #[test]
    fn rejects_duplicates_and_tiny_sets() {
        assert_eq!(
            Alphabet::new("ABCA"),
            Err(ConfigurationError::AlphabetDuplicate('A'))
        );
        assert_eq!(Alphabet::new("A"), Err(ConfigurationError::AlphabetSize(1)));
    }

    #[test]
    fn non_ascii_symbols_resolve() {
        let a = Alphabet::new("ÄÖÜß").unwrap();
        assert_eq!(a.index_of('Ü'), Some(2));
        assert_eq!(a.index_of('U'), None);
        assert!(!a.is_latin());
    }

    #[test]
    fn mixed_alphabet_lookup_matches_position_order() {
        let text = "zяAΩ1éß";
        let a = Alphabet::new(text).unwrap();
        for (i, c) in text.chars().enumerate() {
            assert_eq!(a.index_of(c), Some(i as u8), "{c}");
            assert_eq!(a.symbol_at(i as u8), c);
        }
        assert_eq!(a.index_of('Ж'), None);
        assert_eq!(a.index_of('Z'), None);
    }
}
