// crates/enigma-core/src/config/catalog.rs
//
// Historical wheel and reflector tables (Wehrmacht / Kriegsmarine).
// Process-wide constants; parsed tables are cached once and shared by `Arc`.

use std::sync::{Arc, OnceLock};

use crate::alphabet::Alphabet;
use crate::wiring::reflector::Reflector;
use crate::wiring::rotor::Wiring;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogWheel {
    pub name: &'static str,
    pub wiring: &'static str,
    /// Window letters at which this wheel carries into its left neighbour.
    pub notches: &'static str,
    /// Thin fourth wheels sit in the M4's leftmost slot and never turn.
    pub stationary: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogReflector {
    pub name: &'static str,
    pub wiring: &'static str,
}

const fn wheel(name: &'static str, wiring: &'static str, notches: &'static str) -> CatalogWheel {
    CatalogWheel {
        name,
        wiring,
        notches,
        stationary: false,
    }
}

const fn thin_wheel(name: &'static str, wiring: &'static str) -> CatalogWheel {
    CatalogWheel {
        name,
        wiring,
        notches: "",
        stationary: true,
    }
}

pub static WHEELS: &[CatalogWheel] = &[
    wheel("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    wheel("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    wheel("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    wheel("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    wheel("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    wheel("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
    wheel("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
    wheel("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),
    thin_wheel("Beta", "LEYJVCNIXWPBQMDRTAKZGFUHOS"),
    thin_wheel("Gamma", "FSOKANUERHMBTIYCWLQPZXVGJD"),
];

pub static REFLECTORS: &[CatalogReflector] = &[
    CatalogReflector {
        name: "A",
        wiring: "EJMZALYXVBWFCRQUONTSPIKHGD",
    },
    CatalogReflector {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    CatalogReflector {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
    CatalogReflector {
        name: "B-Thin",
        wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS",
    },
    CatalogReflector {
        name: "C-Thin",
        wiring: "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
    },
];

// "b-thin", "B_THIN" and "bthin" all name the same table.
fn same_name(a: &str, b: &str) -> bool {
    let norm = |s: &str| {
        s.chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect::<String>()
    };
    norm(a) == norm(b)
}

fn wheel_index(name: &str) -> Option<usize> {
    WHEELS.iter().position(|w| same_name(w.name, name))
}

fn reflector_index(name: &str) -> Option<usize> {
    REFLECTORS.iter().position(|r| same_name(r.name, name))
}

pub fn wheel_by_name(name: &str) -> Option<&'static CatalogWheel> {
    wheel_index(name).map(|i| &WHEELS[i])
}

pub fn reflector_by_name(name: &str) -> Option<&'static CatalogReflector> {
    reflector_index(name).map(|i| &REFLECTORS[i])
}

/// Parsed Latin wiring for a catalog wheel, shared by every machine.
pub(crate) fn latin_wiring(name: &str) -> Option<Arc<Wiring>> {
    static CACHE: OnceLock<Vec<Option<Arc<Wiring>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| {
        let a = Alphabet::latin();
        WHEELS
            .iter()
            .map(|w| Wiring::parse(&a, w.name, w.wiring).ok().map(Arc::new))
            .collect()
    });
    cache[wheel_index(name)?].clone()
}

pub(crate) fn latin_reflector(name: &str) -> Option<Reflector> {
    static CACHE: OnceLock<Vec<Option<Reflector>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| {
        let a = Alphabet::latin();
        REFLECTORS
            .iter()
            .map(|r| Reflector::parse(&a, r.name, r.wiring).ok())
            .collect()
    });
    cache[reflector_index(name)?].clone()
}
