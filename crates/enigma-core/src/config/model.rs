// crates/enigma-core/src/config/model.rs

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::config::{catalog, notation};
use crate::dynamics::machine::Machine;
use crate::error::{ConfigurationError, EnigmaError, Result};
use crate::wiring::reflector::Reflector;
use crate::wiring::rotor::{NotchSet, Rotor, Wiring};

type BuildResult<T> = std::result::Result<T, ConfigurationError>;

/// Ring setting or window position: a symbol, or a 1-based number as printed on the tyre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    Symbol(char),
    Number(u16),
}

impl Default for Setting {
    fn default() -> Self {
        Setting::Number(1)
    }
}

impl Setting {
    /// Zero-based position for rotor `slot` (1-based, for messages).
    pub fn resolve(self, alphabet: &Alphabet, slot: usize) -> BuildResult<u8> {
        match self {
            Setting::Symbol(c) => match alphabet.index_of(c) {
                Some(p) => Ok(p),
                None => Err(ConfigurationError::ForeignSymbol {
                    component: format!("rotor slot {slot}"),
                    symbol: c,
                }),
            },
            Setting::Number(v) if v >= 1 && (v as usize) <= alphabet.len() => Ok((v - 1) as u8),
            Setting::Number(v) => Err(ConfigurationError::SettingOutOfRange {
                slot,
                value: v,
                size: alphabet.len(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WheelChoice {
    /// Name of a catalog wheel ("III", "Beta").
    Catalog(String),
    Custom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        wiring: String,
        #[serde(default)]
        notches: String,
        #[serde(default)]
        stationary: bool,
    },
}

impl WheelChoice {
    pub fn label(&self) -> &str {
        match self {
            WheelChoice::Catalog(name) => name,
            WheelChoice::Custom { name, .. } => name.as_deref().unwrap_or("custom"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReflectorChoice {
    Catalog(String),
    Custom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        wiring: String,
    },
}

impl ReflectorChoice {
    pub fn label(&self) -> &str {
        match self {
            ReflectorChoice::Catalog(name) => name,
            ReflectorChoice::Custom { name, .. } => name.as_deref().unwrap_or("custom"),
        }
    }

    pub(crate) fn resolve(&self, alphabet: &Alphabet) -> BuildResult<Reflector> {
        match self {
            ReflectorChoice::Catalog(name) => {
                let entry = catalog::reflector_by_name(name)
                    .ok_or_else(|| ConfigurationError::UnknownReflector(name.clone()))?;
                if alphabet.is_latin() {
                    if let Some(r) = catalog::latin_reflector(name) {
                        return Ok(r);
                    }
                }
                Reflector::parse(alphabet, entry.name, entry.wiring)
            }
            ReflectorChoice::Custom { wiring, .. } => {
                Reflector::parse(alphabet, self.label(), wiring)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSlot {
    pub wheel: WheelChoice,
    #[serde(default)]
    pub ring: Setting,
    #[serde(default)]
    pub position: Setting,
}

impl RotorSlot {
    pub fn catalog(name: impl Into<String>) -> Self {
        Self {
            wheel: WheelChoice::Catalog(name.into()),
            ring: Setting::default(),
            position: Setting::default(),
        }
    }

    pub(crate) fn resolve(&self, alphabet: &Alphabet, slot: usize) -> BuildResult<Rotor> {
        let label = self.wheel.label();
        let component = format!("rotor {label} (slot {slot})");

        let (wiring, notches, stationary) = match &self.wheel {
            WheelChoice::Catalog(name) => {
                let entry = catalog::wheel_by_name(name)
                    .ok_or_else(|| ConfigurationError::UnknownRotor(name.clone()))?;
                let cached = if alphabet.is_latin() {
                    catalog::latin_wiring(name)
                } else {
                    None
                };
                let wiring = match cached {
                    Some(w) => w,
                    None => Arc::new(Wiring::parse(alphabet, &component, entry.wiring)?),
                };
                let notches = NotchSet::parse(alphabet, &component, entry.notches)?;
                (wiring, notches, entry.stationary)
            }
            WheelChoice::Custom {
                wiring,
                notches,
                stationary,
                ..
            } => (
                Arc::new(Wiring::parse(alphabet, &component, wiring)?),
                NotchSet::parse(alphabet, &component, notches)?,
                *stationary,
            ),
        };

        let ring = self.ring.resolve(alphabet, slot)?;
        let position = self.position.resolve(alphabet, slot)?;
        let rotor = Rotor::new(label, wiring, notches, ring, position);
        Ok(rotor.with_stationary(stationary))
    }
}

/// Everything needed to rebuild a machine: wheel order (left to right), rings,
/// window positions, reflector and plugboard. Serde-friendly for TOML machine files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Symbol set; omitted means the 26 Latin capitals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
    pub reflector: ReflectorChoice,
    #[serde(default)]
    pub plugboard: Vec<String>,
    pub rotors: Vec<RotorSlot>,
}

impl MachineConfig {
    /// `MachineConfig::new("I II III", "B")`: rings and positions all at the first symbol.
    pub fn new(wheels: &str, reflector: &str) -> Result<Self> {
        let rotors = notation::parse_wheels(wheels)?
            .into_iter()
            .map(RotorSlot::catalog)
            .collect();
        Ok(Self {
            alphabet: None,
            reflector: ReflectorChoice::Catalog(reflector.trim().to_string()),
            plugboard: Vec::new(),
            rotors,
        })
    }

    pub fn with_alphabet(mut self, symbols: impl Into<String>) -> Self {
        self.alphabet = Some(symbols.into());
        self
    }

    pub fn with_rings(mut self, rings: &str) -> Result<Self> {
        let settings = self.settings_for("ring settings", rings)?;
        for (slot, s) in self.rotors.iter_mut().zip(settings) {
            slot.ring = s;
        }
        Ok(self)
    }

    pub fn with_positions(mut self, positions: &str) -> Result<Self> {
        let settings = self.settings_for("rotor positions", positions)?;
        for (slot, s) in self.rotors.iter_mut().zip(settings) {
            slot.position = s;
        }
        Ok(self)
    }

    pub fn with_plugs(mut self, plugs: &str) -> Result<Self> {
        self.plugboard = notation::parse_plugs(plugs)?;
        Ok(self)
    }

    fn settings_for(&self, what: &str, text: &str) -> Result<Vec<Setting>> {
        let settings = notation::parse_settings(text)?;
        if settings.len() != self.rotors.len() {
            return Err(EnigmaError::Notation(format!(
                "expected {} {what}, got {}",
                self.rotors.len(),
                settings.len()
            )));
        }
        Ok(settings)
    }

    pub fn alphabet(&self) -> BuildResult<Alphabet> {
        match &self.alphabet {
            Some(symbols) => Alphabet::new(symbols),
            None => Ok(Alphabet::latin()),
        }
    }

    /// Same machine, with window positions taken from `machine`'s current state.
    /// This is what a key sheet stores to resume a session.
    pub fn resume_from(&self, machine: &Machine) -> MachineConfig {
        let mut next = self.clone();
        let alphabet = machine.alphabet();
        for (slot, rotor) in next.rotors.iter_mut().zip(machine.rotors()) {
            slot.position = Setting::Symbol(alphabet.symbol_at(rotor.position()));
        }
        next
    }

    pub fn wheel_labels(&self) -> Vec<&str> {
        self.rotors.iter().map(|r| r.wheel.label()).collect()
    }
}
