pub mod error;
pub mod validate;

pub mod alphabet;
pub mod config;
pub mod dynamics;
pub mod stats;
pub mod wiring;

pub use crate::alphabet::Alphabet;
pub use crate::config::model::{MachineConfig, ReflectorChoice, RotorSlot, Setting, WheelChoice};
pub use crate::dynamics::machine::{Machine, ProcessSequence};
pub use crate::error::{ConfigurationError, EnigmaError, Result, UnsupportedSymbolError};
