// crates/enigma-core/src/wiring/rotor.rs

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::ConfigurationError;
use crate::validate;

/// Forward permutation plus its derived inverse.
/// Only constructible from a validated permutation, so lookups never miss.
#[derive(Debug, PartialEq, Eq)]
pub struct Wiring {
    forward: Box<[u8]>,
    inverse: Box<[u8]>,
}

impl Wiring {
    pub fn parse(
        alphabet: &Alphabet,
        component: &str,
        text: &str,
    ) -> Result<Self, ConfigurationError> {
        let forward = validate::permutation(alphabet, component, text)?;
        Ok(Self::from_permutation(forward))
    }

    fn from_permutation(forward: Vec<u8>) -> Self {
        let mut inverse = vec![0u8; forward.len()];
        for (i, &out) in forward.iter().enumerate() {
            inverse[out as usize] = i as u8;
        }
        Self {
            forward: forward.into_boxed_slice(),
            inverse: inverse.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    #[inline]
    pub fn forward(&self, p: u8) -> u8 {
        self.forward[p as usize]
    }

    #[inline]
    pub fn backward(&self, p: u8) -> u8 {
        self.inverse[p as usize]
    }
}

/// Bitset over the 256 possible positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotchSet([u64; 4]);

impl NotchSet {
    pub fn parse(
        alphabet: &Alphabet,
        component: &str,
        text: &str,
    ) -> Result<Self, ConfigurationError> {
        Ok(alphabet
            .indices(component, text)?
            .into_iter()
            .collect())
    }

    #[inline]
    pub fn insert(&mut self, p: u8) {
        self.0[(p >> 6) as usize] |= 1u64 << (p & 63);
    }

    #[inline]
    pub fn contains(&self, p: u8) -> bool {
        self.0[(p >> 6) as usize] & (1u64 << (p & 63)) != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&p| self.contains(p))
    }
}

impl FromIterator<u8> for NotchSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = NotchSet::default();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

/// One wheel of the bank. Wiring is shared; ring and position belong to this machine.
#[derive(Clone, Debug)]
pub struct Rotor {
    name: Arc<str>,
    wiring: Arc<Wiring>,
    notches: NotchSet,
    ring: u8,
    position: u8,
    stationary: bool,
}

impl Rotor {
    /// `ring` and `position` are zero-based and reduced modulo the wiring size.
    pub fn new(
        name: impl Into<Arc<str>>,
        wiring: Arc<Wiring>,
        notches: NotchSet,
        ring: u8,
        position: u8,
    ) -> Self {
        let n = wiring.len();
        Self {
            name: name.into(),
            notches,
            ring: (ring as usize % n) as u8,
            position: (position as usize % n) as u8,
            stationary: false,
            wiring,
        }
    }

    /// Mark this wheel as one that never turns (the thin fourth wheels).
    pub fn with_stationary(mut self, stationary: bool) -> Self {
        self.stationary = stationary;
        self
    }

    // Signal entry offset: rotation minus ring alignment.
    #[inline]
    fn offset(&self) -> usize {
        let n = self.wiring.len();
        (self.position as usize + n - self.ring as usize) % n
    }

    /// Right-to-left pass, toward the reflector.
    #[inline]
    pub fn encode_forward(&self, p: u8) -> u8 {
        let n = self.wiring.len();
        let o = self.offset();
        let out = self.wiring.forward(((p as usize + o) % n) as u8) as usize;
        ((out + n - o) % n) as u8
    }

    /// Left-to-right pass, after reflection.
    #[inline]
    pub fn encode_backward(&self, p: u8) -> u8 {
        let n = self.wiring.len();
        let o = self.offset();
        let out = self.wiring.backward(((p as usize + o) % n) as u8) as usize;
        ((out + n - o) % n) as u8
    }

    /// Turn one position. Returns whether the wheel sat on a notch before turning.
    ///
    /// The bank stepper reads every notch before any wheel moves, so it
    /// ignores this value.
    #[inline]
    pub fn advance(&mut self) -> bool {
        let was_at_notch = self.is_at_notch();
        self.position = ((self.position as usize + 1) % self.wiring.len()) as u8;
        was_at_notch
    }

    #[inline]
    pub fn is_at_notch(&self) -> bool {
        self.notches.contains(self.position)
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.stationary
    }

    #[inline]
    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn set_position(&mut self, position: u8) {
        self.position = (position as usize % self.wiring.len()) as u8;
    }

    #[inline]
    pub fn ring_setting(&self) -> u8 {
        self.ring
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notches(&self) -> &NotchSet {
        &self.notches
    }
}
