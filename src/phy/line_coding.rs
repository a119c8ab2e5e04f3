use super::{nrz::Nrz, nrzt::Nrzt, rz::Rz};
use crate::error::Error;
use crate::information::Information;
use std::fmt;
use std::str::FromStr;

/// Waveform parameters shared by every line code
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Levels {
    pub samples_per_bit: usize,
    pub amplitude_max: f32,
    pub amplitude_min: f32,
}

impl Levels {
    /// Amplitude a bit maps to: max for 1, min for 0
    pub fn target(&self, bit: bool) -> f32 {
        if bit {
            self.amplitude_max
        } else {
            self.amplitude_min
        }
    }
}

/// A baseband line code turning bits into amplitude samples.
///
/// Implementations are stateless: each call allocates a fresh output and
/// never looks at anything but `bits` and their own levels.
pub trait LineCode {
    fn encode(&self, bits: &Information<bool>) -> Information<f32>;

    fn levels(&self) -> &Levels;

    fn samples_for_bits(&self, num_bits: usize) -> usize {
        num_bits * self.levels().samples_per_bit
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeType {
    /// Constant level per bit
    Nrz,
    /// NRZ with linear ramps at level changes
    Nrzt,
    /// Pulse in the middle third of every 1 bit
    Rz,
}

impl CodeType {
    pub const ALL: [CodeType; 3] = [CodeType::Nrz, CodeType::Nrzt, CodeType::Rz];

    pub fn name(&self) -> &'static str {
        match self {
            CodeType::Nrz => "NRZ",
            CodeType::Nrzt => "NRZT",
            CodeType::Rz => "RZ",
        }
    }

    pub fn create(&self, levels: Levels) -> Box<dyn LineCode> {
        match self {
            CodeType::Nrz => Box::new(Nrz::new(levels)),
            CodeType::Nrzt => Box::new(Nrzt::new(levels)),
            CodeType::Rz => Box::new(Rz::new(levels)),
        }
    }
}

impl FromStr for CodeType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        CodeType::ALL
            .into_iter()
            .find(|code| code.name() == tag)
            .ok_or_else(|| Error::UnsupportedCodeType(tag.to_string()))
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
