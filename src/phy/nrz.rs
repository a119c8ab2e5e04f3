use super::line_coding::{LineCode, Levels};
use crate::information::Information;

// NRZ: 1 -> amplitude_max, 0 -> amplitude_min, held for the whole bit
pub struct Nrz {
    levels: Levels,
}

impl Nrz {
    pub fn new(levels: Levels) -> Self {
        Self { levels }
    }
}

impl LineCode for Nrz {
    fn encode(&self, bits: &Information<bool>) -> Information<f32> {
        let mut samples =
            Information::with_capacity(self.samples_for_bits(bits.len()));

        for &bit in bits {
            samples.push_repeated(
                self.levels.target(bit),
                self.levels.samples_per_bit,
            );
        }

        samples
    }

    fn levels(&self) -> &Levels {
        &self.levels
    }
}
