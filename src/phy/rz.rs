use super::line_coding::{LineCode, Levels};
use crate::information::Information;

/// Return-to-zero: a 1 is a pulse at `amplitude_max` over the middle third
/// of its period, a 0 stays at zero. `amplitude_min` is never used.
///
/// Thirds are cut at `spb / 3` and `2 * spb / 3`, so any remainder ends up
/// in the last third.
pub struct Rz {
    levels: Levels,
}

impl Rz {
    pub fn new(levels: Levels) -> Self {
        Self { levels }
    }
}

impl LineCode for Rz {
    fn encode(&self, bits: &Information<bool>) -> Information<f32> {
        let spb = self.levels.samples_per_bit;
        let first_third = spb / 3;
        let second_third = 2 * spb / 3;
        let mut samples = Information::with_capacity(self.samples_for_bits(bits.len()));

        for &bit in bits {
            if bit {
                samples.push_repeated(0.0, first_third);
                samples.push_repeated(
                    self.levels.amplitude_max,
                    second_third - first_third,
                );
                samples.push_repeated(0.0, spb - second_third);
            } else {
                samples.push_repeated(0.0, spb);
            }
        }

        samples
    }

    fn levels(&self) -> &Levels {
        &self.levels
    }
}
