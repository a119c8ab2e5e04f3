use super::line_coding::{LineCode, Levels};
use crate::information::Information;

/// Trapezoidal NRZ.
///
/// Each bit holds its target level like NRZ, but where the level changes the
/// signal ramps through zero instead of jumping:
///
/// ```text
///   n <  spb/3    and the previous bit differs (or this is the first bit)
///                 -> rise from 0:   n * target / (spb / 3)
///   n >  2*spb/3  and the next bit differs (or this is the last bit)
///                 -> fall to 0:     target * 3 * (spb - n) / spb
///   otherwise     -> target
/// ```
///
/// Runs of identical bits therefore form a single flat plateau, and the
/// whole transmission starts and ends at zero.
pub struct Nrzt {
    levels: Levels,
}

impl Nrzt {
    pub fn new(levels: Levels) -> Self {
        Self { levels }
    }

    fn rising(&self, n: usize, target: f32) -> f32 {
        // float third: the ramp reaches `target` right at the boundary
        n as f32 * target / (self.levels.samples_per_bit as f32 / 3.0)
    }

    fn falling(&self, n: usize, target: f32) -> f32 {
        let spb = self.levels.samples_per_bit;
        target * (3 * (spb - n)) as f32 / spb as f32
    }
}

impl LineCode for Nrzt {
    fn encode(&self, bits: &Information<bool>) -> Information<f32> {
        let spb = self.levels.samples_per_bit;
        let rise_end = spb / 3;
        let fall_start = 2 * spb / 3;
        let bits = bits.as_slice();
        let mut samples = Information::with_capacity(self.samples_for_bits(bits.len()));

        for (i, &bit) in bits.iter().enumerate() {
            let target = self.levels.target(bit);
            let edge_before = i == 0 || bits[i - 1] != bit;
            let edge_after = i + 1 == bits.len() || bits[i + 1] != bit;

            for n in 0..spb {
                let sample = if edge_before && n < rise_end {
                    self.rising(n, target)
                } else if edge_after && n > fall_start {
                    self.falling(n, target)
                } else {
                    target
                };
                samples.push(sample);
            }
        }

        samples
    }

    fn levels(&self) -> &Levels {
        &self.levels
    }
}
