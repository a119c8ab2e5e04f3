use super::config::EmitterConfig;
use super::line_coding::{CodeType, LineCode, Levels};
use crate::error::Result;
use crate::information::Information;
use crate::transmission::{Destination, Source, fan_out};
use tracing::{debug, info, warn};

/// Modulator stage of the chain: bits in, sampled waveform out.
///
/// The line code is fixed at construction; the emitter keeps no state
/// between calls apart from its list of destinations.
pub struct Emitter {
    code_type: CodeType,
    line_code: Box<dyn LineCode>,
    destinations: Vec<Box<dyn Destination<f32>>>,
}

impl Emitter {
    /// Create a new emitter
    ///
    /// # Arguments
    /// * `code_type` - Line code used for every block
    /// * `samples_per_bit` - Number of samples generated per bit period
    /// * `amplitude_max` - Level of a 1 bit (and of the RZ pulse)
    /// * `amplitude_min` - Level of a 0 bit (unused by RZ)
    pub fn new(
        code_type: CodeType,
        samples_per_bit: usize,
        amplitude_max: f32,
        amplitude_min: f32,
    ) -> Self {
        let levels = Levels {
            samples_per_bit,
            amplitude_max,
            amplitude_min,
        };
        let line_code = code_type.create(levels);

        info!("Emitter initialized:");
        info!("  - line coding: {}", code_type.name());
        info!("  - samples_per_bit: {}", samples_per_bit);
        info!("  - amplitude: max {} / min {}", amplitude_max, amplitude_min);
        if code_type == CodeType::Nrzt && samples_per_bit < 3 {
            warn!(
                "NRZT with {} samples per bit has no room for ramps",
                samples_per_bit
            );
        }

        Self {
            code_type,
            line_code,
            destinations: Vec::new(),
        }
    }

    /// Same as [`Emitter::new`] with the code type given as a tag
    /// ("NRZ", "NRZT" or "RZ"). Unknown tags fail before anything is built.
    pub fn from_tag(
        tag: &str,
        samples_per_bit: usize,
        amplitude_max: f32,
        amplitude_min: f32,
    ) -> Result<Self> {
        let code_type = tag.parse::<CodeType>()?;
        Ok(Self::new(
            code_type,
            samples_per_bit,
            amplitude_max,
            amplitude_min,
        ))
    }

    pub fn from_config(config: &EmitterConfig) -> Result<Self> {
        config.validate()?;
        Self::from_tag(
            &config.code_type,
            config.samples_per_bit,
            config.amplitude_max,
            config.amplitude_min,
        )
    }

    pub fn code_type(&self) -> CodeType {
        self.code_type
    }

    pub fn levels(&self) -> &Levels {
        self.line_code.levels()
    }

    /// Encode a block of bits without emitting it
    pub fn encode(&self, bits: &Information<bool>) -> Information<f32> {
        let samples = self.line_code.encode(bits);

        debug!(
            "Encoding block: code={}, bits={}, samples={}",
            self.code_type,
            bits.len(),
            samples.len()
        );

        samples
    }

    /// Encode `bits` and hand the waveform to every connected destination,
    /// in connection order
    pub fn encode_and_emit(&mut self, bits: &Information<bool>) -> Result<()> {
        let samples = self.encode(bits);
        fan_out(&mut self.destinations, &samples)
    }
}

impl Destination<bool> for Emitter {
    fn receive(&mut self, information: &Information<bool>) -> Result<()> {
        self.encode_and_emit(information)
    }
}

impl Source<f32> for Emitter {
    fn connect(&mut self, destination: Box<dyn Destination<f32>>) {
        self.destinations.push(destination);
    }

    fn destinations(&self) -> usize {
        self.destinations.len()
    }
}
