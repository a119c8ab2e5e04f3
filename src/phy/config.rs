use super::line_coding::{CodeType, Levels};
use crate::error::{Error, Result};
use crate::utils::consts::{
    DEFAULT_AMPLITUDE_MAX, DEFAULT_AMPLITUDE_MIN, DEFAULT_CODE_TYPE,
    DEFAULT_SAMPLES_PER_BIT,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Emitter parameters as they come from a config file or the command line.
///
/// `code_type` stays a raw tag here; it is only checked when an
/// [`Emitter`](super::Emitter) is built from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub code_type: String,
    pub samples_per_bit: usize,
    pub amplitude_max: f32,
    pub amplitude_min: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            code_type: DEFAULT_CODE_TYPE.to_string(),
            samples_per_bit: DEFAULT_SAMPLES_PER_BIT,
            amplitude_max: DEFAULT_AMPLITUDE_MAX,
            amplitude_min: DEFAULT_AMPLITUDE_MIN,
        }
    }
}

impl EmitterConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters that cannot describe a bit period. The code type
    /// is left to [`EmitterConfig::code_type`].
    pub fn validate(&self) -> Result<()> {
        if self.samples_per_bit == 0 {
            return Err(Error::Config(
                "samples_per_bit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn code_type(&self) -> Result<CodeType> {
        self.code_type.parse()
    }

    pub fn levels(&self) -> Levels {
        Levels {
            samples_per_bit: self.samples_per_bit,
            amplitude_max: self.amplitude_max,
            amplitude_min: self.amplitude_min,
        }
    }
}
