use crate::error::Result;
use crate::information::Information;
use crate::phy::{CodeType, Levels};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Encoded waveform together with the parameters that produced it
#[derive(Debug, Serialize, Deserialize)]
pub struct SampleDump {
    pub code_type: String,
    pub samples_per_bit: usize,
    pub amplitude_max: f32,
    pub amplitude_min: f32,
    pub samples: Information<f32>,
}

impl SampleDump {
    pub fn new(
        code_type: CodeType,
        levels: &Levels,
        samples: Information<f32>,
    ) -> Self {
        Self {
            code_type: code_type.name().to_string(),
            samples_per_bit: levels.samples_per_bit,
            amplitude_max: levels.amplitude_max,
            amplitude_min: levels.amplitude_min,
            samples,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
