use super::Destination;
use crate::error::Result;
use crate::information::Information;
use crate::phy::{CodeType, Levels};
use crate::utils::dump::SampleDump;
use crate::utils::io::{write_to_txt, write_to_wav};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Keeps a copy of every block it receives.
///
/// The probe is moved into the chain; read what it saw through the
/// [`ProbeHandle`] taken beforehand.
pub struct ProbeSink<T> {
    received: Arc<Mutex<Vec<Information<T>>>>,
}

#[derive(Clone)]
pub struct ProbeHandle<T> {
    received: Arc<Mutex<Vec<Information<T>>>>,
}

impl<T: Clone> ProbeSink<T> {
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn handle(&self) -> ProbeHandle<T> {
        ProbeHandle {
            received: Arc::clone(&self.received),
        }
    }
}

impl<T: Clone> Default for ProbeSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProbeHandle<T> {
    pub fn received(&self) -> Vec<Information<T>> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    pub fn last(&self) -> Option<Information<T>> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Information<T>>> {
        // a poisoned probe still holds valid blocks
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: Clone> Destination<T> for ProbeSink<T> {
    fn receive(&mut self, information: &Information<T>) -> Result<()> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(information.clone());
        Ok(())
    }
}

/// Writes each received waveform to a mono 16-bit WAV file
pub struct WavSink {
    path: PathBuf,
    sample_rate: u32,
}

impl WavSink {
    pub fn new(path: impl Into<PathBuf>, sample_rate: u32) -> Self {
        Self {
            path: path.into(),
            sample_rate,
        }
    }
}

impl Destination<f32> for WavSink {
    fn receive(&mut self, information: &Information<f32>) -> Result<()> {
        write_to_wav(information.as_slice(), self.sample_rate, &self.path)?;
        info!(
            "Wrote {} samples to {} ({} Hz)",
            information.len(),
            self.path.display(),
            self.sample_rate
        );
        Ok(())
    }
}

/// Writes each received waveform as text, one sample per line
pub struct TextSink {
    path: PathBuf,
}

impl TextSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Destination<f32> for TextSink {
    fn receive(&mut self, information: &Information<f32>) -> Result<()> {
        write_to_txt(information.as_slice(), &self.path)?;
        debug!("Wrote {} samples to {}", information.len(), self.path.display());
        Ok(())
    }
}

pub struct JsonSink {
    path: PathBuf,
    code_type: CodeType,
    levels: Levels,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>, code_type: CodeType, levels: Levels) -> Self {
        Self {
            path: path.into(),
            code_type,
            levels,
        }
    }
}

impl Destination<f32> for JsonSink {
    fn receive(&mut self, information: &Information<f32>) -> Result<()> {
        let dump = SampleDump::new(self.code_type, &self.levels, information.clone());
        dump.save(&self.path)?;
        debug!("Dumped {} samples to {}", information.len(), self.path.display());
        Ok(())
    }
}
