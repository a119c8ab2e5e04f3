use super::{Destination, Source, fan_out};
use crate::error::Result;
use crate::information::Information;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Emits the same fixed message every time
pub struct FixedSource {
    message: Information<bool>,
    destinations: Vec<Box<dyn Destination<bool>>>,
}

impl FixedSource {
    pub fn new(message: Information<bool>) -> Self {
        Self {
            message,
            destinations: Vec::new(),
        }
    }

    pub fn message(&self) -> &Information<bool> {
        &self.message
    }

    pub fn emit(&mut self) -> Result<()> {
        fan_out(&mut self.destinations, &self.message)
    }
}

impl Source<bool> for FixedSource {
    fn connect(&mut self, destination: Box<dyn Destination<bool>>) {
        self.destinations.push(destination);
    }

    fn destinations(&self) -> usize {
        self.destinations.len()
    }
}

/// Emits `length` random bits, drawn once at construction.
///
/// With a seed the message is reproducible across runs.
pub struct RandomSource {
    inner: FixedSource,
}

impl RandomSource {
    pub fn new(length: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let message: Information<bool> =
            (0..length).map(|_| rng.random::<bool>()).collect();

        info!("Random source: {} bits (seed: {:?})", length, seed);

        Self {
            inner: FixedSource::new(message),
        }
    }

    pub fn message(&self) -> &Information<bool> {
        self.inner.message()
    }

    pub fn emit(&mut self) -> Result<()> {
        self.inner.emit()
    }
}

impl Source<bool> for RandomSource {
    fn connect(&mut self, destination: Box<dyn Destination<bool>>) {
        self.inner.connect(destination);
    }

    fn destinations(&self) -> usize {
        self.inner.destinations()
    }
}
