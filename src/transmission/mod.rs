// Chain plumbing around the line encoder: the capability traits every stage
// implements, plus the bit sources and sample sinks used by the CLI and tests.

pub mod sinks;
pub mod sources;

pub use sinks::{JsonSink, ProbeHandle, ProbeSink, TextSink, WavSink};
pub use sources::{FixedSource, RandomSource};

use crate::error::Result;
use crate::information::Information;

/// Anything that accepts information of type `T`.
///
/// Receivers get a shared reference; the same block is handed to every
/// destination of a fan-out, so none of them may alter it for the next.
pub trait Destination<T> {
    fn receive(&mut self, information: &Information<T>) -> Result<()>;
}

/// Anything that emits information of type `T` to connected destinations,
/// in connection order.
pub trait Source<T> {
    fn connect(&mut self, destination: Box<dyn Destination<T>>);

    fn destinations(&self) -> usize;
}

/// Deliver `information` to each destination in order, stopping at the
/// first failure.
pub(crate) fn fan_out<T>(
    destinations: &mut [Box<dyn Destination<T>>],
    information: &Information<T>,
) -> Result<()> {
    for destination in destinations.iter_mut() {
        destination.receive(information)?;
    }
    Ok(())
}
