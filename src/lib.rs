pub mod error;
pub mod information;
pub mod phy;
pub mod transmission;
pub mod utils;

pub use error::{Error, Result};
pub use information::Information;
pub use phy::{CodeType, Emitter, EmitterConfig};
