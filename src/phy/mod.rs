// Physical layer: baseband line coding of a bit stream into samples

pub mod config;
pub mod emitter;
pub mod line_coding;
pub mod nrz;
pub mod nrzt;
pub mod rz;

pub use config::EmitterConfig;
pub use emitter::Emitter;
pub use line_coding::{CodeType, LineCode, Levels};
