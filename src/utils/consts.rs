/// Log level (overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Emitter defaults
// ============================================================================

/// Line code used when none is configured
pub const DEFAULT_CODE_TYPE: &str = "RZ";

/// Samples per bit period
pub const DEFAULT_SAMPLES_PER_BIT: usize = 30;

/// Level of a 1 bit
pub const DEFAULT_AMPLITUDE_MAX: f32 = 1.0;

/// Level of a 0 bit
pub const DEFAULT_AMPLITUDE_MIN: f32 = 0.0;

// ============================================================================
// CLI chain
// ============================================================================

/// Length of the random message when neither bits nor a length are given
pub const DEFAULT_MESSAGE_LENGTH: usize = 100;

/// Sample rate written into WAV headers (Hz)
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;
