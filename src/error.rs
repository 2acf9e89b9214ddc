use thiserror::Error;

use crate::{MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};

/// Construction-time failures. Nothing on the per-sample path returns these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("sample rate {0} Hz is invalid (must be within {MIN_SAMPLE_RATE}..={MAX_SAMPLE_RATE} Hz)")]
    InvalidSampleRate(f32),

    #[error("buffer length must be greater than zero")]
    InvalidBufferLength,

    #[error("unknown generator `{0}` (expected white-noise, rain, forest, waves or lofi-study)")]
    UnknownGenerator(String),
}

/// Validate a sample rate once, before any streaming starts.
pub fn validate_sample_rate(sample_rate: f32) -> Result<f32, GeneratorError> {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(sample_rate)
    } else {
        Err(GeneratorError::InvalidSampleRate(sample_rate))
    }
}
