use thiserror::Error;

/// Failures raised while deriving sub-scores from collected package data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A fixed-length window required to derive a rate is absent from a series.
    #[error("could not find the {days}-day entry in {series}")]
    MissingWindow { series: &'static str, days: i64 },

    /// Interpolation produced a NaN or infinite value, or the calibration steps are unusable.
    #[error("invalid value or steps while normalizing {value}")]
    InvalidNormalization { value: f64 },
}
