use super::ScoreError;
use serde::Serialize;

/// A calibration point mapping a raw measurement to a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreStep {
    pub value: f64,
    pub norm: f64,
}

impl ScoreStep {
    #[must_use]
    pub const fn new(value: f64, norm: f64) -> Self {
        Self { value, norm }
    }
}

/// Map `value` onto a score by linear interpolation between calibration steps.
///
/// Values below the first step take the first step's norm, values at or beyond the last step
/// take the last step's norm. Steps must be strictly ascending by value.
pub fn normalize(value: f64, steps: &[ScoreStep]) -> Result<f64, ScoreError> {
    let invalid = || ScoreError::InvalidNormalization { value };

    let Some(first) = steps.first() else {
        return Err(invalid());
    };

    // equal values would make the interpolation slope undefined
    if steps.windows(2).any(|pair| !matches!(pair, [low, high] if low.value < high.value)) {
        return Err(invalid());
    }

    let Some(index) = steps.iter().rposition(|step| step.value <= value) else {
        return Ok(first.norm);
    };

    match (steps.get(index), steps.get(index + 1)) {
        (Some(low), Some(high)) => {
            let normalized = low.norm + (high.norm - low.norm) * (value - low.value) / (high.value - low.value);
            if normalized.is_finite() { Ok(normalized) } else { Err(invalid()) }
        }
        (Some(last), None) => Ok(last.norm),
        (None, _) => Err(invalid()),
    }
}
