use super::{ScoreError, count_to_f64};
use crate::facts::TimeRange;

/// Find the entry of `series` spanning exactly `days` days.
pub fn find_window<'a>(series: &'a [TimeRange], series_name: &'static str, days: i64) -> Result<&'a TimeRange, ScoreError> {
    series
        .iter()
        .find(|range| range.days() == days)
        .ok_or(ScoreError::MissingWindow { series: series_name, days })
}

/// Events per `base_days` days, given a window of `days` days.
#[expect(clippy::cast_precision_loss, reason = "window lengths are small")]
pub fn rate_per(range: &TimeRange, days: i64, base_days: i64) -> f64 {
    count_to_f64(range.count) / (days as f64 / base_days as f64)
}
