use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::report::{interval_series, Feature, TimeError, TimeInterval};

/// Fill gaps in a time-series feature collection: one empty feature per
/// interval timestamp missing from the results, ordered by timestamp.
pub fn backfill_timeseries(
    features: Vec<Feature>,
    interval: TimeInterval,
    start: NaiveDate,
    end: NaiveDate,
    timezone: Tz,
) -> Result<Vec<Feature>, TimeError> {
    let range = interval_series(interval, start, end, timezone)?;

    let mut filled = features;
    for timestamp in range {
        let present = filled
            .iter()
            .any(|feature| feature.timestamp() == Some(timestamp.as_str()));

        if !present {
            filled.push(Feature::empty_at(&timestamp));
        }
    }

    filled.sort_by(|a, b| a.timestamp().cmp(&b.timestamp()));
    Ok(filled)
}
