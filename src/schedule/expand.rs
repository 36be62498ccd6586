use crate::schedule::field::parse_field;
use anyhow::Result;
use tracing::warn;

pub const HOUR_MAX: u32 = 23;
pub const MINUTE_MAX: u32 = 59;

/// One (hour, minute) firing time within a UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub hour: u32,
    pub minute: u32,
}

/// Expand a job's hour and minute fields into every firing time in one UTC
/// day: the cross-product of the two parsed sets, in no particular order.
///
/// Malformed field text never escapes this boundary: the job degrades to a
/// single midnight occurrence so bad upstream data cannot abort a report.
pub fn expand(hours: &str, minutes: &str) -> Vec<Occurrence> {
    match try_expand(hours, minutes) {
        Ok(occurrences) => occurrences,
        Err(err) => {
            warn!(
                "unparseable schedule (hours={:?} minutes={:?}), using 00:00 fallback: {:#}",
                hours, minutes, err
            );
            vec![Occurrence { hour: 0, minute: 0 }]
        }
    }
}

fn try_expand(hours: &str, minutes: &str) -> Result<Vec<Occurrence>> {
    let hour_set = parse_field(hours, HOUR_MAX)?;
    let minute_set = parse_field(minutes, MINUTE_MAX)?;

    let mut occurrences = Vec::with_capacity(hour_set.len() * minute_set.len());
    for &hour in &hour_set {
        for &minute in &minute_set {
            occurrences.push(Occurrence { hour, minute });
        }
    }
    Ok(occurrences)
}
