use crate::schedule::expand::Occurrence;
use chrono::{LocalResult, TimeZone, Timelike, Utc};
use chrono_tz::America::Denver;

/// Calendar date every conversion is anchored to. Keeping the date fixed
/// gives one consistent offset rule across a whole report instead of
/// whichever rule happens to hold on the day the report is rendered.
/// Mid-January is standard time (UTC-7) in the Mountain zone.
const REFERENCE_DATE: (i32, u32, u32) = (2024, 1, 15);

/// An (hour, minute) pair on the US Mountain Time wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
}

/// Convert a UTC occurrence to Mountain-time wall clock on the reference
/// date. Crossing the day boundary wraps the hour into 0-23.
pub fn to_mountain(occurrence: Occurrence) -> CivilTime {
    let (year, month, day) = REFERENCE_DATE;
    match Utc.with_ymd_and_hms(
        year,
        month,
        day,
        occurrence.hour % 24,
        occurrence.minute % 60,
        0,
    ) {
        LocalResult::Single(utc) => {
            let local = utc.with_timezone(&Denver);
            CivilTime {
                hour: local.hour(),
                minute: local.minute(),
            }
        }
        // Unreachable for in-domain input; map through unchanged rather
        // than panic inside a render pass.
        _ => CivilTime {
            hour: occurrence.hour,
            minute: occurrence.minute,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_offset_applied() {
        // Mountain Standard Time is UTC-7 on the reference date.
        let civil = to_mountain(Occurrence { hour: 12, minute: 30 });
        assert_eq!(civil, CivilTime { hour: 5, minute: 30 });
    }

    #[test]
    fn test_wraps_across_day_boundary() {
        let civil = to_mountain(Occurrence { hour: 3, minute: 45 });
        assert_eq!(civil, CivilTime { hour: 20, minute: 45 });

        let civil = to_mountain(Occurrence { hour: 6, minute: 59 });
        assert_eq!(civil, CivilTime { hour: 23, minute: 59 });

        let civil = to_mountain(Occurrence { hour: 7, minute: 0 });
        assert_eq!(civil, CivilTime { hour: 0, minute: 0 });
    }

    #[test]
    fn test_minutes_are_preserved() {
        for minute in [0, 1, 17, 59] {
            let civil = to_mountain(Occurrence { hour: 18, minute });
            assert_eq!(civil.minute, minute);
        }
    }

    #[test]
    fn test_total_and_injective_over_a_day() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        for hour in 0..24 {
            for minute in 0..60 {
                let civil = to_mountain(Occurrence { hour, minute });
                assert!(civil.hour <= 23);
                assert!(civil.minute <= 59);
                assert!(seen.insert(civil), "duplicate mapping for {}:{}", hour, minute);
            }
        }
        assert_eq!(seen.len(), 1440);
    }

    #[test]
    fn test_civil_time_orders_chronologically() {
        let early = CivilTime { hour: 6, minute: 30 };
        let later_same_hour = CivilTime { hour: 6, minute: 45 };
        let later = CivilTime { hour: 14, minute: 0 };
        assert!(early < later_same_hour);
        assert!(later_same_hour < later);
    }
}
