use crate::job::Job;
use crate::schedule::expand;

/// How a job is grouped for display: by pattern, or by exact firing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Recurring,
    Scheduled,
}

/// Daily occurrence count above which a job reads as continuous rather than
/// scheduled.
const RECURRING_THRESHOLD: usize = 8;

/// A job is recurring when it fires more than eight times a day, or when
/// either raw field carries a step marker; a step encodes a repeating
/// interval even when the resulting occurrence count is small.
pub fn classify(job: &Job) -> Category {
    let occurrences = expand::expand(job.hours_or_default(), job.minutes_or_default());
    let has_step =
        job.hours_or_default().contains('/') || job.minutes_or_default().contains('/');

    if occurrences.len() > RECURRING_THRESHOLD || has_step {
        Category::Recurring
    } else {
        Category::Scheduled
    }
}

/// Split a snapshot into (recurring, scheduled), preserving input order in
/// both halves.
pub fn partition(jobs: &[Job]) -> (Vec<&Job>, Vec<&Job>) {
    let mut recurring = Vec::new();
    let mut scheduled = Vec::new();
    for job in jobs {
        match classify(job) {
            Category::Recurring => recurring.push(job),
            Category::Scheduled => scheduled.push(job),
        }
    }
    (recurring, scheduled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, hours: &str, minutes: &str) -> Job {
        serde_json::from_str(&format!(
            r#"{{"Name": "{}", "enabled": true, "hours": "{}", "minutes": "{}"}}"#,
            name, hours, minutes
        ))
        .unwrap()
    }

    #[test]
    fn test_high_occurrence_count_is_recurring() {
        // 24 hours x 1 minute = 24 occurrences.
        assert_eq!(classify(&job("a", "*", "0")), Category::Recurring);
        assert_eq!(classify(&job("b", "*", "*")), Category::Recurring);
    }

    #[test]
    fn test_few_occurrences_is_scheduled() {
        assert_eq!(classify(&job("a", "6", "30")), Category::Scheduled);
        // 2 hours x 4 minutes = 8 occurrences, not over the threshold.
        assert_eq!(classify(&job("b", "6,18", "0,15,30,45")), Category::Scheduled);
    }

    #[test]
    fn test_nine_occurrences_is_recurring() {
        // 3 x 3 = 9 crosses the threshold.
        assert_eq!(classify(&job("a", "1,2,3", "0,20,40")), Category::Recurring);
    }

    #[test]
    fn test_step_marker_overrides_low_count() {
        // Two occurrences, but the step marker still classifies it recurring.
        assert_eq!(classify(&job("a", "0-23/12", "0")), Category::Recurring);
        assert_eq!(classify(&job("b", "6", "0-59/30")), Category::Recurring);
    }

    #[test]
    fn test_fallback_occurrence_is_scheduled() {
        // Malformed fields degrade to a single midnight occurrence.
        assert_eq!(classify(&job("a", "abc", "0")), Category::Scheduled);
    }

    #[test]
    fn test_partition_is_exhaustive_and_ordered() {
        let jobs = vec![
            job("continuous", "*", "*"),
            job("nightly", "2", "0"),
            job("stepped", "0-23/12", "0"),
            job("noon", "12", "30"),
        ];

        let (recurring, scheduled) = partition(&jobs);
        assert_eq!(recurring.len() + scheduled.len(), jobs.len());

        let recurring_names: Vec<&str> = recurring.iter().map(|j| j.name.as_str()).collect();
        let scheduled_names: Vec<&str> = scheduled.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(recurring_names, vec!["continuous", "stepped"]);
        assert_eq!(scheduled_names, vec!["nightly", "noon"]);
    }

    #[test]
    fn test_partition_empty_collection() {
        let (recurring, scheduled) = partition(&[]);
        assert!(recurring.is_empty());
        assert!(scheduled.is_empty());
    }
}
