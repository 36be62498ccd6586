use crate::job::Job;
use crate::schedule::classify::{self, Category};
use crate::schedule::describe;
use crate::schedule::expand;
use crate::schedule::timezone::{self, CivilTime};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregate counts over one job snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub enabled: usize,
    pub disabled: usize,
    pub recurring: usize,
    pub scheduled: usize,
}

impl Statistics {
    pub fn collect(jobs: &[Job]) -> Self {
        let enabled = jobs.iter().filter(|job| job.enabled).count();
        let (recurring, scheduled) = classify::partition(jobs);
        Self {
            total: jobs.len(),
            enabled,
            disabled: jobs.len() - enabled,
            recurring: recurring.len(),
            scheduled: scheduled.len(),
        }
    }
}

/// Scheduled jobs that fire at the same Mountain-time wall-clock minute.
#[derive(Debug, Clone)]
pub struct TimelineSlot {
    pub time: CivilTime,
    pub jobs: Vec<Job>,
}

/// Recurring jobs sharing one pattern description.
#[derive(Debug, Clone)]
pub struct PatternGroup {
    pub description: String,
    pub score: f64,
    pub jobs: Vec<Job>,
}

/// Everything the dashboard renders for one snapshot: per-job category
/// assignments in input order, a chronological timeline of scheduled jobs,
/// recurring jobs grouped by pattern, and the aggregate counts.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub assignments: Vec<(Category, Job)>,
    pub timeline: Vec<TimelineSlot>,
    pub recurring: Vec<PatternGroup>,
    pub stats: Statistics,
}

impl Report {
    pub fn build(jobs: &[Job]) -> Self {
        let assignments: Vec<(Category, Job)> = jobs
            .iter()
            .map(|job| (classify::classify(job), job.clone()))
            .collect();

        // Scheduled jobs land on a Mountain-time timeline; the BTreeMap key
        // keeps the slots chronological.
        let mut slots: BTreeMap<CivilTime, Vec<Job>> = BTreeMap::new();
        for (category, job) in &assignments {
            if *category != Category::Scheduled {
                continue;
            }
            for occurrence in expand::expand(job.hours_or_default(), job.minutes_or_default())
            {
                slots
                    .entry(timezone::to_mountain(occurrence))
                    .or_default()
                    .push(job.clone());
            }
        }
        let timeline: Vec<TimelineSlot> = slots
            .into_iter()
            .map(|(time, jobs)| TimelineSlot { time, jobs })
            .collect();

        // Recurring jobs group by their described pattern; groups keep first-
        // seen order, then sort by score so tighter intervals surface first.
        let mut recurring: Vec<PatternGroup> = Vec::new();
        for (category, job) in &assignments {
            if *category != Category::Recurring {
                continue;
            }
            let description =
                describe::describe_pattern(job.hours_or_default(), job.minutes_or_default());
            match recurring
                .iter_mut()
                .find(|group| group.description == description)
            {
                Some(group) => group.jobs.push(job.clone()),
                None => recurring.push(PatternGroup {
                    score: describe::frequency_score(&description),
                    description,
                    jobs: vec![job.clone()],
                }),
            }
        }
        recurring.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let stats = Statistics::collect(jobs);
        debug!(
            "report built: {} jobs, {} recurring groups, {} timeline slots",
            stats.total,
            recurring.len(),
            timeline.len()
        );

        Self {
            assignments,
            timeline,
            recurring,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, enabled: &str, hours: &str, minutes: &str) -> Job {
        serde_json::from_str(&format!(
            r#"{{"Name": "{}", "enabled": {}, "hours": "{}", "minutes": "{}"}}"#,
            name, enabled, hours, minutes
        ))
        .unwrap()
    }

    #[test]
    fn test_statistics_mixed_enabled_representations() {
        let mut jobs = Vec::new();
        for i in 0..4 {
            jobs.push(job(&format!("bool-on-{}", i), "true", "2", "0"));
        }
        for i in 0..3 {
            jobs.push(job(&format!("text-on-{}", i), r#""true""#, "*", "*"));
        }
        jobs.push(job("bool-off", "false", "3", "0"));
        jobs.push(job("text-off", r#""false""#, "4", "0"));
        jobs.push(job("text-off-caps", r#""FALSE""#, "5", "0"));

        let stats = Statistics::collect(&jobs);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.enabled, 7);
        assert_eq!(stats.disabled, 3);
        assert_eq!(stats.recurring + stats.scheduled, 10);
        assert_eq!(stats.recurring, 3);
    }

    #[test]
    fn test_statistics_empty_collection() {
        let stats = Statistics::collect(&[]);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_report_assignments_keep_input_order() {
        let jobs = vec![
            job("first", "true", "*", "*"),
            job("second", "true", "2", "0"),
            job("third", "false", "0-23/6", "0"),
        ];
        let report = Report::build(&jobs);

        let names: Vec<&str> = report
            .assignments
            .iter()
            .map(|(_, job)| job.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(report.assignments[0].0, Category::Recurring);
        assert_eq!(report.assignments[1].0, Category::Scheduled);
        assert_eq!(report.assignments[2].0, Category::Recurring);
    }

    #[test]
    fn test_timeline_is_chronological_mountain_time() {
        // 9 UTC -> 2:00 AM, 15 UTC -> 8:00 AM under the fixed UTC-7 rule.
        let jobs = vec![
            job("afternoon", "true", "15", "0"),
            job("morning", "true", "9", "0"),
        ];
        let report = Report::build(&jobs);

        assert_eq!(report.timeline.len(), 2);
        assert_eq!(report.timeline[0].time, CivilTime { hour: 2, minute: 0 });
        assert_eq!(report.timeline[0].jobs[0].name, "morning");
        assert_eq!(report.timeline[1].time, CivilTime { hour: 8, minute: 0 });
        assert_eq!(report.timeline[1].jobs[0].name, "afternoon");
    }

    #[test]
    fn test_timeline_groups_same_slot() {
        let jobs = vec![
            job("one", "true", "9", "30"),
            job("two", "true", "9", "30"),
        ];
        let report = Report::build(&jobs);
        assert_eq!(report.timeline.len(), 1);
        assert_eq!(report.timeline[0].jobs.len(), 2);
    }

    #[test]
    fn test_recurring_groups_ranked_by_score() {
        let jobs = vec![
            job("hourly", "true", "*", "0-59/60"),
            job("tight", "true", "*", "*"),
            job("five", "true", "*", "0-59/5"),
        ];
        let report = Report::build(&jobs);

        let descriptions: Vec<&str> = report
            .recurring
            .iter()
            .map(|group| group.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Once a minute",
                "Once every five minutes",
                "Once an hour all day",
            ]
        );
    }

    #[test]
    fn test_recurring_groups_merge_identical_descriptions() {
        let jobs = vec![
            job("poll-a", "true", "*", "0-59/5"),
            job("poll-b", "true", "*", "0-59/5"),
        ];
        let report = Report::build(&jobs);
        assert_eq!(report.recurring.len(), 1);
        assert_eq!(report.recurring[0].jobs.len(), 2);
    }

    #[test]
    fn test_malformed_job_still_counted_and_on_timeline() {
        let jobs = vec![job("broken", "true", "abc", "xyz")];
        let report = Report::build(&jobs);

        assert_eq!(report.stats.total, 1);
        assert_eq!(report.stats.scheduled, 1);
        // The fallback occurrence is midnight UTC, 5:00 PM Mountain.
        assert_eq!(report.timeline.len(), 1);
        assert_eq!(report.timeline[0].time, CivilTime { hour: 17, minute: 0 });
    }

    #[test]
    fn test_empty_snapshot() {
        let report = Report::build(&[]);
        assert!(report.assignments.is_empty());
        assert!(report.timeline.is_empty());
        assert!(report.recurring.is_empty());
        assert_eq!(report.stats, Statistics::default());
    }
}
