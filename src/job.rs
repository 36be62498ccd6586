use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// One scheduled job as reported by an atom's schedule endpoint.
///
/// The schedule fields (`hours`, `minutes`, the day/month fields and the raw
/// `cron` text) arrive as free-form cron-style text in UTC. Only `hours` and
/// `minutes` are ever expanded; the rest are carried for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Older atoms send the text "true"/"false", newer ones a JSON bool.
    #[serde(default, deserialize_with = "enabled_from_loose")]
    pub enabled: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub minutes: Option<String>,
    #[serde(rename = "daysOfWeek", default)]
    pub days_of_week: Option<String>,
    #[serde(rename = "daysOfMonth", default)]
    pub days_of_month: Option<String>,
    #[serde(default)]
    pub months: Option<String>,
    #[serde(default)]
    pub years: Option<String>,
    #[serde(default)]
    pub cron: Option<String>,
}

impl Job {
    /// Hour field with the upstream default applied: absent or blank means
    /// every hour.
    pub fn hours_or_default(&self) -> &str {
        match self.hours.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "*",
        }
    }

    /// Minute field with the upstream default applied: absent or blank means
    /// the top of the hour.
    pub fn minutes_or_default(&self) -> &str {
        match self.minutes.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "0",
        }
    }

    /// Upcoming fire times of the raw cron expression, for the detail pane.
    /// The raw text is display-oriented; expressions the cron crate cannot
    /// parse yield an empty list.
    pub fn upcoming_fires(&self, count: usize) -> Vec<DateTime<Utc>> {
        let Some(cron_text) = self.cron.as_deref() else {
            return Vec::new();
        };
        match cron::Schedule::from_str(cron_text) {
            Ok(schedule) => schedule.upcoming(Utc).take(count).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Accept either a JSON bool or the text `"true"`/`"false"`; anything that is
/// not recognizably true is disabled.
fn enabled_from_loose<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Flag(bool),
        Text(String),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Flag(flag) => flag,
        Loose::Text(text) => text.trim().eq_ignore_ascii_case("true"),
    })
}
