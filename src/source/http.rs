use crate::job::Job;
use crate::source::JobSource;
use anyhow::{Context, Result};
use tracing::debug;
use uuid::Uuid;

/// An atom with no schedules answers with a blank page rather than an empty
/// JSON array; anything at or under this length is treated as "no jobs".
const MIN_PAYLOAD_LEN: usize = 5;

/// Live scheduled-jobs endpoint for one atom or molecule.
pub struct HttpSource {
    base_url: String,
    atom_id: Uuid,
    label: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, atom_id: Uuid, label: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            atom_id,
            label: label.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.atom_id)
    }
}

impl JobSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Job>> {
        let url = self.url();
        debug!("fetching scheduled jobs from {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach {}", url))?
            .error_for_status()
            .with_context(|| format!("Scheduled-jobs request to {} rejected", url))?
            .text()
            .context("Failed to read scheduled-jobs response body")?;

        if body.trim().len() <= MIN_PAYLOAD_LEN {
            debug!("no schedules on {}", self.label);
            return Ok(Vec::new());
        }

        let jobs: Vec<Job> = serde_json::from_str(&body)
            .context("Scheduled-jobs payload is not a JSON job array")?;
        Ok(jobs)
    }

    fn name(&self) -> String {
        self.label.clone()
    }
}
