use crate::config::Config;
use crate::job::Job;
use crate::report::Report;
use crate::source::file::FileSource;
use crate::source::http::HttpSource;
use crate::source::JobSource;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Which pane of the report is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Jobs,
    Recurring,
    Timeline,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            View::Jobs => View::Recurring,
            View::Recurring => View::Timeline,
            View::Timeline => View::Jobs,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Jobs => "Jobs",
            View::Recurring => "Recurring",
            View::Timeline => "Timeline",
        }
    }
}

pub struct App {
    sources: Vec<Box<dyn JobSource>>,
    pub selected_source: usize,
    pub view: View,
    pub selected_row: usize,
    /// Snapshots already fetched this session, keyed by source label.
    /// Re-selecting an environment renders from here; `refresh` evicts.
    cache: HashMap<String, Vec<Job>>,
    pub report: Option<Report>,
    pub loaded_source: Option<String>,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, snapshot: Option<PathBuf>) -> Self {
        let sources: Vec<Box<dyn JobSource>> = match snapshot {
            Some(path) => vec![Box::new(FileSource::new(path))],
            None if config.is_usable() => config
                .environments
                .iter()
                .map(|env| {
                    Box::new(HttpSource::new(
                        config.base_url.clone(),
                        env.atom_id,
                        env.name.clone(),
                    )) as Box<dyn JobSource>
                })
                .collect(),
            None => Vec::new(),
        };

        let mut app = Self {
            sources,
            selected_source: 0,
            view: View::Jobs,
            selected_row: 0,
            cache: HashMap::new(),
            report: None,
            loaded_source: None,
            message: None,
            should_quit: false,
        };

        if app.sources.is_empty() {
            app.message = Some(
                "No environments configured - add base_url and environments to ~/.atom-jobs.json"
                    .to_string(),
            );
        } else if app.sources.len() == 1 {
            app.load_selected();
        }

        app
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    pub fn select_next_source(&mut self) {
        if !self.sources.is_empty() && self.selected_source < self.sources.len() - 1 {
            self.selected_source += 1;
        }
    }

    pub fn select_prev_source(&mut self) {
        if self.selected_source > 0 {
            self.selected_source -= 1;
        }
    }

    /// Fetch (or re-render from cache) the selected source and rebuild the
    /// report. Fetch failures surface in the status line, never as a crash.
    pub fn load_selected(&mut self) {
        let Some(source) = self.sources.get(self.selected_source) else {
            return;
        };
        let name = source.name();

        let jobs = match self.cache.get(&name) {
            Some(jobs) => {
                debug!("rendering {} from session cache", name);
                jobs.clone()
            }
            None => match source.fetch() {
                Ok(jobs) => {
                    self.cache.insert(name.clone(), jobs.clone());
                    jobs
                }
                Err(err) => {
                    warn!("fetch from {} failed: {:#}", name, err);
                    self.message = Some(format!("Fetch from {} failed: {:#}", name, err));
                    return;
                }
            },
        };

        let report = Report::build(&jobs);
        self.message = Some(format!(
            "{}: {} jobs ({} enabled, {} recurring)",
            name, report.stats.total, report.stats.enabled, report.stats.recurring
        ));
        self.report = Some(report);
        self.loaded_source = Some(name);
        self.selected_row = 0;
    }

    /// Drop the cached snapshot for the selected source and fetch again.
    pub fn refresh(&mut self) {
        if let Some(source) = self.sources.get(self.selected_source) {
            self.cache.remove(&source.name());
        }
        self.load_selected();
    }

    fn visible_rows(&self) -> usize {
        let Some(report) = &self.report else { return 0 };
        match self.view {
            View::Jobs => report.assignments.len(),
            View::Recurring => report.recurring.len(),
            View::Timeline => report.timeline.len(),
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let rows = self.visible_rows();
        if rows > 0 && self.selected_row < rows - 1 {
            self.selected_row += 1;
        }
    }

    pub fn next_view(&mut self) {
        self.view = self.view.next();
        self.selected_row = 0;
    }

    /// The job under the cursor in the Jobs view, for the detail pane.
    pub fn selected_job(&self) -> Option<&Job> {
        if self.view != View::Jobs {
            return None;
        }
        self.report
            .as_ref()
            .and_then(|report| report.assignments.get(self.selected_row))
            .map(|(_, job)| job)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
