use std::time::{Duration, Instant};

use crate::config::ViewerConfig;
use crate::data::catalog::{RunResults, TablePreview, load_datasets, load_results};
use crate::sim::driver::{DriverStatus, RunDriver};
use crate::sim::roster::MODELS;
use crate::sim::schedule::{
    StepAction, banner_text, build_schedule, loading_text, success_text, total_duration,
};

// ---------------------------------------------------------------------------
// Run view-model
// ---------------------------------------------------------------------------

/// The single live message slot under the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveMessage {
    Info(String),
    Success(String),
}

/// Everything the simulated run shows, threaded explicitly through the
/// driver and the render functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    /// The whole roster has been walked; results may be shown.
    pub has_run: bool,
    /// A run is in progress.
    pub running: bool,
    /// Success messages of the current run.
    pub current_log: Vec<String>,
    /// `0.0..=1.0`.
    pub progress: f32,
    /// "Running <model>" status line.
    pub banner: Option<String>,
    pub live: Option<LiveMessage>,
}

impl ViewModel {
    /// Forget any previous run.
    pub fn begin_run(&mut self) {
        *self = ViewModel {
            running: true,
            ..Default::default()
        };
    }

    pub fn apply(&mut self, action: &StepAction) {
        match action {
            StepAction::Banner {
                model,
                position,
                total,
            } => {
                self.banner = Some(banner_text(model, *position, *total));
            }
            StepAction::Loading { model, glyphs } => {
                self.live = Some(LiveMessage::Info(loading_text(model, glyphs)));
            }
            StepAction::Settle => {}
            StepAction::Complete {
                model,
                position,
                total,
            } => {
                self.current_log.push(success_text(model));
                self.live = Some(LiveMessage::Success(self.current_log.join("\n")));
                self.progress = *position as f32 / *total as f32;
            }
            StepAction::Finish => {
                self.banner = None;
                self.live = None;
                self.current_log.clear();
                self.running = false;
                self.has_run = true;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Input dataset previews, in display order.
    pub datasets: Vec<TablePreview>,

    /// Result artifacts, loaded once a run has finished.
    pub results: Option<RunResults>,

    /// Bumped every time `results` is replaced, so the UI knows to
    /// re-upload textures.
    pub results_generation: u64,

    pub view: ViewModel,

    driver: Option<RunDriver>,

    /// Load failure; when set nothing else is rendered.
    pub error: Option<String>,
}

impl AppState {
    /// Build the state and read the input datasets.
    pub fn new(config: ViewerConfig) -> Self {
        let mut state = Self {
            config,
            datasets: Vec::new(),
            results: None,
            results_generation: 0,
            view: ViewModel::default(),
            driver: None,
            error: None,
        };
        state.reload();
        state
    }

    /// Re-read the datasets from disk and drop any run or results.
    pub fn reload(&mut self) {
        self.view = ViewModel::default();
        self.driver = None;
        self.results = None;
        self.error = None;
        match load_datasets(&self.config) {
            Ok(datasets) => self.datasets = datasets,
            Err(e) => {
                self.datasets.clear();
                self.fail(e);
            }
        }
    }

    /// Start (or restart) the simulated run. The datasets are re-read
    /// first; if that fails the error page replaces the run.
    pub fn start_run(&mut self, now: Instant) {
        self.error = None;
        self.results = None;
        self.view = ViewModel::default();
        self.driver = None;
        match load_datasets(&self.config) {
            Ok(datasets) => self.datasets = datasets,
            Err(e) => {
                self.datasets.clear();
                self.fail(e);
                return;
            }
        }

        let steps = build_schedule(&MODELS);
        log::info!(
            "Starting simulated run of {} models ({:.1?})",
            MODELS.len(),
            total_duration(&steps)
        );
        self.view.begin_run();
        self.driver = Some(RunDriver::start(steps, now));
    }

    /// Advance the run. Returns how long until the next step is due, or
    /// `None` when no run is in progress.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let driver = self.driver.as_mut()?;
        match driver.poll(now, &mut self.view) {
            DriverStatus::Pending(wait) => Some(wait),
            DriverStatus::Finished => {
                self.driver = None;
                self.reveal();
                None
            }
        }
    }

    pub fn results_visible(&self) -> bool {
        self.error.is_none() && self.view.has_run && self.results.is_some()
    }

    fn reveal(&mut self) {
        match load_results(&self.config) {
            Ok(results) => {
                log::info!("All models executed; revealing results");
                self.results = Some(results);
                self.results_generation += 1;
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(format!("{err:#}"));
    }
}
