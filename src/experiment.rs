//! Repeated games on one roster, for gathering statistics.
//!
//! Each run gets a fresh [`Moderator`]. The runner resets the roster after
//! every run, since moderators never do.

use std::path::PathBuf;

use tracing::{error, info};

use crate::core::{GameError, Roster};
use crate::export;
use crate::moderator::Moderator;
use crate::rules::Winner;

/// Configuration for a batch of games.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Number of games to play.
    pub runs: usize,

    /// Write each game's summary to `output_dir`.
    pub save_logs: bool,

    /// Where summaries go.
    pub output_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            save_logs: true,
            output_dir: PathBuf::from("experiments_data"),
        }
    }
}

impl ExperimentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_save_logs(mut self, save: bool) -> Self {
        self.save_logs = save;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Result of one game in a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// 1-based run number.
    pub run: usize,
    pub rounds: u32,
    pub winner: Winner,
    /// Where the summary was written, if saving was enabled and succeeded.
    pub path: Option<PathBuf>,
}

/// Plays a batch of games.
#[derive(Clone, Debug, Default)]
pub struct ExperimentRunner {
    config: ExperimentConfig,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Play every run on `roster`, leaving it reset afterwards.
    ///
    /// A game error stops the batch. Export failures are logged and the batch
    /// carries on.
    pub fn run(&self, roster: &mut Roster) -> Result<Vec<RunOutcome>, GameError> {
        let mut outcomes = Vec::with_capacity(self.config.runs);

        for run in 1..=self.config.runs {
            info!(run, of = self.config.runs, "experiment run");
            let result = self.play_one(roster, run);
            roster.reset();
            outcomes.push(result?);
        }

        Ok(outcomes)
    }

    fn play_one(&self, roster: &mut Roster, run: usize) -> Result<RunOutcome, GameError> {
        let players = roster.len();
        let mut moderator = Moderator::new(roster);
        let winner = moderator.run()?;
        let rounds = moderator.round_number();

        let path = if self.config.save_logs {
            let file_name = export::summary_file_name(&chrono::Local::now(), run, rounds, Some(winner), players);
            let summary = moderator.summary(file_name.clone());
            match export::save_summary(&self.config.output_dir, &file_name, &summary) {
                Ok(path) => Some(path),
                Err(e) => {
                    error!(error = %e, "could not save log file");
                    None
                }
            }
        } else {
            None
        };

        Ok(RunOutcome {
            run,
            rounds,
            winner,
            path,
        })
    }
}
