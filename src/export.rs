//! Writing game summaries to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use thiserror::Error;
use tracing::info;

use crate::moderator::GameSummary;
use crate::rules::Winner;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize game summary")]
    Json(#[from] serde_json::Error),
}

/// File name for a finished game,
/// e.g. `game_20240102-030405_n1_r3_Villagers_8p.json`.
///
/// `run` keeps games finished within the same second apart.
#[must_use]
pub fn summary_file_name<Tz: TimeZone>(
    at: &DateTime<Tz>,
    run: usize,
    rounds: u32,
    winner: Option<Winner>,
    players: usize,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let winner = winner.map_or("None", Winner::as_str);
    format!(
        "game_{}_n{}_r{}_{}_{}p.json",
        at.format("%Y%m%d-%H%M%S"),
        run,
        rounds,
        winner,
        players
    )
}

/// Write `summary` as pretty JSON to `dir/file_name`, creating `dir` if
/// needed. Returns the written path.
pub fn save_summary(
    dir: &Path,
    file_name: &str,
    summary: &GameSummary,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&path, json).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "saved game log");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_summary_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(
            summary_file_name(&at, 1, 3, Some(Winner::Villagers), 8),
            "game_20240102-030405_n1_r3_Villagers_8p.json"
        );
        assert_eq!(
            summary_file_name(&at, 2, 1, None, 4),
            "game_20240102-030405_n2_r1_None_4p.json"
        );
    }
}
