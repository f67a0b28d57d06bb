use std::{fs, path::PathBuf};

use color_eyre::eyre::Result;

use crate::utils::get_data_dir;

/// How many scores survive a rewrite.
pub const MAX_ENTRIES: usize = 5;

/// Persists the high-score list as a plain-text file, one score per line,
/// highest first. Every write is a full read-modify-write of the whole list,
/// which is fine at five entries.
#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new() -> Self {
        ScoreStore { path: get_data_dir().join("scores.txt") }
    }

    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        ScoreStore { path: path.into() }
    }

    /// A missing or unreadable file is an empty list, not an error; lines
    /// that do not parse are skipped.
    pub fn load(&self) -> Vec<u32> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        contents.lines().filter_map(|line| line.trim().parse().ok()).collect()
    }

    /// Inserts `score`, keeps the top entries in descending order, rewrites
    /// the file and returns the resulting list.
    pub fn record(&self, score: u32) -> Result<Vec<u32>> {
        let mut scores = self.load();
        scores.push(score);
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_ENTRIES);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut contents = scores.iter().map(u32::to_string).collect::<Vec<_>>().join("\n");
        contents.push('\n');
        fs::write(&self.path, contents)?;

        Ok(scores)
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        ScoreStore::new()
    }
}
