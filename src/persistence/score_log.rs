//! Append-only score log

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreLogError {
    #[error("score log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where finished scores go
pub trait ScoreStore {
    /// Every score recorded so far, oldest first
    fn load_all(&self) -> Result<Vec<u64>, ScoreLogError>;

    /// Record one more score
    fn append(&mut self, value: u64) -> Result<(), ScoreLogError>;
}

/// Newline-delimited score file, opened in append mode for writes
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> ScoreLogError {
        ScoreLogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for ScoreLog {
    fn load_all(&self) -> Result<Vec<u64>, ScoreLogError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut scores = Vec::new();
        for (index, token) in text.split_whitespace().enumerate() {
            match token.parse::<u64>() {
                Ok(value) => scores.push(value),
                Err(_) => log::warn!(
                    "Skipping unreadable entry #{} ({:?}) in {}",
                    index + 1,
                    token,
                    self.path.display()
                ),
            }
        }
        Ok(scores)
    }

    fn append(&mut self, value: u64) -> Result<(), ScoreLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{value}").map_err(|e| self.io_error(e))
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryScores {
    pub entries: Vec<u64>,
}

impl MemoryScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScores {
    fn load_all(&self) -> Result<Vec<u64>, ScoreLogError> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, value: u64) -> Result<(), ScoreLogError> {
        self.entries.push(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = ScoreLog::new(dir.path().join("Scores.dat"));
        assert!(log.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = ScoreLog::new(dir.path().join("Scores.dat"));
        log.append(1200).unwrap();
        log.append(300).unwrap();

        assert_eq!(log.load_all().unwrap(), vec![1200, 300]);
        let text = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(text, "1200\n300\n");
    }

    #[test]
    fn test_garbage_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Scores.dat");
        std::fs::write(&path, "500\nabc\n-3\n900\n").unwrap();

        let log = ScoreLog::new(&path);
        assert_eq!(log.load_all().unwrap(), vec![500, 900]);
    }

    #[test]
    fn test_directory_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = ScoreLog::new(dir.path());
        assert!(log.load_all().is_err());
    }
}
