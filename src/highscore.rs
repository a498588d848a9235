//! High-score persistence
//!
//! A single integer in a plain-text file. Loading tolerates a missing or
//! corrupt file by falling back to zero - losing a high score must never
//! stop the game from starting. Writes are best-effort and reattempted on
//! every future save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "dino-dash-highscore.txt";

/// Default location: the platform data directory, falling back to the
/// working directory when none exists.
pub fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(FILE_NAME)
}

/// Load the persisted high score. Missing or unparseable files default to 0.
pub fn load(path: &Path) -> u64 {
    match fs::read_to_string(path) {
        Ok(contents) => match contents.trim().parse::<u64>() {
            Ok(score) => {
                log::info!("loaded high score {} from {}", score, path.display());
                score
            }
            Err(_) => {
                log::warn!("corrupt high-score file {}, using 0", path.display());
                0
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("no high-score file at {}, starting at 0", path.display());
            0
        }
        Err(e) => {
            log::warn!("failed to read {}: {}, using 0", path.display(), e);
            0
        }
    }
}

/// Persist the high score. Errors are returned for logging but are safe to
/// ignore; the next save reattempts.
pub fn save(path: &Path, score: u64) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format!("{score}\n"))?;
    log::info!("saved high score {} to {}", score, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        assert_eq!(load(&path), 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores").join(FILE_NAME);
        save(&path, 137).unwrap();
        assert_eq!(load(&path), 137);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "not a number").unwrap();
        assert_eq!(load(&path), 0);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "  2048 \n").unwrap();
        assert_eq!(load(&path), 2048);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        save(&path, 100).unwrap();
        save(&path, 137).unwrap();
        assert_eq!(load(&path), 137);
    }
}
