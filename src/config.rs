use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Board file resolution
///
/// Precedence: an explicit `--board` path, then `board.location=` in the rc
/// file, then the default under the home directory.
pub struct BoardLocation;

impl BoardLocation {
    /// Default board path: `~/.stagedash/board.json`
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(".stagedash").join("board.json"))
    }

    /// Configuration file path: `~/.stagedash/rc`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(".stagedash").join("rc"))
    }

    /// Resolve the board file path, honoring a CLI override first
    pub fn resolve(cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }

        let config_path = Self::config_path()?;
        if config_path.exists() {
            if let Ok(config) = std::fs::read_to_string(&config_path) {
                for line in config.lines() {
                    let line = line.trim();
                    if let Some(path_str) = line.strip_prefix("board.location=") {
                        let path = PathBuf::from(path_str.trim());

                        // Relative paths resolve against the rc file directory
                        if path.is_relative() {
                            if let Some(parent) = config_path.parent() {
                                return Ok(parent.join(path));
                            }
                        }
                        return Ok(path);
                    }
                }
            }
        }

        Self::default_path()
    }

    fn home_dir() -> Result<PathBuf> {
        dirs::home_dir().context("Could not determine home directory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_shape() {
        let path = BoardLocation::default_path().unwrap();
        assert!(path.to_string_lossy().contains(".stagedash"));
        assert!(path.to_string_lossy().ends_with("board.json"));
    }

    #[test]
    fn test_cli_override_wins() {
        let resolved = BoardLocation::resolve(Some(Path::new("/tmp/custom.json"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_rc_line_parsing() {
        // The rc format is a flat key=value list; exercise the line shape the
        // resolver looks for without mutating HOME here (integration tests
        // cover the full resolution under a temp HOME).
        let line = "board.location=./launch.json";
        let path = line.strip_prefix("board.location=").map(PathBuf::from).unwrap();
        assert!(path.is_relative());
    }
}
