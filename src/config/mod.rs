//! Configuration management for mocktest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Board, TestForm};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TUI configuration.
    pub tui: TuiConfig,

    /// Defaults for the test-creation form.
    pub creator: CreatorConfig,
}

/// TUI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Show the instructions panel on the dashboard.
    pub instructions: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { instructions: true }
    }
}

/// Defaults applied whenever the creator form opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorConfig {
    /// Board preselected in the form (e.g. "CBSE").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,

    /// Initial value of the "show answers" toggle.
    pub include_answers: bool,
}

impl CreatorConfig {
    /// Preselected board, if configured and recognized.
    #[must_use]
    pub fn default_board(&self) -> Option<Board> {
        let name = self.board.as_deref()?;
        match name.parse() {
            Ok(board) => Some(board),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring configured board");
                None
            }
        }
    }

    /// A fresh form seeded with these defaults.
    #[must_use]
    pub fn new_form(&self) -> TestForm {
        TestForm::new(self.default_board(), self.include_answers)
    }
}

/// Project-local overrides. Only keys present in the file are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverlay {
    tui: TuiOverlay,
    creator: CreatorOverlay,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TuiOverlay {
    instructions: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreatorOverlay {
    board: Option<String>,
    include_answers: Option<bool>,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Loads global config first, then merges project-local config if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from_path(&Self::config_path()?)?;

        if let Ok(project_path) = Self::project_config_path() {
            if project_path.exists() {
                config.merge(read_toml(&project_path)?);
            }
        }

        Ok(config)
    }

    /// Load a single config file, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        read_toml(path)
    }

    /// Get the project-local configuration file path.
    ///
    /// Looks for `.mocktest/config.toml` in the current directory.
    pub fn project_config_path() -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(cwd.join(".mocktest").join("config.toml"))
    }

    /// Apply project overrides. Only keys set in the project file change.
    fn merge(&mut self, overlay: ConfigOverlay) {
        if let Some(instructions) = overlay.tui.instructions {
            self.tui.instructions = instructions;
        }
        if overlay.creator.board.is_some() {
            self.creator.board = overlay.creator.board;
        }
        if let Some(include_answers) = overlay.creator.include_answers {
            self.creator.include_answers = include_answers;
        }
    }

    /// Get the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (`~/.config/mocktest/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config_home).join("mocktest"));
        }

        if cfg!(target_os = "macos") {
            if let Ok(home) = std::env::var("HOME") {
                return Ok(PathBuf::from(home).join(".config").join("mocktest"));
            }
        }

        let base = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

        Ok(base.config_dir().join("mocktest"))
    }

    /// Get the data directory path (`~/.local/share/mocktest/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined.
    pub fn data_dir() -> anyhow::Result<PathBuf> {
        let base = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("could not determine data directory"))?;

        Ok(base.data_dir().join("mocktest"))
    }

    /// Log file used while the TUI owns the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined.
    pub fn log_path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("mocktest.log"))
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))
}
