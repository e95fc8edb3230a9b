use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found — set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the agent home directory layout.
///
/// Single source of truth for every path under `~/.claude/` that the
/// bootstrap routine and hooks touch. Use `resolve()` in production code
/// and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct CogentPaths {
    agent_home: PathBuf,
}

impl CogentPaths {
    /// Resolve paths from the user's home directory (`~/.claude`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            agent_home: home.join(".claude"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(agent_home: PathBuf) -> Self {
        Self { agent_home }
    }

    /// The base agent home directory.
    pub fn agent_home(&self) -> &Path {
        &self.agent_home
    }

    // --- Top-level subdirectories ---

    pub fn skills_dir(&self) -> PathBuf {
        self.agent_home.join("skills")
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.agent_home.join("commands")
    }

    // --- Top-level files ---

    pub fn settings_file(&self) -> PathBuf {
        self.agent_home.join("settings.json")
    }

    /// Marker written by bootstrap so re-runs can tell they already ran.
    pub fn bootstrap_marker(&self) -> PathBuf {
        self.agent_home.join(".cogent-bootstrap")
    }

    // --- Static helpers (no self) ---

    /// Default settings shipped with the image: `<assets>/settings.json`.
    pub fn assets_settings(assets_dir: &Path) -> PathBuf {
        assets_dir.join("settings.json")
    }

    /// Skill definitions shipped with the image: `<assets>/skills`.
    pub fn assets_skills_dir(assets_dir: &Path) -> PathBuf {
        assets_dir.join("skills")
    }

    /// Command definitions shipped with the image: `<assets>/commands`.
    pub fn assets_commands_dir(assets_dir: &Path) -> PathBuf {
        assets_dir.join("commands")
    }
}
