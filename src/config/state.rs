// Application state module
// Holds the immutable configuration and the resolved frontend bundle location

use std::path::{Path, PathBuf};

use super::types::Config;

/// Location of the frontend build output, relative to the server binary
pub const FRONTEND_DIST: &str = "../frontend/dist";

/// Application state shared by every request handler.
///
/// Read-only after construction; no handler mutates it, so it is handed
/// around as a plain `Arc` with no locking.
pub struct AppState {
    pub config: Config,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create `AppState` with the default frontend bundle location
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_static_dir(config, default_static_root())
    }

    /// Create `AppState` serving the bundle from an explicit directory.
    ///
    /// This is the seam test harnesses use to point the handlers at a
    /// fixture directory.
    #[must_use]
    pub fn with_static_dir(config: &Config, static_dir: PathBuf) -> Self {
        Self {
            config: config.clone(),
            static_dir,
        }
    }

    /// Whether the bundle routes are active for this state
    #[must_use]
    pub fn serves_frontend(&self) -> bool {
        self.config.is_production()
    }
}

/// Resolve the frontend bundle directory relative to the running executable.
///
/// Falls back to a working-directory-relative path when the executable
/// location cannot be determined.
fn default_static_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map_or_else(|| PathBuf::from(FRONTEND_DIST), |dir| dir.join(FRONTEND_DIST))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_gating_follows_mode_flag() {
        let production = Config {
            node_env: Some("production".to_string()),
            ..Config::default()
        };
        assert!(AppState::new(&production).serves_frontend());

        let development = Config {
            node_env: Some("development".to_string()),
            ..Config::default()
        };
        assert!(!AppState::new(&development).serves_frontend());

        assert!(!AppState::new(&Config::default()).serves_frontend());
    }

    #[test]
    fn default_root_points_at_the_bundle() {
        let state = AppState::new(&Config::default());
        assert!(state.static_dir.ends_with("frontend/dist"));
    }

    #[test]
    fn explicit_static_dir_is_kept() {
        let dir = PathBuf::from("/tmp/bundle");
        let state = AppState::with_static_dir(&Config::default(), dir.clone());
        assert_eq!(state.static_dir, dir);
    }
}
