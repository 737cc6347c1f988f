// Configuration types module
// Defines the environment-backed configuration record

use serde::{Deserialize, Serialize};

/// Port used when the environment does not provide `PORT`
pub const DEFAULT_PORT: u16 = 3000;

/// Value of the mode flag that enables production behavior
pub const PRODUCTION_ENV: &str = "production";

/// Immutable configuration record built from the process environment.
///
/// Exactly three variables are surfaced: `PORT`, `DB_URL` and `NODE_ENV`.
/// Values pass through verbatim and unset variables stay `None`; nothing is
/// validated or defaulted at load time.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// TCP port to bind in production mode
    pub port: Option<String>,
    /// Reserved for the persistence integration; no handler reads it yet
    pub db_url: Option<String>,
    /// Mode flag selecting production vs. non-production behavior
    pub node_env: Option<String>,
}
