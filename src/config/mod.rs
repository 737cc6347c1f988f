// Configuration module entry point
// Builds the immutable configuration record from the process environment

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, DEFAULT_PORT, PRODUCTION_ENV};

impl Config {
    /// Read `PORT`, `DB_URL` and `NODE_ENV` from the process environment.
    ///
    /// Built once at process start; the record is immutable afterwards and
    /// handed by reference to every component that needs it. The environment
    /// source lowercases variable names, so the three variables map straight
    /// onto the record's fields and everything else is ignored.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        settings.try_deserialize()
    }

    /// Whether the mode flag selects production behavior
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.node_env.as_deref() == Some(PRODUCTION_ENV)
    }

    /// Resolve the listen address from `PORT`, falling back to the default
    /// port when the variable is absent.
    ///
    /// An unparsable `PORT` is a startup error; the process refuses to bind
    /// rather than listening on a surprise port.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let port = match self.port.as_deref() {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT '{raw}': {e}"))?,
            None => DEFAULT_PORT,
        };

        Ok(SocketAddr::from(([0, 0, 0, 0], port)))
    }
}
