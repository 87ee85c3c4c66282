pub mod budget;
pub mod config;
pub mod session;
pub mod trend;

use energy_budget_core::{Config, Session};
use tracing::debug;

/// Start a session from the user's configuration.
///
/// A missing config file means defaults; neither the file nor its directory
/// is created here.
pub fn configured_session() -> Result<Session, Box<dyn std::error::Error>> {
    let path = Config::location();
    debug!(path = %path.display(), "reading configuration");
    let config = Config::load_from(&path)?;
    Ok(Session::from_config(&config)?)
}
