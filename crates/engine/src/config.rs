//! Session configuration from the environment.

use std::path::PathBuf;

/// Runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed the demo roll sequence on start-up and after each new game.
    pub demo: bool,
    /// Where the interactive runner writes its log (it owns the terminal).
    pub log_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `BOWLING_DEMO`: `1` or `true` to seed the demo game
    /// - `BOWLING_LOG_PATH`: log file for the interactive runner
    pub fn from_env() -> Self {
        use std::env;

        let demo = env::var("BOWLING_DEMO")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let log_path = env::var("BOWLING_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self { demo, log_path }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
