use env_logger::Env;
use robot_telemetry::constants::{defaults, envvars};

/// Initialise env_logger, filtered by LOG_LEVEL (default "info").
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
}
