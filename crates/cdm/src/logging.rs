//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CDM_LOG=debug`
pub const LOG_ENV: &str = "CDM_LOG";

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// document output. Calling this twice is harmless.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
