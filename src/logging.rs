//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with rendered frames on stdout.
//! `EYEFRAME_LOG` takes `EnvFilter` directives (`debug`,
//! `eyeframe::playback=trace`, ...); without it only warnings are shown,
//! or debug output when `--verbose` is given.

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "EYEFRAME_LOG";

/// Filter used when `EYEFRAME_LOG` is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "eyeframe=debug"
    } else {
        "warn"
    }
}

/// Build the filter from the environment, falling back to the default.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
