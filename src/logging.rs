//! Tracing subscriber setup for the `web` binary.
//!
//! Filter priority, highest first: `DISK_SCHEDULER_LOG`, `RUST_LOG`, then the
//! level implied by `--verbose` / `--quiet`.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Project-specific filter variable
pub const LOG_ENV: &str = "DISK_SCHEDULER_LOG";

/// Verbosity level derived from CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: errors only
    Quiet,
    /// Default: info for this crate
    Normal,
    /// `--verbose`: debug, including per-policy dispatch
    Verbose,
}

impl Verbosity {
    /// Determine verbosity from the parsed CLI flags. Verbose wins if both are set.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Level applied to this crate's targets
    pub const fn crate_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber. Call once, before loading config.
///
/// Fails if a global subscriber is already set.
pub fn init_subscriber(
    verbosity: Verbosity,
    no_color: bool,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let stderr_is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && stderr_is_tty)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(fmt_layer)
        .try_init()
}

/// Build the filter, falling through unparseable env values.
pub fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = verbosity.crate_level();
    let other = if verbosity == Verbosity::Quiet { "error" } else { "warn" };
    EnvFilter::new(format!(
        "{other},disk_scheduler={level},web={level}",
        level = level.as_str().to_lowercase()
    ))
}
