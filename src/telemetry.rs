//! Tracing setup for binaries and demos embedding the engine.
//!
//! - `LOG_LEVEL` sets the filter (e.g. `"debug"` or
//!   `"info,math_drill_gen::curriculum_engine::generator=debug"`).
//! - `LOG_FORMAT=json` switches to structured JSON lines; anything else gives
//!   the human-readable format.
//!
//! The library itself only emits events; calling [`init_tracing`] is up to
//! the host.

use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn,math_drill_gen=info";

/// Install a global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed, which is common
/// in tests that call this more than once.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => builder.json().try_init().is_ok(),
        _ => builder.try_init().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init_tracing();
        assert!(!init_tracing());
    }
}
