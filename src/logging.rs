//! Logging setup.
//!
//! Logs go through the [`log`] facade and are written to stderr by
//! [`env_logger`]. By default only this crate's records are shown, at
//! [`Info`](log::Level::Info) in debug builds and [`Warn`](log::Level::Warn)
//! in release builds. Setting `RUST_LOG` replaces the default filter:
//!
//! ```sh
//! $> RUST_LOG=spintop=debug cargo run
//! ```

/// Default filter directive for the current build profile.
pub fn default_filter() -> String {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    format!("{}={}", env!("CARGO_CRATE_NAME"), level.as_str().to_lowercase())
}

/// Install the global logger. Call once, before anything logs.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_crate() {
        let filter = default_filter();
        if cfg!(debug_assertions) {
            assert_eq!(filter, "spintop=info");
        } else {
            assert_eq!(filter, "spintop=warn");
        }
    }
}
