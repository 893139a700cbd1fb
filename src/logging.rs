//! Logging setup for the `gravsim` binary.
//!
//! Uses the [`log`] facade with [`env_logger`]. The default level is
//! [`Info`](log::Level::Info) for debug builds and [`Warn`](log::Level::Warn)
//! for release builds, overridable through `RUST_LOG`:
//!
//! ```sh
//! $> RUST_LOG=gravsim=debug cargo run -- -f inner_solar_system.yaml
//! ```

/// Initialize the global logger. Call once, from `main`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    init_with_level(&["gravsim"], level);
}

pub fn init_with_level(crates: &[&'static str], log_level: log::LevelFilter) {
    let level_str = log_level.as_str().to_lowercase();
    let filter_string = crates
        .iter()
        .map(|pkg_name| format!("{}={}", pkg_name, level_str))
        .collect::<Vec<_>>()
        .join(",");

    if std::env::var("RUST_LOG").is_err() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter_string))
            .init();
    } else {
        env_logger::init();
    }
}
