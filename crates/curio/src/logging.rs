//! Logger setup for the showcase binary.
//!
//! Library crates only emit `tracing` events. With `tracing`'s `log` feature
//! those events reach the `log` facade, and `env_logger` prints them.
//!
//! The showcase crate and the asset crates get separate levels: a normal run
//! prints one line per showcase build, while per-asset builds and material
//! cache traffic only show up when asked for.

use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Level applied to every target outside the workspace.
const OTHER_LEVEL: LevelFilter = LevelFilter::Warn;

/// Logger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level for the `curio` crate (manifest loading, showcase builds).
    pub level: LevelFilter,
    /// Level for `curio_assets` and `curio_shared`. `debug` shows one line per
    /// composed asset, `trace` adds material cache hits and misses.
    pub asset_level: LevelFilter,
    /// ANSI coloring.
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            asset_level: LevelFilter::Warn,
            write_style: WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Configuration for `count` repeated `-v` flags.
    ///
    /// One flag shows each asset build, two add cache traffic and per-worker
    /// progress.
    #[must_use]
    pub fn verbose(count: u8) -> Self {
        let (level, asset_level) = match count {
            0 => (LevelFilter::Info, LevelFilter::Warn),
            1 => (LevelFilter::Debug, LevelFilter::Debug),
            _ => (LevelFilter::Trace, LevelFilter::Trace),
        };
        Self { level, asset_level, ..Self::default() }
    }

    /// Filter directives in `env_logger` syntax.
    #[must_use]
    pub fn filter(&self) -> String {
        let lower = |l: LevelFilter| l.as_str().to_ascii_lowercase();
        let assets = lower(self.asset_level);
        format!(
            "{},curio={},curio_assets={assets},curio_shared={assets}",
            lower(OTHER_LEVEL),
            lower(self.level)
        )
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. `RUST_LOG`, when set, replaces the configured
/// filter. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);

        // A test harness may own the logger already
        if builder.try_init().is_ok() {
            log::debug!("logging initialized with {filter:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_asset_crates() {
        assert_eq!(
            LoggingConfig::default().filter(),
            "warn,curio=info,curio_assets=warn,curio_shared=warn"
        );
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LoggingConfig::verbose(0), LoggingConfig::default());

        let one = LoggingConfig::verbose(1);
        assert_eq!(one.asset_level, LevelFilter::Debug);
        assert!(one.filter().contains("curio_assets=debug"));

        let many = LoggingConfig::verbose(5);
        assert_eq!(many.level, LevelFilter::Trace);
        assert_eq!(many.filter(), "warn,curio=trace,curio_assets=trace,curio_shared=trace");
    }
}
