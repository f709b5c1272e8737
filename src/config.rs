//! Runtime settings: where the assets live and how much to log.
//!
//! Assets come from the bundle compiled into the binary unless a directory
//! is named by the `--assets` flag or, failing that, the `POKEGO_ASSETS`
//! environment variable.

use std::ffi::OsString;
use std::path::PathBuf;

use env_logger::Env;

/// Environment variable overriding the asset root
pub const ASSETS_ENV: &str = "POKEGO_ASSETS";
/// Environment variable holding the log filter (env_logger syntax)
pub const LOG_ENV: &str = "POKEGO_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Directory to read assets from instead of the embedded bundle
    pub assets_root: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(assets_flag: Option<PathBuf>) -> Self {
        Self::resolve_with(assets_flag, std::env::var_os(ASSETS_ENV))
    }

    fn resolve_with(assets_flag: Option<PathBuf>, assets_env: Option<OsString>) -> Self {
        let assets_root = assets_flag
            .or_else(|| assets_env.filter(|v| !v.is_empty()).map(PathBuf::from));
        Self { assets_root }
    }
}

/// Install the stderr logger. Output never goes to stdout, which carries the
/// art.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .init();
}
