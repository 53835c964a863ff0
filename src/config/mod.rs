//! Advisor Configuration Module
//!
//! Service endpoints, dashboard embed parameters, storage settings and
//! reference dataset paths loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `--config` CLI flag (errors are fatal)
//! 2. `PROP_ADVISOR_CONFIG` environment variable (path to TOML file)
//! 3. `prop_advisor.toml` in the current working directory
//! 4. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! config::init(AdvisorConfig::load());
//! let endpoint = &config::get().prediction.endpoint;
//! ```

mod advisor_config;
pub mod defaults;
pub mod validation;

pub use advisor_config::*;

use std::sync::OnceLock;

/// Global configuration, initialized once at startup.
static ADVISOR_CONFIG: OnceLock<AdvisorConfig> = OnceLock::new();

/// Initialize the global configuration. Later calls are ignored with a warning.
pub fn init(config: AdvisorConfig) {
    if ADVISOR_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get the global configuration.
///
/// Falls back to built-in defaults when `init()` has not run, which keeps
/// handlers usable in tests that never load a file.
pub fn get() -> &'static AdvisorConfig {
    ADVISOR_CONFIG.get_or_init(AdvisorConfig::default)
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    ADVISOR_CONFIG.get().is_some()
}
