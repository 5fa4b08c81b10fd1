use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

// 全局配置单元：启动时写入一次，此后只读
static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Load the configuration and install it as the process-wide instance.
///
/// Only the first call performs the load; later calls return the already
/// installed configuration. The active configuration is returned so the
/// composition root can use it without a second lookup.
pub fn init_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()))
        .load_full()
}

/// The process-wide configuration.
///
/// Cheap to call from concurrent tasks; no locks are held.
///
/// # Panics
/// If `init_config` has not run yet.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}
