//! Global read-only config handle.
//!
//! The config is frozen once loaded: readers get a shared `Arc<Config>`
//! through lock-free `arc-swap` loads and never a mutable reference.

use crate::config::Config;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<Config>> =
    LazyLock::new(|| ArcSwap::from_pointee(Config::default()));

#[inline]
pub fn cfg() -> Arc<Config> {
    CONFIG.load_full()
}

/// Freeze a loaded config and publish it as the global one.
#[inline]
pub fn init_config(config: Config) -> Arc<Config> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_publishes_value() {
        let arc = init_config(Config::new_default());
        let current = cfg();

        assert!(Arc::ptr_eq(&arc, &current));
        assert_eq!(current.site.title, "PuGo");
    }
}
