//! Dashboard settings.

#[cfg(feature = "conf")]
pub use fieldops_conf::*;
