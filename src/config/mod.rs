//! Configuration file loading
//!
//! Two optional JSON files feed SDClang selection:
//! 1. AE config (`$ANDROID_BUILD_TOP/$SDCLANG_AE_CONFIG`)
//! 2. Vendor overrides (`$ANDROID_BUILD_TOP/$SDCLANG_CONFIG`)
//!
//! A missing file is an empty layer. Anything else that goes wrong is fatal.

mod loader;
mod source;

pub use loader::{join_build_root, load_ae_flag, load_product_overrides, ConfigPaths, Loaded};
pub use source::{ConfigOrigin, ConfigSource};
