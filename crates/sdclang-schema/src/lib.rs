//! SDClang configuration file schema
//!
//! Typed views of the two JSON documents that feed SDClang selection:
//! the AE config (`{"SDCLANG_AE_FLAG": "..."}`) and the vendor override
//! file, a mapping from product name to an override block.

pub mod ae;
pub mod error;
pub mod overrides;

pub use ae::AeConfig;
pub use error::SchemaError;
pub use overrides::{OverrideBlock, ProductOverrideStore};

