//! SDClang configuration resolver
//!
//! Decides, once per build, whether the vendor SDClang toolchain replaces
//! the platform clang, where it lives, and which flags it gets. Inputs are
//! two optional JSON files and a handful of environment variables; the
//! environment always wins over the files.

pub mod config;
pub mod env;
pub mod error;
pub mod init;
pub mod prebuilts;
pub mod publish;
pub mod report;
pub mod resolve;

pub use env::EnvSnapshot;
pub use error::ResolveError;
pub use init::SdclangConfig;
pub use publish::PublishedVariables;
pub use report::ResolutionReport;
pub use resolve::{resolve, validate, FileLayer, ResolvedFeatureState, ValueOrigin};
pub use sdclang_schema::{AeConfig, OverrideBlock, ProductOverrideStore, SchemaError};
