#![deny(missing_docs)]
#![doc = "Shared error, configuration and schema types for the polya orbit counter."]

pub mod config;
pub mod errors;
pub mod provenance;

pub use config::{CountConfig, CountLimits};
pub use errors::{ErrorInfo, PolyaError};
pub use provenance::SchemaVersion;
