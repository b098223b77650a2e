pub mod config;
pub mod version;

pub use config::VersionConfig;
pub use version::{VersionError, VersionValue};
