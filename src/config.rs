use serde::Deserialize;

/// Default number of components every version is padded to before hashing
pub const DEFAULT_HASH_NORMALIZATION_LIMIT: usize = 10;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Construction settings for [`VersionValue`](crate::version::value::VersionValue)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionConfig {
    /// Maximum number of components a version may have and still be hashed
    pub hash_normalization_limit: usize,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            hash_normalization_limit: DEFAULT_HASH_NORMALIZATION_LIMIT,
        }
    }
}
