//! Smoke test over a fixed table of ordered version pairs

use tracing::debug;

use crate::config::VersionConfig;
use crate::version::error::SelfCheckError;
use crate::version::value::VersionValue;

/// Pairs where the first version must sort strictly below the second
pub const ORDERED_PAIRS: &[(&str, &str)] = &[
    ("1.0.0", "2.0.0"),
    ("1.0.0", "1.42.0"),
    ("1.2.0", "1.2.42"),
    ("1.1.0-alpha", "1.2.0-alpha.1"),
    ("1.0.1b", "1.0.10-alpha.beta"),
    ("1.0.0-rc.1", "1.0.0"),
];

/// Check every pair in [`ORDERED_PAIRS`] with `<`, `>` and `!=`, and hash both sides.
///
/// Returns the number of pairs checked.
pub fn run(config: &VersionConfig) -> Result<usize, SelfCheckError> {
    for &(lower, higher) in ORDERED_PAIRS {
        check_pair(lower, higher, config)?;
    }
    Ok(ORDERED_PAIRS.len())
}

fn check_pair(
    lower: &'static str,
    higher: &'static str,
    config: &VersionConfig,
) -> Result<(), SelfCheckError> {
    let low = VersionValue::with_config(lower, config);
    let high = VersionValue::with_config(higher, config);

    // Surface parse errors instead of a bare comparison failure
    low.tokens()?;
    high.tokens()?;

    let checks = [
        (low < high, lower, "<", higher),
        (high > low, higher, ">", lower),
        (high != low, higher, "!=", lower),
    ];
    for (holds, left, op, right) in checks {
        if !holds {
            return Err(SelfCheckError::Assertion { left, right, op });
        }
    }

    low.try_hash()?;
    high.try_hash()?;

    debug!("{} < {} ok", lower, higher);
    Ok(())
}
