//! Comparable, hashable version value
//!
//! [`VersionValue`] keeps the raw string it was built from and parses it on
//! first use. Tokens and the hash are memoized in single-assignment cells, so a
//! value can be shared across threads without locking.
//!
//! Comparison pads the shorter token sequence with zeros, which makes `1.7`,
//! `1.7.0` and `1.7.0.0` equal. Hashing drops trailing zero tokens, which is
//! the same as padding every sequence to one fixed length, so equal values hash
//! equally whatever their limit. A version with more components than its hash
//! normalization limit cannot be hashed.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::config::{DEFAULT_HASH_NORMALIZATION_LIMIT, VersionConfig};
use crate::version::error::VersionError;
use crate::version::token::{Token, normalize, tokenize, trim_trailing_zeros};

#[derive(Clone)]
pub struct VersionValue {
    raw: String,
    hash_limit: usize,
    tokens: OnceLock<Result<Vec<Token>, VersionError>>,
    hash: OnceLock<Result<u64, VersionError>>,
}

impl VersionValue {
    /// Create a value with the default hash normalization limit.
    ///
    /// Never fails: parsing is deferred until tokens are first needed.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_hash_limit(raw, DEFAULT_HASH_NORMALIZATION_LIMIT)
    }

    pub fn with_hash_limit(raw: impl Into<String>, hash_limit: usize) -> Self {
        Self {
            raw: raw.into(),
            hash_limit,
            tokens: OnceLock::new(),
            hash: OnceLock::new(),
        }
    }

    pub fn with_config(raw: impl Into<String>, config: &VersionConfig) -> Self {
        Self::with_hash_limit(raw, config.hash_normalization_limit)
    }

    /// The string this value was built from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn hash_limit(&self) -> usize {
        self.hash_limit
    }

    /// Parsed tokens, computed on first call and cached.
    ///
    /// A parse failure is cached as well; every later call returns the same error.
    pub fn tokens(&self) -> Result<&[Token], VersionError> {
        self.tokens
            .get_or_init(|| {
                let parsed = tokenize(&self.raw).inspect_err(|e| {
                    warn!("Failed to parse version '{}': {}", self.raw, e);
                });
                if let Ok(tokens) = &parsed {
                    debug!("Parsed version '{}' into {} tokens", self.raw, tokens.len());
                }
                parsed
            })
            .as_deref()
            .map_err(Clone::clone)
    }

    /// Element-wise equality after zero padding.
    pub fn try_eq(&self, other: &Self) -> Result<bool, VersionError> {
        let (lhs, rhs) = normalize(self.tokens()?, other.tokens()?);
        Ok(lhs == rhs)
    }

    /// Lexicographic ordering after zero padding.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, VersionError> {
        let (lhs, rhs) = normalize(self.tokens()?, other.tokens()?);
        Ok(lhs.as_ref().cmp(rhs.as_ref()))
    }

    /// Hash of the tokens with trailing zeros removed, cached after the first call.
    ///
    /// Fails with [`VersionError::TooManyComponents`] when the version has more
    /// components than the limit.
    pub fn try_hash(&self) -> Result<u64, VersionError> {
        self.hash
            .get_or_init(|| {
                let mut hasher = DefaultHasher::new();
                self.try_hash_into(&mut hasher)?;
                Ok(hasher.finish())
            })
            .clone()
    }

    /// Feed the token sequence, without trailing zeros, into `state`.
    ///
    /// The limit only decides whether a version may be hashed; it is not part of
    /// the hashed data.
    pub fn try_hash_into<H: Hasher>(&self, state: &mut H) -> Result<(), VersionError> {
        let tokens = self.tokens()?;
        if tokens.len() > self.hash_limit {
            let err = VersionError::TooManyComponents {
                count: tokens.len(),
                limit: self.hash_limit,
            };
            warn!("Cannot hash version '{}': {}", self.raw, err);
            return Err(err);
        }

        trim_trailing_zeros(tokens).hash(state);
        Ok(())
    }
}

impl From<&str> for VersionValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for VersionValue {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl FromStr for VersionValue {
    type Err = VersionError;

    /// Parse eagerly, surfacing an unknown qualifier right away.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Self::new(s);
        value.tokens()?;
        Ok(value)
    }
}

impl PartialEq for VersionValue {
    /// Unparseable values are never equal to anything, themselves included.
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for VersionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VersionValue").field(&self.raw).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(raw: &str) -> VersionValue {
        VersionValue::from(raw)
    }

    #[rstest]
    #[case("1.0.0", "2.0.0")]
    #[case("1.0.0", "1.42.0")]
    #[case("1.2.0", "1.2.42")]
    #[case("1.1.0-alpha", "1.2.0-alpha.1")]
    #[case("1.0.1b", "1.0.10-alpha.beta")]
    #[case("1.0.0-rc.1", "1.0.0")]
    fn ordered_pairs_compare_as_expected(#[case] lower: &str, #[case] higher: &str) {
        assert!(v(lower) < v(higher));
        assert!(v(higher) > v(lower));
        assert!(v(higher) != v(lower));
        assert_eq!(v(lower).try_cmp(&v(higher)), Ok(Ordering::Less));
    }

    #[rstest]
    #[case("1.7", "1.7.0")]
    #[case("1.7", "1.7.0.0")]
    #[case("2.0", "2.0.0.0")]
    #[case("1.0a1", "1.0-alpha.1")]
    #[case("1.0B", "1.0-beta")]
    #[case("01.002", "1.2.0")]
    #[case("", "0.0")]
    fn equivalent_spellings_are_equal(#[case] a: &str, #[case] b: &str) {
        assert_eq!(v(a), v(b));
        assert_eq!(v(a).try_cmp(&v(b)), Ok(Ordering::Equal));
        assert_eq!(v(a).try_hash(), v(b).try_hash());
    }

    #[rstest]
    #[case("1.0-alpha", "1.0-beta")]
    #[case("1.0-beta", "1.0-rc")]
    #[case("1.0-rc", "1.0")]
    #[case("1.0-alpha", "1.0")]
    fn qualifiers_order_below_release(#[case] lower: &str, #[case] higher: &str) {
        assert!(v(lower) < v(higher));
    }

    #[test]
    fn trailing_qualifier_orders_below_padding_zero() {
        // 1.0 pads to 1.0.0 which outranks the rc qualifier in third position
        assert!(v("1.0rc") < v("1.0"));
        assert!(v("1.0.0.rc") < v("1"));
    }

    #[test]
    fn tokens_are_memoized() {
        let value = v("1.2.3");
        let first = value.tokens().unwrap().as_ptr();
        let second = value.tokens().unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn construction_defers_parse_errors() {
        let value = v("1.0.0-foo");
        assert_eq!(value.raw(), "1.0.0-foo");
        assert_eq!(
            value.tokens(),
            Err(VersionError::UnrecognizedQualifier("foo".to_string()))
        );
        assert_eq!(
            value.try_cmp(&v("1.0.0")),
            Err(VersionError::UnrecognizedQualifier("foo".to_string()))
        );
        assert!(value.partial_cmp(&v("1.0.0")).is_none());
        assert!(value != value.clone());
    }

    #[test]
    fn from_str_parses_eagerly() {
        assert!("1.0.0-rc.2".parse::<VersionValue>().is_ok());
        assert_eq!(
            "1.0.0-foo".parse::<VersionValue>().unwrap_err(),
            VersionError::UnrecognizedQualifier("foo".to_string())
        );
    }

    #[test]
    fn hash_fails_only_when_components_exceed_limit() {
        let value = VersionValue::with_hash_limit("1.2.3.4", 3);

        assert_eq!(value.tokens().unwrap().len(), 4);
        assert!(value > VersionValue::with_hash_limit("1.2.3", 3));
        assert_eq!(
            value.try_hash(),
            Err(VersionError::TooManyComponents { count: 4, limit: 3 })
        );
    }

    #[test]
    fn hash_at_exact_limit_succeeds() {
        let value = VersionValue::with_hash_limit("1.2.3", 3);
        assert!(value.try_hash().is_ok());
    }

    #[rstest]
    #[case("1.7", 10, "1.7.0", 12)]
    #[case("1.0.0-rc.1", 5, "1.0.0-rc.1.0", 64)]
    #[case("", 0, "0.0.0", 3)]
    fn equal_values_hash_equally_across_limits(
        #[case] a: &str,
        #[case] limit_a: usize,
        #[case] b: &str,
        #[case] limit_b: usize,
    ) {
        let a = VersionValue::with_hash_limit(a, limit_a);
        let b = VersionValue::with_hash_limit(b, limit_b);
        assert_eq!(a, b);
        assert_eq!(a.try_hash().unwrap(), b.try_hash().unwrap());
    }

    #[test]
    fn huge_limit_hashes_without_allocating_padding() {
        let value = VersionValue::with_hash_limit("1.7", usize::MAX);
        assert_eq!(value.try_hash(), v("1.7.0").try_hash());
    }

    #[test]
    fn hash_is_memoized_and_deterministic() {
        let value = v("1.0.0-rc.1");
        let first = value.try_hash().unwrap();
        assert_eq!(value.try_hash().unwrap(), first);
        assert_eq!(v("1.0.0-rc.1").try_hash().unwrap(), first);
    }

    #[test]
    fn with_config_uses_configured_limit() {
        let config = VersionConfig {
            hash_normalization_limit: 12,
        };
        let value = VersionValue::with_config("1.2.3.4.5.6.7.8.9.10.11", &config);
        assert_eq!(value.hash_limit(), 12);
        assert!(value.try_hash().is_ok());
        assert!(v("1.2.3.4.5.6.7.8.9.10.11").try_hash().is_err());
    }

    #[test]
    fn display_and_debug_show_raw_string() {
        let value = v("1.0.0-rc.1");
        assert_eq!(value.to_string(), "1.0.0-rc.1");
        assert_eq!(format!("{value:?}"), "VersionValue(\"1.0.0-rc.1\")");
    }

    #[test]
    fn concurrent_first_access_yields_one_result() {
        let value = v("3.1.4-beta.15");
        let hashes: Vec<u64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| value.try_hash().unwrap())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(hashes.windows(2).all(|w| w[0] == w[1]));
    }
}
