//! Tokens of a parsed version string
//!
//! A version string is read as a sequence of maximal ASCII digit runs and
//! maximal ASCII letter runs. Everything else (dots, hyphens, plus signs) only
//! separates runs.
//!
//! - digit runs become [`Token::Number`] with unbounded precision
//! - letter runs become [`Token::Qualifier`] when they name a known pre-release
//!   marker (`a`, `alpha`, `b`, `beta`, `rc`, case-insensitive)
//!
//! Every qualifier orders below every number, so `1.0.0-rc.1` sorts before `1.0.0`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;

static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+|[a-zA-Z]+").unwrap());

/// Pre-release marker recognized in a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Qualifier {
    /// `a` or `alpha`
    Alpha,
    /// `b` or `beta`
    Beta,
    /// `rc`
    ReleaseCandidate,
}

impl Qualifier {
    /// Fixed ordering weight, always below any numeric component
    pub fn weight(&self) -> i8 {
        match self {
            Qualifier::Alpha => -3,
            Qualifier::Beta => -2,
            Qualifier::ReleaseCandidate => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Qualifier::Alpha => "alpha",
            Qualifier::Beta => "beta",
            Qualifier::ReleaseCandidate => "rc",
        }
    }
}

impl FromStr for Qualifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Ok(Qualifier::Alpha),
            "b" | "beta" => Ok(Qualifier::Beta),
            "rc" => Ok(Qualifier::ReleaseCandidate),
            _ => Err(VersionError::UnrecognizedQualifier(s.to_string())),
        }
    }
}

/// Non-negative integer of any size, kept as canonical decimal digits
///
/// Leading zeros are stripped on construction, so `"007"` and `"7"` are the same
/// value and a fifty-digit component never overflows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeric(String);

impl Numeric {
    pub fn zero() -> Self {
        Numeric("0".to_string())
    }

    /// Build from a run of ASCII digits.
    pub(crate) fn from_digits(digits: &str) -> Self {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        match digits.trim_start_matches('0') {
            "" => Self::zero(),
            trimmed => Numeric(trimmed.to_string()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value as `u64`, or None if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Numeric(value.to_string())
    }
}

impl Ord for Numeric {
    // Canonical digits have no leading zeros, so a longer run is a larger number.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One component of a parsed version
///
/// Variant order matters: the derived `Ord` places every qualifier below every number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Qualifier(Qualifier),
    Number(Numeric),
}

impl Token {
    /// The padding token used by length normalization
    pub fn zero() -> Self {
        Token::Number(Numeric::zero())
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Token::Number(n) if n.is_zero())
    }
}

impl From<u64> for Token {
    fn from(value: u64) -> Self {
        Token::Number(Numeric::from(value))
    }
}

impl From<Qualifier> for Token {
    fn from(qualifier: Qualifier) -> Self {
        Token::Qualifier(qualifier)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Qualifier(q) => f.write_str(q.as_str()),
            Token::Number(n) => n.fmt(f),
        }
    }
}

/// Split a raw version string into tokens.
///
/// Fails on the first letter run that is not a known qualifier.
/// A string without any digit or letter run yields an empty sequence.
pub fn tokenize(raw: &str) -> Result<Vec<Token>, VersionError> {
    SEGMENT_RE
        .find_iter(raw)
        .map(|m| {
            let segment = m.as_str();
            if segment.starts_with(|c: char| c.is_ascii_digit()) {
                Ok(Token::Number(Numeric::from_digits(segment)))
            } else {
                segment.parse::<Qualifier>().map(Token::Qualifier)
            }
        })
        .collect()
}

/// Right-pad `seq` with zero tokens up to `len`.
pub(crate) fn pad_to(seq: &[Token], len: usize) -> Vec<Token> {
    let mut padded = Vec::with_capacity(len.max(seq.len()));
    padded.extend_from_slice(seq);
    padded.resize(len.max(seq.len()), Token::zero());
    padded
}

/// The sequence with trailing zero tokens removed.
///
/// Two sequences are equal after zero padding exactly when their trimmed forms
/// are equal.
pub fn trim_trailing_zeros(seq: &[Token]) -> &[Token] {
    let end = seq.iter().rposition(|t| !t.is_zero()).map_or(0, |i| i + 1);
    &seq[..end]
}

/// Pad the shorter of two sequences with zero tokens so both have equal length.
///
/// `1.7` against `1.7.0` becomes `1.7.0` against `1.7.0`. Sequences that already
/// have equal length are returned borrowed.
pub fn normalize<'a>(
    seq1: &'a [Token],
    seq2: &'a [Token],
) -> (Cow<'a, [Token]>, Cow<'a, [Token]>) {
    match seq1.len().cmp(&seq2.len()) {
        Ordering::Equal => (Cow::Borrowed(seq1), Cow::Borrowed(seq2)),
        Ordering::Greater => (Cow::Borrowed(seq1), Cow::Owned(pad_to(seq2, seq1.len()))),
        Ordering::Less => (Cow::Owned(pad_to(seq1, seq2.len())), Cow::Borrowed(seq2)),
    }
}
