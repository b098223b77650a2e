//! Version value layer
//!
//! Parses loosely structured version strings ("1.0.0-rc.1", "1.0.1b") into
//! ordered tokens and compares them the way release numbering is usually read.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  raw string │────▶│    Token    │────▶│VersionValue │
//! │             │     │ (tokenize)  │     │(cmp / hash) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`]: token types, tokenization and zero-padding normalization
//! - [`value`]: `VersionValue` with memoized tokens and hash
//! - [`error`]: error types for parsing, hashing and the self-check
//! - [`self_check`]: fixed table of ordered pairs used as a smoke test

pub mod error;
pub mod self_check;
pub mod token;
pub mod value;

pub use error::VersionError;
pub use token::{Numeric, Qualifier, Token};
pub use value::VersionValue;
