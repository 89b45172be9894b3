//! Outcome values, do-notation and adapters for raising functions.
//!
//! This crate bundles [`outcome_core`] with the `#[as_result]` attribute.
//!
//! ```rust
//! use outcome::as_result;
//!
//! #[as_result(std::num::ParseIntError)]
//! fn port(raw: &str) -> anyhow::Result<u16> {
//!     Ok(raw.parse()?)
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! assert_eq!(port("8080")?.ok(), Some(8080));
//! assert!(port("http")?.is_err());
//! # Ok(())
//! # }
//! ```
//!
//! The kind list is checked when the attribute expands. It cannot be empty:
//!
//! ```compile_fail
//! #[outcome::as_result()]
//! fn port(raw: &str) -> anyhow::Result<u16> {
//!     Ok(raw.parse()?)
//! }
//! ```
//!
//! and no kind may be listed twice, whatever path names it:
//!
//! ```compile_fail
//! #[outcome::as_result(std::num::ParseIntError, std::num::ParseIntError)]
//! fn port(raw: &str) -> anyhow::Result<u16> {
//!     Ok(raw.parse()?)
//! }
//! ```
//!
//! ```compile_fail
//! use std::num::ParseIntError;
//!
//! #[outcome::as_result(ParseIntError, std::num::ParseIntError)]
//! fn port(raw: &str) -> anyhow::Result<u16> {
//!     Ok(raw.parse()?)
//! }
//! ```
//!
//! Functions with their own error type are rejected as well:
//!
//! ```compile_fail
//! #[outcome::as_result(std::num::ParseIntError)]
//! fn port(raw: &str) -> Result<u16, std::num::ParseIntError> {
//!     raw.parse()
//! }
//! ```
//!
//! ```compile_fail
//! #[outcome::as_result(std::io::Error)]
//! fn read(path: &str) -> std::io::Result<String> {
//!     std::fs::read_to_string(path)
//! }
//! ```
//!
//! Distinct kinds and the `Result<T, anyhow::Error>` spelling are accepted:
//!
//! ```rust
//! use std::num::{ParseFloatError, ParseIntError};
//!
//! #[outcome::as_result(ParseIntError, ParseFloatError)]
//! fn ratio(num: &str, den: &str) -> Result<f64, anyhow::Error> {
//!     Ok(num.parse::<i32>()? as f64 / den.parse::<f64>()?)
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! assert_eq!(ratio("3", "2")?.ok(), Some(1.5));
//! assert!(ratio("x", "2")?.is_err());
//! assert!(ratio("3", "y")?.is_err());
//! # Ok(())
//! # }
//! ```

pub use anyhow;
pub use outcome_core::*;
pub use outcome_macros::as_result;
