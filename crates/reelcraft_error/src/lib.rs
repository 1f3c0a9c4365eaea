//! Error types for Reelcraft.
//!
//! This crate provides the error types shared by every Reelcraft crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums name specific error conditions
//! - `*Error` structs wrap a kind (or a message) with source location tracking
//! - constructors use `#[track_caller]` for automatic location capture
//!
//! Every error converts into [`ReelcraftError`], which is what pipeline
//! operations return through [`ReelcraftResult`].
//!
//! # Examples
//!
//! ```
//! use reelcraft_error::{ErrorClass, ReelcraftResult, ValidationError};
//!
//! fn check_niche(niche: &str) -> ReelcraftResult<()> {
//!     if niche.trim().is_empty() {
//!         Err(ValidationError::new("niche", "niche must not be empty"))?
//!     }
//!     Ok(())
//! }
//!
//! let err = check_niche("  ").unwrap_err();
//! assert_eq!(err.class(), ErrorClass::InvalidInput);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod json;
mod output;
mod provider;
mod validation;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{ErrorClass, ReelcraftError, ReelcraftErrorKind, ReelcraftResult};
pub use json::JsonError;
pub use output::{EmptyResponseError, MalformedOutputError};
pub use provider::{ProviderError, ProviderErrorKind};
pub use validation::ValidationError;
