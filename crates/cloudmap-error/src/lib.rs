//! # cloudmap-error
//!
//! Unified error handling for cloudmap - following OpenDAL's error handling practices.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., DiscoveryFailed, WriteFailed)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use cloudmap_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DiscoveryFailed, "describe call rejected")
//!         .with_operation("network::discover_vpcs")
//!         .with_context("region", "us-east-1")
//!         .with_context("resource_kind", "vpc"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, cloudmap_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using cloudmap Error
pub type Result<T> = std::result::Result<T, Error>;
