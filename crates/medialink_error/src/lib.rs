//! Error types for the medialink bot utilities.
//!
//! This crate provides the foundation error types used throughout the
//! medialink workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions (where the concern
//!   has distinguishable conditions; collaborator errors carry a message)
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use medialink_error::{MedialinkResult, ChatError};
//!
//! fn send() -> MedialinkResult<()> {
//!     Err(ChatError::new("Connection refused"))?
//! }
//!
//! match send() {
//!     Ok(_) => println!("sent"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod chat;
mod config;
mod error;
mod media;
mod storage;
mod validation;

pub use cache::CacheError;
pub use chat::ChatError;
pub use config::ConfigError;
pub use error::{MedialinkError, MedialinkErrorKind, MedialinkResult};
pub use media::MediaError;
pub use storage::StorageError;
pub use validation::{ValidationError, ValidationErrorKind};
