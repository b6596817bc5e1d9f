//! # Error Handling
//!
//! Provides the `AppError` enum used for failures outside the validation
//! result itself: unreadable documents, unknown operations, broken refs.
//! A request that breaks its contract is not an `AppError`; see
//! [`crate::outcome::ValidationError`].

use derive_more::{Display, From};

/// The crate-wide error enum.
///
/// String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A document or request payload could not be decoded.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The schema has no answer for the lookup (unknown path, method or `$ref`).
    #[from(ignore)]
    #[display("Schema Error: {_0}")]
    Schema(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
