//! Error system for kitchenpos
//!
//! - [`ErrorCode`]: error codes
//! - [`ErrorCategory`]: general vs. system classification
//! - [`AppError`]: error type carrying a code, a message and optional details
//! - [`ApiResponse`]: JSON error body
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::invalid_argument("Price must not be negative")
//!     .with_detail("price", "-1");
//! assert_eq!(err.code, ErrorCode::InvalidArgument);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
