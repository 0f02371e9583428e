//! Shared types for kitchenpos
//!
//! Domain entities, validation rules and the error system used by the server
//! crate. Nothing here touches storage or HTTP routing.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
