//! 统一错误处理
//!
//! 业务规则错误统一为 [`ErrorCode::InvalidArgument`] (HTTP 400)，
//! 存储错误为 [`ErrorCode::DatabaseError`] (HTTP 500)。
//!
//! # 使用示例
//!
//! ```ignore
//! // 仓储错误直接用 ? 转换
//! let tables = self.order_tables.find_all().await?;
//!
//! // 业务规则错误
//! Err(AppError::invalid_argument("Order table 3 does not exist"))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            // Row vanished between load and update
            RepoError::NotFound(msg) => AppError::invalid_argument(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Corrupt(msg) => AppError::database(format!("Corrupt stored data: {msg}")),
        }
    }
}
