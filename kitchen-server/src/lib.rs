//! Kitchen Server - 餐厅 POS 后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite (sqlx) 仓储实现
//! - **服务** (`services`): 每个聚合一个服务，编排业务规则
//! - **HTTP API** (`api`): RESTful 接口，仅做 JSON ↔ 领域类型转换
//!
//! # 模块结构
//!
//! ```text
//! kitchen-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── db/            # 连接池、迁移、仓储
//! ├── services/      # 商品、菜单、桌台、拼桌、订单
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由装配与中间件
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 创建工作目录、初始化日志
///
/// `.env` must already be loaded so that `config` reflects it.
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __ __ _ __       __
   / //_/(_) /______/ /_  ___  ____
  / ,<  / / __/ ___/ __ \/ _ \/ __ \
 / /| |/ / /_/ /__/ / / /  __/ / / /
/_/ |_/_/\__/\___/_/ /_/\___/_/ /_/
                          kitchenpos
    "#
    );
}
