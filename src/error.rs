//! # 统一错误处理模块
//!
//! 定义 lifetool 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的失败（无法识别、冲突、重命名 I/O 错误）不走这里，
//! 而是记录为 `SkipReason`，批处理继续执行。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// lifetool 统一错误类型
#[derive(Error, Debug)]
pub enum LifeToolError {
    // ─────────────────────────────────────────────────────────────
    // 前置条件错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("No files found in directory: {path}")]
    EmptyDirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 日志初始化错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LifeToolError>;
