//! # 工具函数模块
//!
//! 提供美化输出、日志、CSV 报告等工具。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/` 使用
//! - 子模块: logging, output, report

pub mod logging;
pub mod output;
pub mod report;
