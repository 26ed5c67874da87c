//! # 数据模型模块
//!
//! 定义季集识别结果和重命名计划的数据模型。
//!
//! ## 依赖关系
//! - 被 `episode/` 和 `batch/` 使用
//! - 子模块: episode

pub mod episode;

pub use episode::{RenamePlan, SeasonEpisode};
