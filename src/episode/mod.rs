//! # 季集识别模块
//!
//! 从杂乱的剧集文件名中识别季数和集数，并生成规范化文件名。
//!
//! ## 依赖关系
//! - 被 `batch/renamer.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: extractor, naming

pub mod extractor;
pub mod naming;

pub use extractor::extract_season_episode;
