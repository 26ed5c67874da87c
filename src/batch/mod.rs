//! # 批量处理模块
//!
//! 提供目录级别的批量文件操作。
//!
//! ## 功能
//! - 收集目录下的文件列表
//! - 顺序处理并汇总每个文件的结果
//! - 剧集重命名、目录展平、扩展名修改
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `episode/`, `utils/logging.rs`

pub mod collector;
pub mod extension;
pub mod flatten;
pub mod renamer;
pub mod runner;

pub use extension::change_extension;
pub use flatten::{flatten_directory, FlattenOptions};
pub use renamer::SeriesRenamer;
pub use runner::{FileOutcome, RunSummary};
