//! # rename 子命令 CLI 定义
//!
//! 剧集文件批量重命名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Series folder; its name becomes the series name
    pub dir: PathBuf,

    /// Show what would be renamed without touching any file
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Write per-file outcomes to a CSV file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
