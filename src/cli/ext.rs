//! # ext 子命令 CLI 定义
//!
//! 批量修改文件扩展名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/ext.rs`

use clap::Args;
use std::path::PathBuf;

/// ext 子命令参数
#[derive(Args, Debug)]
pub struct ExtArgs {
    /// Directory containing the files
    pub dir: PathBuf,

    /// New extension (with or without the leading dot)
    #[arg(short, long)]
    pub to: String,

    /// Glob pattern(s) for files to change, comma separated
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}
