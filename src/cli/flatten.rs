//! # flatten 子命令 CLI 定义
//!
//! 把子目录中的文件移动到指定目录下
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/flatten.rs`

use clap::Args;
use std::path::PathBuf;

/// flatten 子命令参数
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Directory whose subdirectories are flattened into it
    pub dir: PathBuf,

    /// Keep subdirectories that end up empty
    #[arg(long, default_value_t = false)]
    pub keep_empty_dirs: bool,
}
