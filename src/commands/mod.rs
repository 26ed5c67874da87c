//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`
//! - 子模块: rename, flatten, ext

pub mod ext;
pub mod flatten;
pub mod rename;

use crate::cli::Commands;
use crate::error::Result;
use crate::utils::logging::LogProvider;

/// 执行命令
pub fn run(cmd: Commands, logs: &LogProvider) -> Result<()> {
    match cmd {
        Commands::Rename(args) => rename::execute(args, logs),
        Commands::Flatten(args) => flatten::execute(args, logs),
        Commands::Ext(args) => ext::execute(args, logs),
    }
}
