//! # LifeTool - 日常文件整理工具箱
//!
//! 将零散的文件整理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `rename`  - 剧集文件规范化命名 (`<剧名> 第N季 第M集.<扩展名>`)
//! - `flatten` - 把子目录中的文件移动到根目录
//! - `ext`     - 批量修改扩展名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (批量重命名、展平、改扩展名)
//!   │     ├── episode/  (季集识别与文件名规则)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (日志、输出、报告)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod episode;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::logging::LogProvider;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let logs = match LogProvider::init(&cli.log_config()) {
        Ok(logs) => logs,
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    };

    if let Some(path) = logs.log_file() {
        tracing::debug!("Logging to {}", path.display());
    }

    if let Err(e) = commands::run(cli.command, &logs) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
