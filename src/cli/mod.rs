//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 剧集文件批量重命名
//! - `flatten`: 将子目录中的文件移动到根目录
//! - `ext`: 批量修改扩展名
//!
//! 全局参数（日志级别、日志目录）可由环境变量提供。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename, flatten, ext

pub mod ext;
pub mod flatten;
pub mod rename;

use crate::utils::logging::LogConfig;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lifetool - 日常文件整理工具箱
#[derive(Parser)]
#[command(name = "lifetool")]
#[command(version)]
#[command(about = "Everyday file housekeeping: normalize TV series episode names, flatten folders, change extensions", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level or filter directive (overridden by RUST_LOG)
    #[arg(long, global = true, env = "LIFETOOL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Directory for daily log files
    #[arg(long, global = true, env = "LIFETOOL_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Do not write a log file
    #[arg(long, global = true, default_value_t = false)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 由全局参数构建日志配置
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            log_dir: (!self.no_log_file).then(|| self.log_dir.clone()),
        }
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Rename episode files to "<folder> 第N季 第M集.<ext>"
    Rename(rename::RenameArgs),

    /// Move files from nested subdirectories up into the directory
    Flatten(flatten::FlattenArgs),

    /// Change the extension of files in a directory
    Ext(ext::ExtArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rename() {
        let cli = Cli::try_parse_from(["lifetool", "rename", "/tv/Show", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Rename(args) => {
                assert_eq!(args.dir, PathBuf::from("/tv/Show"));
                assert!(args.dry_run);
                assert!(args.report.is_none());
            }
            _ => panic!("expected rename"),
        }
    }

    #[test]
    fn test_global_log_options() {
        let cli = Cli::try_parse_from([
            "lifetool",
            "flatten",
            "/tv/Show",
            "--log-level",
            "debug",
            "--no-log-file",
        ])
        .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level, "debug");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_ext_requires_target() {
        assert!(Cli::try_parse_from(["lifetool", "ext", "/tmp"]).is_err());
        let cli = Cli::try_parse_from(["lifetool", "ext", "/tmp", "--to", "mp4", "-p", "*.rmvb"])
            .unwrap();
        match cli.command {
            Commands::Ext(args) => {
                assert_eq!(args.to, "mp4");
                assert_eq!(args.pattern.as_deref(), Some("*.rmvb"));
            }
            _ => panic!("expected ext"),
        }
    }
}
