//! # 日志工具
//!
//! 基于 `tracing` / `tracing-subscriber` 的日志初始化与按组件区分的日志句柄。
//!
//! ## 功能
//! - 控制台输出（stderr）
//! - 按日期命名的日志文件 `lifetool.<YYYY-MM-DD>.log`，追加写入
//! - 启动时只保留最近 5 个日志文件
//! - `RUST_LOG` 优先于 `--log-level`
//!
//! `LogProvider` 由 `main.rs` 显式创建，通过 `logger()` 把 `Logger`
//! 交给各组件，不存在全局缓存。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/` 使用
//! - 使用 `tracing`, `tracing-subscriber`, `chrono`

use crate::error::{LifeToolError, Result};

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "lifetool.";
/// 保留的日志文件数量
const LOG_FILES_KEPT: usize = 5;

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别（EnvFilter 语法，如 `info`、`lifetool=debug`）
    pub level: String,
    /// 日志文件目录，`None` 表示不写文件
    pub log_dir: Option<PathBuf>,
}

/// 日志提供者
#[derive(Debug)]
pub struct LogProvider {
    log_file: Option<PathBuf>,
}

impl LogProvider {
    /// 安装全局 subscriber
    pub fn init(config: &LogConfig) -> Result<Self> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
                LifeToolError::InvalidArgument(format!(
                    "Invalid log level '{}': {}",
                    config.level, e
                ))
            })?,
        };

        let mut file_error = None;
        let (file_layer, log_file) = match config.log_dir.as_deref().map(open_log_file) {
            Some(Ok((file, path))) => {
                let layer = fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file));
                (Some(layer), Some(path))
            }
            Some(Err(e)) => {
                file_error = Some(e);
                (None, None)
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(file_layer)
            .try_init()
            .map_err(|e| LifeToolError::LoggingInit(e.to_string()))?;

        // 日志文件不可用时只输出到控制台
        if let Some(e) = file_error {
            tracing::warn!("Log file disabled, logging to console only: {}", e);
        }

        Ok(LogProvider { log_file })
    }

    /// 不安装 subscriber 的提供者，事件由当前（或空）subscriber 处理
    #[cfg(test)]
    pub fn detached() -> Self {
        LogProvider { log_file: None }
    }

    /// 获取指定组件的日志句柄
    pub fn logger(&self, component: &'static str) -> Logger {
        Logger { component }
    }

    /// 当前写入的日志文件
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// 带组件名的日志句柄
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    component: &'static str,
}

impl Logger {
    pub fn debug(&self, msg: &str) {
        tracing::debug!(component = self.component, "{}", msg);
    }

    pub fn info(&self, msg: &str) {
        tracing::info!(component = self.component, "{}", msg);
    }

    pub fn warn(&self, msg: &str) {
        tracing::warn!(component = self.component, "{}", msg);
    }

    pub fn error(&self, msg: &str) {
        tracing::error!(component = self.component, "{}", msg);
    }
}

/// 打开今天的日志文件（追加写入）
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    let path = open_log_dir(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| LifeToolError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
    Ok((file, path))
}

/// 准备日志目录：创建目录、清理旧文件，返回今天的日志文件路径
fn open_log_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| LifeToolError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let today = log_file_name(&chrono::Local::now().format("%Y-%m-%d").to_string());
    prune_old_logs(dir, &today, LOG_FILES_KEPT);

    Ok(dir.join(today))
}

fn log_file_name(date: &str) -> String {
    format!("{}{}.log", LOG_FILE_PREFIX, date)
}

/// 删除多余的旧日志文件，连同 `today` 在内只保留 `keep` 个
///
/// 文件名中的日期为 `YYYY-MM-DD`，按文件名排序即按日期排序。
/// 清理失败不影响运行。
fn prune_old_logs(dir: &Path, today: &str, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut old: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log"))
        .filter(|name| name != today)
        .collect();

    old.sort();
    let excess = (old.len() + 1).saturating_sub(keep);
    for name in old.iter().take(excess) {
        fs::remove_file(dir.join(name)).ok();
    }
}
