//! # 批量修改扩展名
//!
//! 将目录下的文件扩展名统一改为指定扩展名，可用 glob 模式筛选文件，可选递归。
//!
//! ## 依赖关系
//! - 被 `commands/ext.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/runner.rs`

use crate::batch::collector::FileCollector;
use crate::batch::runner::{display_name, BatchRunner, FileOutcome, RunSummary, SkipReason};
use crate::error::{LifeToolError, Result};
use crate::utils::logging::Logger;

use std::fs;
use std::path::Path;

/// 规范化扩展名参数：去掉前导点，拒绝空值和路径分隔符
pub fn normalize_extension(ext: &str) -> Result<String> {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err(LifeToolError::InvalidArgument(
            "Extension must not be empty".to_string(),
        ));
    }
    if ext.contains(&['/', '\\'][..]) {
        return Err(LifeToolError::InvalidArgument(format!(
            "Extension must not contain path separators: '{}'",
            ext
        )));
    }
    Ok(ext.to_string())
}

/// 修改 `directory` 下文件的扩展名
pub fn change_extension(
    directory: &Path,
    new_ext: &str,
    pattern: Option<&str>,
    recursive: bool,
    logger: &Logger,
) -> Result<RunSummary> {
    let new_ext = normalize_extension(new_ext)?;

    if !directory.exists() {
        logger.error(&format!("Directory not found: {}", directory.display()));
        return Err(LifeToolError::DirectoryNotFound {
            path: directory.display().to_string(),
        });
    }
    if !directory.is_dir() {
        logger.error(&format!("Not a directory: {}", directory.display()));
        return Err(LifeToolError::NotADirectory {
            path: directory.display().to_string(),
        });
    }

    let mut collector = FileCollector::new(directory).recursive(recursive);
    if let Some(pattern) = pattern {
        collector = collector.with_pattern(pattern)?;
    }
    let files = collector.collect()?;

    let summary = BatchRunner::new().run(files, |path| retype(path, &new_ext, logger));

    logger.info(&format!(
        "Changed extension of {} file(s) to '.{}', {} skipped",
        summary.renamed, new_ext, summary.skipped
    ));

    Ok(summary)
}

fn retype(path: &Path, new_ext: &str, logger: &Logger) -> FileOutcome {
    let name = display_name(path);

    let current = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if current.eq_ignore_ascii_case(new_ext) {
        logger.debug(&format!("Extension already '.{}': {}", new_ext, name));
        return FileOutcome::Skipped {
            source: path.to_path_buf(),
            reason: SkipReason::Unchanged,
        };
    }

    let target = path.with_extension(new_ext);
    if target.exists() {
        logger.warn(&format!(
            "Target already exists, skipping: {}",
            display_name(&target)
        ));
        return FileOutcome::Skipped {
            source: path.to_path_buf(),
            reason: SkipReason::Collision(target),
        };
    }

    match fs::rename(path, &target) {
        Ok(()) => {
            logger.info(&format!("Renamed: {} -> {}", name, display_name(&target)));
            FileOutcome::Renamed {
                source: path.to_path_buf(),
                target,
            }
        }
        Err(e) => {
            logger.error(&format!("Failed to rename {}: {}", name, e));
            FileOutcome::Skipped {
                source: path.to_path_buf(),
                reason: SkipReason::Io(e.to_string()),
            }
        }
    }
}
