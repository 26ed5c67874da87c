//! # 目录展平
//!
//! 把子目录（任意深度）中的文件全部移动到根目录下，然后删除变空的子目录。
//! 同名文件已存在时跳过，不覆盖。
//!
//! ## 依赖关系
//! - 被 `commands/flatten.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/runner.rs`
//! - 使用 `walkdir` 自底向上清理空目录

use crate::batch::collector::FileCollector;
use crate::batch::runner::{display_name, BatchRunner, FileOutcome, RunSummary, SkipReason};
use crate::error::{LifeToolError, Result};
use crate::utils::logging::Logger;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 展平选项
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenOptions {
    /// 保留变空的子目录
    pub keep_empty_dirs: bool,
}

/// 展平结果
#[derive(Debug, Default)]
pub struct FlattenReport {
    pub summary: RunSummary,
    /// 删除的空目录
    pub removed_dirs: Vec<PathBuf>,
}

/// 把 `root` 下所有子目录中的文件移动到 `root`
pub fn flatten_directory(
    root: &Path,
    options: FlattenOptions,
    logger: &Logger,
) -> Result<FlattenReport> {
    if !root.exists() {
        logger.error(&format!("Directory not found: {}", root.display()));
        return Err(LifeToolError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }
    if !root.is_dir() {
        logger.error(&format!("Not a directory: {}", root.display()));
        return Err(LifeToolError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let files = FileCollector::new(root).nested_only(true).collect()?;
    logger.info(&format!(
        "Found {} nested file(s) under {}",
        files.len(),
        root.display()
    ));

    let mut moved_to = HashSet::new();
    let summary = BatchRunner::new().run(files, |path| move_up(root, path, &mut moved_to, logger));

    let removed_dirs = if options.keep_empty_dirs {
        Vec::new()
    } else {
        remove_empty_dirs(root, logger)
    };

    Ok(FlattenReport {
        summary,
        removed_dirs,
    })
}

fn move_up(
    root: &Path,
    path: &Path,
    moved_to: &mut HashSet<PathBuf>,
    logger: &Logger,
) -> FileOutcome {
    let name = display_name(path);
    let target = root.join(&name);

    if target.exists() || moved_to.contains(&target) {
        logger.warn(&format!(
            "Target already exists, skipping: {}",
            path.display()
        ));
        return FileOutcome::Skipped {
            source: path.to_path_buf(),
            reason: SkipReason::Collision(target),
        };
    }

    match fs::rename(path, &target) {
        Ok(()) => {
            logger.info(&format!("Moved: {} -> {}", path.display(), name));
            moved_to.insert(target.clone());
            FileOutcome::Renamed {
                source: path.to_path_buf(),
                target,
            }
        }
        Err(e) => {
            logger.error(&format!("Failed to move {}: {}", path.display(), e));
            FileOutcome::Skipped {
                source: path.to_path_buf(),
                reason: SkipReason::Io(e.to_string()),
            }
        }
    }
}

/// 自底向上删除空的子目录
fn remove_empty_dirs(root: &Path, logger: &Logger) -> Vec<PathBuf> {
    let mut removed = Vec::new();

    let dirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect();

    for dir in dirs {
        let is_empty = fs::read_dir(&dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if !is_empty {
            continue;
        }

        match fs::remove_dir(&dir) {
            Ok(()) => {
                logger.debug(&format!("Removed empty directory: {}", dir.display()));
                removed.push(dir);
            }
            Err(e) => logger.warn(&format!(
                "Failed to remove directory {}: {}",
                dir.display(),
                e
            )),
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logging::LogProvider;

    fn logger() -> Logger {
        LogProvider::detached().logger("flatten")
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_flatten_moves_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("top.mp4"), "top");
        write(&root.join("Season 1/S01E01.mp4"), "a");
        write(&root.join("Season 1/extras/deep/S01E02.mp4"), "b");

        let report = flatten_directory(root, FlattenOptions::default(), &logger()).unwrap();

        assert_eq!(report.summary.renamed, 2);
        assert_eq!(report.summary.skipped, 0);
        assert_eq!(fs::read_to_string(root.join("S01E01.mp4")).unwrap(), "a");
        assert_eq!(fs::read_to_string(root.join("S01E02.mp4")).unwrap(), "b");
        assert_eq!(fs::read_to_string(root.join("top.mp4")).unwrap(), "top");
        assert!(!root.join("Season 1").exists());
        assert_eq!(report.removed_dirs.len(), 3);
    }

    #[test]
    fn test_flatten_skips_name_collisions() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("cover.jpg"), "root");
        write(&root.join("a/cover.jpg"), "a");
        write(&root.join("b/S01E01.mkv"), "b1");
        write(&root.join("c/S01E01.mkv"), "c1");

        let report = flatten_directory(root, FlattenOptions::default(), &logger()).unwrap();

        assert_eq!(report.summary.renamed, 1);
        assert_eq!(report.summary.skipped, 2);
        assert_eq!(fs::read_to_string(root.join("cover.jpg")).unwrap(), "root");
        assert_eq!(fs::read_to_string(root.join("S01E01.mkv")).unwrap(), "b1");
        // 仍有文件的子目录保留
        assert!(root.join("a/cover.jpg").exists());
        assert!(root.join("c/S01E01.mkv").exists());
        assert!(!root.join("b").exists());
    }

    #[test]
    fn test_flatten_keep_empty_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("sub/S01E01.mp4"), "a");

        let options = FlattenOptions {
            keep_empty_dirs: true,
        };
        let report = flatten_directory(root, options, &logger()).unwrap();

        assert_eq!(report.summary.renamed, 1);
        assert!(report.removed_dirs.is_empty());
        assert!(root.join("sub").is_dir());
    }

    #[test]
    fn test_flatten_without_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("top.mp4"), "top");

        let report = flatten_directory(dir.path(), FlattenOptions::default(), &logger()).unwrap();

        assert_eq!(report.summary.total(), 0);
        assert!(dir.path().join("top.mp4").exists());
    }

    #[test]
    fn test_flatten_missing_directory() {
        let result = flatten_directory(
            Path::new("/nonexistent/path/that/does/not/exist"),
            FlattenOptions::default(),
            &logger(),
        );
        assert!(matches!(result, Err(LifeToolError::DirectoryNotFound { .. })));
    }
}
