//! # 文件收集器
//!
//! 收集目录下待处理的文件列表。
//!
//! ## 功能
//! - 默认只收集目录下一层的文件（不含子目录）
//! - 可选递归，或只收集子目录中的文件（`nested_only`）
//! - glob 模式匹配文件名
//! - 结果按文件名排序，保证一次运行内顺序稳定
//!
//! ## 依赖关系
//! - 被 `batch/renamer.rs`, `batch/flatten.rs`, `batch/extension.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配模式

use crate::error::{LifeToolError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
    /// 是否跳过根目录下一层的文件
    nested_only: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            patterns: Vec::new(),
            recursive: false,
            nested_only: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    LifeToolError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 只收集子目录中的文件（隐含递归）
    pub fn nested_only(mut self, nested_only: bool) -> Self {
        self.nested_only = nested_only;
        if nested_only {
            self.recursive = true;
        }
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let min_depth = if self.nested_only { 2 } else { 1 };
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(&self.root)
            .min_depth(min_depth)
            .max_depth(max_depth)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| LifeToolError::DirectoryReadError {
                path: e
                    .path()
                    .unwrap_or(&self.root)
                    .display()
                    .to_string(),
                source: e,
            })?;

            if entry.file_type().is_file() && self.matches_patterns(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// 检查文件是否匹配任一模式（无模式时全部匹配）
    fn matches_patterns(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    fn sample_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.mkv"), "").unwrap();
        fs::write(dir.path().join("a.mp4"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir_all(dir.path().join("extras/deep")).unwrap();
        fs::write(dir.path().join("extras/c.mp4"), "").unwrap();
        fs::write(dir.path().join("extras/deep/d.mp4"), "").unwrap();
        dir
    }

    #[test]
    fn test_collect_immediate_files_sorted() {
        let dir = sample_tree();
        let files = FileCollector::new(dir.path()).collect().unwrap();
        assert_eq!(names(&files), vec!["a.mp4", "b.mkv", "notes.txt"]);
    }

    #[test]
    fn test_collect_with_pattern() {
        let dir = sample_tree();
        let files = FileCollector::new(dir.path())
            .with_pattern("*.mp4, *.mkv")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.mp4", "b.mkv"]);
    }

    #[test]
    fn test_collect_recursive() {
        let dir = sample_tree();
        let files = FileCollector::new(dir.path())
            .recursive(true)
            .with_pattern("*.mp4")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_collect_nested_only() {
        let dir = sample_tree();
        let mut found = names(&FileCollector::new(dir.path()).nested_only(true).collect().unwrap());
        found.sort();
        assert_eq!(found, vec!["c.mp4", "d.mp4"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(".").with_pattern("[");
        assert!(matches!(result, Err(LifeToolError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_root_is_error() {
        let result = FileCollector::new("/nonexistent/path/that/does/not/exist").collect();
        assert!(matches!(result, Err(LifeToolError::DirectoryReadError { .. })));
    }
}
