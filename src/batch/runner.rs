//! # 批量执行器
//!
//! 顺序执行批量处理任务并汇总每个文件的处理结果。
//!
//! ## 功能
//! - 单线程顺序遍历文件列表
//! - 成功/跳过计数，保留每个文件的结果
//! - I/O 失败按跳过计数，不中断批处理
//!
//! ## 依赖关系
//! - 被 `batch/renamer.rs`, `batch/flatten.rs`, `batch/extension.rs` 调用
//! - 结果被 `commands/` 与 `utils/report.rs` 使用

use std::fmt;
use std::path::{Path, PathBuf};

/// 跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 非视频文件
    NotVideo,
    /// 无法识别季集信息
    Unrecognized,
    /// 已经是规范化文件名
    AlreadyCanonical,
    /// 目标文件已存在
    Collision(PathBuf),
    /// 已经是目标扩展名
    Unchanged,
    /// 文件系统操作失败
    Io(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotVideo => write!(f, "not a video file"),
            SkipReason::Unrecognized => write!(f, "season/episode not recognized"),
            SkipReason::AlreadyCanonical => write!(f, "already named"),
            SkipReason::Collision(target) => write!(f, "target exists: {}", display_name(target)),
            SkipReason::Unchanged => write!(f, "extension unchanged"),
            SkipReason::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// 已重命名 / 移动（dry run 时为计划）
    Renamed { source: PathBuf, target: PathBuf },
    /// 跳过
    Skipped { source: PathBuf, reason: SkipReason },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Renamed { source, .. } | FileOutcome::Skipped { source, .. } => source,
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 成功数量
    pub renamed: usize,
    /// 跳过数量（含 I/O 失败）
    pub skipped: usize,
    /// 每个文件的结果，按处理顺序
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: FileOutcome) {
        match &outcome {
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.renamed + self.skipped
    }

    /// 因 I/O 失败而跳过的文件
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Skipped {
                source,
                reason: SkipReason::Io(msg),
            } => Some((source.as_path(), msg.as_str())),
            _ => None,
        })
    }
}

/// 批量执行器
#[derive(Debug, Default)]
pub struct BatchRunner;

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        BatchRunner
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: Vec<PathBuf>, mut processor: F) -> RunSummary
    where
        F: FnMut(&Path) -> FileOutcome,
    {
        let mut summary = RunSummary::default();
        for file in &files {
            summary.merge(processor(file.as_path()));
        }
        summary
    }
}

/// 路径的文件名部分，用于输出
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_counts_outcomes() {
        let files = vec![
            PathBuf::from("a.mp4"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.mp4"),
        ];

        let summary = BatchRunner::new().run(files, |path| {
            if path.extension().is_some_and(|e| e == "mp4") {
                FileOutcome::Renamed {
                    source: path.to_path_buf(),
                    target: path.with_extension("mkv"),
                }
            } else {
                FileOutcome::Skipped {
                    source: path.to_path_buf(),
                    reason: SkipReason::NotVideo,
                }
            }
        });

        assert_eq!(summary.renamed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.outcomes[1].source(), Path::new("b.txt"));
    }

    #[test]
    fn test_io_failures_count_as_skipped() {
        let mut summary = RunSummary::default();
        summary.merge(FileOutcome::Skipped {
            source: PathBuf::from("locked.mkv"),
            reason: SkipReason::Io("permission denied".to_string()),
        });
        summary.merge(FileOutcome::Skipped {
            source: PathBuf::from("movie.mkv"),
            reason: SkipReason::Unrecognized,
        });

        assert_eq!(summary.skipped, 2);
        let failures: Vec<_> = summary.failures().collect();
        assert_eq!(failures, vec![(Path::new("locked.mkv"), "permission denied")]);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::Collision(PathBuf::from("/tv/Show 第1季 第1集.mp4")).to_string(),
            "target exists: Show 第1季 第1集.mp4"
        );
        assert_eq!(SkipReason::NotVideo.to_string(), "not a video file");
    }
}
