//! # CSV 报告导出
//!
//! 把批处理中每个文件的结果写入 CSV 文件。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/runner.rs` 的 RunSummary
//! - 使用 `serde` + `csv` 写入

use crate::batch::{FileOutcome, RunSummary};
use crate::error::{LifeToolError, Result};

use serde::Serialize;
use std::path::Path;

/// 报告中的一行
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    pub status: &'static str,
    pub source: String,
    pub target: String,
    pub reason: String,
}

impl From<&FileOutcome> for ReportRow {
    fn from(outcome: &FileOutcome) -> Self {
        match outcome {
            FileOutcome::Renamed { source, target } => ReportRow {
                status: "renamed",
                source: source.display().to_string(),
                target: target.display().to_string(),
                reason: String::new(),
            },
            FileOutcome::Skipped { source, reason } => ReportRow {
                status: "skipped",
                source: source.display().to_string(),
                target: String::new(),
                reason: reason.to_string(),
            },
        }
    }
}

/// 导出结果为 CSV
pub fn to_csv(summary: &RunSummary, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for outcome in &summary.outcomes {
        wtr.serialize(ReportRow::from(outcome))?;
    }

    wtr.flush().map_err(|e| LifeToolError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::runner::SkipReason;
    use std::path::PathBuf;

    #[test]
    fn test_to_csv() {
        let mut summary = RunSummary::default();
        summary.merge(FileOutcome::Renamed {
            source: PathBuf::from("S01E01.mp4"),
            target: PathBuf::from("Show 第1季 第1集.mp4"),
        });
        summary.merge(FileOutcome::Skipped {
            source: PathBuf::from("poster.jpg"),
            reason: SkipReason::NotVideo,
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        to_csv(&summary, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "status,source,target,reason",
                "renamed,S01E01.mp4,Show 第1季 第1集.mp4,",
                "skipped,poster.jpg,,not a video file",
            ]
        );
    }
}
