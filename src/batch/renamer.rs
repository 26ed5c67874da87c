//! # 剧集批量重命名
//!
//! 将目录下的剧集文件重命名为 `<目录名> 第<季>季 第<集>集<扩展名>`。
//!
//! ## 处理流程（每个文件）
//! 1. 非视频扩展名 → 跳过
//! 2. 已是规范化文件名 → 跳过（重复运行不会再次改名）
//! 3. 无法识别季集 → 跳过
//! 4. 目标文件已存在 → 跳过，绝不覆盖
//! 5. 重命名；I/O 失败记录错误并跳过，继续处理剩余文件
//!
//! 已完成的重命名不会因后续文件失败而回滚。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `episode/` 识别季集，`batch/collector.rs`, `batch/runner.rs` 遍历
//! - 使用 `utils/logging.rs` 记录每个文件的处理结果

use crate::batch::collector::FileCollector;
use crate::batch::runner::{display_name, BatchRunner, FileOutcome, RunSummary, SkipReason};
use crate::episode::{self, naming};
use crate::error::{LifeToolError, Result};
use crate::models::RenamePlan;
use crate::utils::logging::Logger;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// 剧集重命名器
#[derive(Debug)]
pub struct SeriesRenamer {
    logger: Logger,
    dry_run: bool,
}

impl SeriesRenamer {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            dry_run: false,
        }
    }

    /// 只计算结果，不修改文件系统
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 重命名目录下（不递归）的剧集文件
    ///
    /// 目录不存在、不是目录或没有任何文件时返回错误且不做任何修改；
    /// 否则即使所有文件都被跳过也返回 `Ok`。
    pub fn run(&self, directory: &Path) -> Result<RunSummary> {
        let series = self.validate(directory)?;
        self.logger
            .info(&format!("Processing series '{}' in {}", series, directory.display()));

        let files = FileCollector::new(directory).collect()?;
        if files.is_empty() {
            self.logger
                .error(&format!("No files found in {}", directory.display()));
            return Err(LifeToolError::EmptyDirectory {
                path: directory.display().to_string(),
            });
        }

        let mut planned = HashSet::new();
        let summary = BatchRunner::new().run(files, |path| {
            self.process_file(directory, &series, path, &mut planned)
        });

        self.logger.info(&format!(
            "Finished '{}': {} renamed, {} skipped",
            series, summary.renamed, summary.skipped
        ));

        Ok(summary)
    }

    /// 检查目录并返回剧名（目录名）
    fn validate(&self, directory: &Path) -> Result<String> {
        if !directory.exists() {
            self.logger
                .error(&format!("Directory not found: {}", directory.display()));
            return Err(LifeToolError::DirectoryNotFound {
                path: directory.display().to_string(),
            });
        }
        if !directory.is_dir() {
            self.logger
                .error(&format!("Not a directory: {}", directory.display()));
            return Err(LifeToolError::NotADirectory {
                path: directory.display().to_string(),
            });
        }

        // 取用户给出路径的最后一段；`.`、`..` 没有目录名时才解析真实路径
        let resolved = match directory.file_name() {
            Some(_) => directory.to_path_buf(),
            None => fs::canonicalize(directory).unwrap_or_else(|_| directory.to_path_buf()),
        };
        resolved
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                self.logger.error(&format!(
                    "Cannot derive a series name from {}",
                    directory.display()
                ));
                LifeToolError::InvalidArgument(format!(
                    "Cannot derive a series name from '{}'",
                    directory.display()
                ))
            })
    }

    /// 为单个文件生成重命名计划，不满足条件时返回跳过原因
    fn plan(
        &self,
        directory: &Path,
        series: &str,
        path: &Path,
    ) -> std::result::Result<RenamePlan, SkipReason> {
        let name = display_name(path);

        let Some((stem, ext)) = naming::split_file_name(path) else {
            self.logger
                .warn(&format!("Skipping file with non UTF-8 name: {}", name));
            return Err(SkipReason::Unrecognized);
        };

        if !naming::is_video_extension(&ext) {
            self.logger.info(&format!("Skipping non-video file: {}", name));
            return Err(SkipReason::NotVideo);
        }

        if naming::is_canonical_stem(series, stem) {
            self.logger.warn(&format!("Already named, skipping: {}", name));
            return Err(SkipReason::AlreadyCanonical);
        }

        let Some(season_episode) = episode::extract_season_episode(stem) else {
            self.logger.warn(&format!(
                "Cannot recognize season/episode, skipping: {}",
                name
            ));
            return Err(SkipReason::Unrecognized);
        };
        self.logger
            .debug(&format!("Parsed '{}' as {}", name, season_episode));

        Ok(RenamePlan {
            source: path.to_path_buf(),
            target: directory.join(naming::canonical_name(series, season_episode, &ext)),
            season_episode,
        })
    }

    fn process_file(
        &self,
        directory: &Path,
        series: &str,
        path: &Path,
        planned: &mut HashSet<PathBuf>,
    ) -> FileOutcome {
        let plan = match self.plan(directory, series, path) {
            Ok(plan) => plan,
            Err(reason) => {
                return FileOutcome::Skipped {
                    source: path.to_path_buf(),
                    reason,
                }
            }
        };

        let name = display_name(&plan.source);
        let new_name = display_name(&plan.target);

        let taken = (plan.target.exists() && !plan.is_noop()) || planned.contains(&plan.target);
        if taken {
            self.logger
                .warn(&format!("Target already exists, skipping: {}", new_name));
            return FileOutcome::Skipped {
                source: plan.source,
                reason: SkipReason::Collision(plan.target),
            };
        }

        if self.dry_run {
            self.logger
                .info(&format!(
                    "Would rename [{}]: {} -> {}",
                    plan.season_episode, name, new_name
                ));
            planned.insert(plan.target.clone());
            return FileOutcome::Renamed {
                source: plan.source,
                target: plan.target,
            };
        }

        match fs::rename(&plan.source, &plan.target) {
            Ok(()) => {
                self.logger.info(&format!(
                    "Renamed [{}]: {} -> {}",
                    plan.season_episode, name, new_name
                ));
                FileOutcome::Renamed {
                    source: plan.source,
                    target: plan.target,
                }
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to rename {}: {}", name, e));
                FileOutcome::Skipped {
                    source: plan.source,
                    reason: SkipReason::Io(e.to_string()),
                }
            }
        }
    }
}
