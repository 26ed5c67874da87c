//! # rename 命令实现
//!
//! 将剧集文件夹中的视频文件重命名为 `<文件夹名> 第N季 第M集.<扩展名>`。
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/renamer.rs`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::batch::SeriesRenamer;
use crate::cli::rename::RenameArgs;
use crate::error::Result;
use crate::utils::logging::LogProvider;
use crate::utils::{output, report};

/// 执行 rename 命令
pub fn execute(args: RenameArgs, logs: &LogProvider) -> Result<()> {
    output::print_header(&format!("Renaming episodes in {}", args.dir.display()));

    if args.dry_run {
        output::print_warning("Dry run: no files will be renamed");
    }

    let summary = SeriesRenamer::new(logs.logger("renamer"))
        .dry_run(args.dry_run)
        .run(&args.dir)?;

    let label = if args.dry_run { "planned" } else { "renamed" };
    output::print_outcome_table(&summary, label);

    if let Some(path) = &args.report {
        report::to_csv(&summary, path)?;
        output::print_success(&format!("Report written to {}", path.display()));
    }

    output::print_failures(&summary);

    if summary.renamed == 0 {
        output::print_warning(&format!(
            "No files {}, {} skipped",
            label, summary.skipped
        ));
    } else {
        output::print_done(&format!(
            "{} file(s) {}, {} skipped",
            summary.renamed, label, summary.skipped
        ));
    }

    Ok(())
}
