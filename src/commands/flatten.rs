//! # flatten 命令实现
//!
//! 把子目录中的文件移动到目标目录，并清理空目录。
//!
//! ## 依赖关系
//! - 使用 `cli/flatten.rs` 定义的参数
//! - 使用 `batch/flatten.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{flatten_directory, FlattenOptions};
use crate::cli::flatten::FlattenArgs;
use crate::error::Result;
use crate::utils::logging::LogProvider;
use crate::utils::output;

/// 执行 flatten 命令
pub fn execute(args: FlattenArgs, logs: &LogProvider) -> Result<()> {
    output::print_header(&format!("Flattening {}", args.dir.display()));

    let options = FlattenOptions {
        keep_empty_dirs: args.keep_empty_dirs,
    };
    let report = flatten_directory(&args.dir, options, &logs.logger("flatten"))?;

    if report.summary.total() == 0 {
        output::print_warning("No files found in subdirectories");
        return Ok(());
    }

    output::print_outcome_table(&report.summary, "moved");
    output::print_failures(&report.summary);

    if !report.removed_dirs.is_empty() {
        output::print_info(&format!(
            "Removed {} empty director{}",
            report.removed_dirs.len(),
            if report.removed_dirs.len() == 1 { "y" } else { "ies" }
        ));
    }

    output::print_done(&format!(
        "{} file(s) moved, {} skipped",
        report.summary.renamed, report.summary.skipped
    ));

    Ok(())
}
