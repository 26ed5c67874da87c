//! # ext 命令实现
//!
//! 批量修改文件扩展名。
//!
//! ## 依赖关系
//! - 使用 `cli/ext.rs` 定义的参数
//! - 使用 `batch/extension.rs`
//! - 使用 `utils/output.rs`

use crate::batch::change_extension;
use crate::cli::ext::ExtArgs;
use crate::error::Result;
use crate::utils::logging::LogProvider;
use crate::utils::output;

/// 执行 ext 命令
pub fn execute(args: ExtArgs, logs: &LogProvider) -> Result<()> {
    output::print_header(&format!("Changing extensions to '{}'", args.to));

    let summary = change_extension(
        &args.dir,
        &args.to,
        args.pattern.as_deref(),
        args.recursive,
        &logs.logger("ext"),
    )?;

    if summary.total() == 0 {
        output::print_warning(&format!("No matching files in {}", args.dir.display()));
        return Ok(());
    }

    output::print_outcome_table(&summary, "changed");
    output::print_failures(&summary);

    output::print_done(&format!(
        "{} file(s) changed, {} skipped",
        summary.renamed, summary.skipped
    ));

    Ok(())
}
