//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和所有 `commands/` 模块使用
//! - 使用 `colored`, `tabled` crate

use crate::batch::runner::display_name;
use crate::batch::{FileOutcome, RunSummary};

use colored::Colorize;
use tabled::{Table, Tabled};

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "New name")]
    new_name: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl OutcomeRow {
    fn new(outcome: &FileOutcome, renamed_label: &str) -> Self {
        match outcome {
            FileOutcome::Renamed { target, .. } => OutcomeRow {
                status: renamed_label.to_string(),
                file: display_name(outcome.source()),
                new_name: display_name(target),
                note: String::new(),
            },
            FileOutcome::Skipped { reason, .. } => OutcomeRow {
                status: "skipped".to_string(),
                file: display_name(outcome.source()),
                new_name: String::new(),
                note: reason.to_string(),
            },
        }
    }
}

/// 以表格打印每个文件的处理结果
pub fn print_outcome_table(summary: &RunSummary, renamed_label: &str) {
    if summary.outcomes.is_empty() {
        return;
    }

    let rows: Vec<OutcomeRow> = summary
        .outcomes
        .iter()
        .map(|o| OutcomeRow::new(o, renamed_label))
        .collect();
    println!("{}", Table::new(rows));
}

/// 打印失败文件列表
pub fn print_failures(summary: &RunSummary) {
    for (path, err) in summary.failures() {
        print_error(&format!("{}: {}", path.display(), err));
    }
}
