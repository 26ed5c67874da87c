//! # 文件命名规则
//!
//! 文件名拆分（stem + 扩展名）、视频扩展名判断，以及规范化目标文件名
//! `<剧名> 第<季>季 第<集>集<扩展名>` 的生成与识别。
//!
//! ## 依赖关系
//! - 被 `batch/renamer.rs`, `batch/extension.rs` 调用
//! - 使用 `models/episode.rs`

use crate::models::SeasonEpisode;

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// 识别为视频的扩展名（小写，不含点）
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "ts", "rmvb",
];

static CANONICAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ 第[0-9]+季 第[0-9]+集$").expect("canonical suffix regex should compile")
});

/// 拆分文件名为 (stem, 扩展名)
///
/// 扩展名保留原大小写并带前导点，没有扩展名时为空串。
/// 以点开头且没有其他点的文件（如 `.hidden`）整体视为 stem。
/// 非 UTF-8 文件名返回 `None`。
pub fn split_file_name(path: &Path) -> Option<(&str, String)> {
    let stem = path.file_stem()?.to_str()?;
    let ext = match path.extension() {
        Some(ext) => format!(".{}", ext.to_str()?),
        None => String::new(),
    };
    Some((stem, ext))
}

/// 扩展名（可带点，大小写不敏感）是否属于视频格式
pub fn is_video_extension(ext: &str) -> bool {
    let ext = ext.trim_start_matches('.').to_lowercase();
    VIDEO_EXTENSIONS.contains(&ext.as_str())
}

/// 生成规范化文件名
pub fn canonical_name(series: &str, se: SeasonEpisode, ext: &str) -> String {
    format!("{} 第{}季 第{}集{}", series, se.season, se.episode, ext)
}

/// stem 是否已经是该剧的规范化文件名
pub fn is_canonical_stem(series: &str, stem: &str) -> bool {
    stem.strip_prefix(series)
        .is_some_and(|rest| CANONICAL_SUFFIX.is_match(rest))
}
