//! # 季集识别器
//!
//! 按优先级依次尝试一组正则规则，从文件名（不含扩展名）中识别季数和集数，
//! 第一个命中的规则生效。
//!
//! ## 规则顺序
//! 1. `S01E01` / `s1e1`
//! 2. `第1季第1集`
//! 3. `1x01`
//! 4. `Season 1 Episode 1`
//! 5. 兜底：任意 2~3 位连续数字，视为第 1 季的集数
//!
//! 兜底规则会误判年份、分辨率等数字（如 `2019` 识别为第 201 集），
//! 这是已知行为，必须保持在最后执行。
//!
//! ## 依赖关系
//! - 被 `batch/renamer.rs` 调用
//! - 使用 `models/episode.rs`

use crate::models::SeasonEpisode;

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// 规则如何从捕获组计算季集
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    /// 第 1 组为季，第 2 组为集
    SeasonAndEpisode,
    /// 只有集数（第 1 组），季数取固定值
    EpisodeOnly { season: u32 },
}

/// 一条识别规则
#[derive(Debug)]
pub struct EpisodeRule {
    /// 规则名（用于日志）
    pub name: &'static str,
    pattern: Regex,
    capture: Capture,
}

impl EpisodeRule {
    fn new(name: &'static str, pattern: &str, capture: Capture) -> Self {
        EpisodeRule {
            name,
            pattern: Regex::new(pattern).expect("episode rule regex should compile"),
            capture,
        }
    }

    /// 在 stem 中搜索本规则，命中则返回季集
    pub fn apply(&self, stem: &str) -> Option<SeasonEpisode> {
        let caps = self.pattern.captures(stem)?;
        match self.capture {
            Capture::SeasonAndEpisode => Some(SeasonEpisode::new(
                group_number(&caps, 1)?,
                group_number(&caps, 2)?,
            )),
            Capture::EpisodeOnly { season } => {
                Some(SeasonEpisode::new(season, group_number(&caps, 1)?))
            }
        }
    }
}

fn group_number(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// 全部规则，按优先级排列
pub static EPISODE_RULES: LazyLock<Vec<EpisodeRule>> = LazyLock::new(|| {
    vec![
        EpisodeRule::new(
            "s_e",
            r"(?i)S([0-9]{1,2})E([0-9]{1,3})",
            Capture::SeasonAndEpisode,
        ),
        EpisodeRule::new(
            "chinese",
            r"第([0-9]{1,2})季第([0-9]{1,3})集",
            Capture::SeasonAndEpisode,
        ),
        EpisodeRule::new(
            "n_x_n",
            r"(?i)([0-9]{1,2})x([0-9]{1,3})",
            Capture::SeasonAndEpisode,
        ),
        EpisodeRule::new(
            "season_episode",
            r"(?i)Season\s*([0-9]{1,2})\s*Episode\s*([0-9]{1,3})",
            Capture::SeasonAndEpisode,
        ),
        // 必须最后
        EpisodeRule::new(
            "bare_number",
            r"([0-9]{2,3})",
            Capture::EpisodeOnly { season: 1 },
        ),
    ]
});

/// 识别季集，同时返回命中的规则名
pub fn match_rule(stem: &str) -> Option<(&'static str, SeasonEpisode)> {
    EPISODE_RULES
        .iter()
        .find_map(|rule| rule.apply(stem).map(|se| (rule.name, se)))
}

/// 从文件名（不含扩展名）中识别季数和集数
pub fn extract_season_episode(stem: &str) -> Option<SeasonEpisode> {
    match_rule(stem).map(|(_, se)| se)
}
