//! # 季集数据模型
//!
//! 文件名识别结果与重命名计划。
//!
//! ## 依赖关系
//! - 被 `episode/` 和 `batch/renamer.rs` 使用

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// 从文件名中识别出的季数和集数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeasonEpisode {
    pub season: u32,
    pub episode: u32,
}

impl SeasonEpisode {
    pub fn new(season: u32, episode: u32) -> Self {
        SeasonEpisode { season, episode }
    }
}

impl fmt::Display for SeasonEpisode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}

/// 单个文件的重命名计划，仅在一次运行内有效
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// 原文件路径
    pub source: PathBuf,
    /// 目标文件路径（与原文件同目录）
    pub target: PathBuf,
    /// 识别出的季集
    pub season_episode: SeasonEpisode,
}

impl RenamePlan {
    /// 目标是否就是原文件本身
    pub fn is_noop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_episode_display() {
        assert_eq!(SeasonEpisode::new(1, 2).to_string(), "S01E02");
        assert_eq!(SeasonEpisode::new(2, 105).to_string(), "S02E105");
    }

    #[test]
    fn test_rename_plan_noop() {
        let plan = RenamePlan {
            source: PathBuf::from("/tv/Show 第1季 第1集.mp4"),
            target: PathBuf::from("/tv/Show 第1季 第1集.mp4"),
            season_episode: SeasonEpisode::new(1, 1),
        };
        assert!(plan.is_noop());
    }
}
