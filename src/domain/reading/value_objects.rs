//! Reading Context - Value Objects

use serde::{Deserialize, Serialize};

/// 章节总数
///
/// 不变量:
/// - 总是 >= 1；缺失或空的章节列表按单章节文档处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ChapterCount(u32);

impl ChapterCount {
    /// 单章节文档
    pub const SINGLE: Self = Self(1);

    /// 从原始计数构造，0 归一化为 1
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    /// 从章节序列长度构造
    ///
    /// `None`（章节数据缺失）与 `Some(0)` 都归一化为 1，
    /// 超出 `u32` 的长度饱和到 `u32::MAX`。
    pub fn from_len(len: Option<usize>) -> Self {
        match len {
            Some(len) => Self::new(u32::try_from(len).unwrap_or(u32::MAX)),
            None => Self::SINGLE,
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// 最后一章的零基索引
    pub fn last_index(&self) -> u32 {
        self.0 - 1
    }

    pub fn contains(&self, index: u32) -> bool {
        index < self.0
    }
}

impl Default for ChapterCount {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl From<u32> for ChapterCount {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

impl From<ChapterCount> for u32 {
    fn from(count: ChapterCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for ChapterCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 导航方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_normalizes_to_one() {
        assert_eq!(ChapterCount::new(0).get(), 1);
        assert_eq!(ChapterCount::from(0).get(), 1);
    }

    #[test]
    fn test_absent_or_empty_chapters_count_as_one() {
        assert_eq!(ChapterCount::from_len(None), ChapterCount::SINGLE);
        assert_eq!(ChapterCount::from_len(Some(0)), ChapterCount::SINGLE);
        assert_eq!(ChapterCount::from_len(Some(7)).get(), 7);
    }

    #[test]
    fn test_last_index_and_contains() {
        let count = ChapterCount::new(5);
        assert_eq!(count.last_index(), 4);
        assert!(count.contains(4));
        assert!(!count.contains(5));
        assert_eq!(ChapterCount::SINGLE.last_index(), 0);
    }

    #[test]
    fn test_deserialize_zero_is_normalized() {
        let count: ChapterCount = serde_json::from_str("0").unwrap();
        assert_eq!(count, ChapterCount::SINGLE);
        assert_eq!(serde_json::to_string(&ChapterCount::new(3)).unwrap(), "3");
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(serde_json::to_string(&Direction::Next).unwrap(), "\"next\"");
        let dir: Direction = serde_json::from_str("\"previous\"").unwrap();
        assert_eq!(dir, Direction::Previous);
    }
}
