//! Reading Context - 章节定位状态机
//!
//! 纯状态转移：调用方提供当前索引与章节总数，得到新的位置。
//! 这里不持有任何共享状态，持久化由外部的 store 负责。

use serde::Serialize;

use super::{ChapterCount, Direction, ReadingError};

/// 进度视图 - 供展示层渲染进度条与 `n/total` 标签
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressView {
    /// 当前章节序号（1 基）
    pub numerator: u32,
    /// 章节总数
    pub denominator: u32,
    /// 百分比，范围 (0, 100]
    pub percent: f64,
}

impl ProgressView {
    /// 形如 `3/12` 的步进标签
    pub fn label(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }
}

/// 边界状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// 单章节文档：既是第一章也是最后一章
    Single,
    AtFirst,
    AtLast,
    InBetween,
}

/// 一次导航的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// 位置发生了单步移动
    Moved {
        from: ChapterPosition,
        to: ChapterPosition,
    },
    /// 已在边界，位置不变
    Blocked { at: ChapterPosition },
}

impl Navigation {
    /// 导航后的位置（无论是否移动）
    pub fn position(&self) -> ChapterPosition {
        match self {
            Navigation::Moved { to, .. } => *to,
            Navigation::Blocked { at } => *at,
        }
    }

    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// 章节位置
///
/// 不变量:
/// - `0 <= current < count`
/// - 只能通过边界守卫后的 ±1 单步转移改变
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterPosition {
    current: u32,
    count: ChapterCount,
}

impl ChapterPosition {
    /// 校验索引后构造
    pub fn new(current: u32, count: ChapterCount) -> Result<Self, ReadingError> {
        if !count.contains(current) {
            return Err(ReadingError::IndexOutOfRange {
                index: current,
                count,
            });
        }
        Ok(Self { current, count })
    }

    /// 将越界索引收拢到最后一章
    pub fn clamped(current: u32, count: ChapterCount) -> Self {
        Self {
            current: current.min(count.last_index()),
            count,
        }
    }

    pub fn current_index(&self) -> u32 {
        self.current
    }

    pub fn chapter_count(&self) -> ChapterCount {
        self.count
    }

    pub fn progress(&self) -> ProgressView {
        let numerator = self.current + 1;
        let denominator = self.count.get();
        // 先乘后除：最后一章时结果精确为 100
        let percent = f64::from(numerator) * 100.0 / f64::from(denominator);
        ProgressView {
            numerator,
            denominator,
            percent,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current < self.count.last_index()
    }

    pub fn boundary(&self) -> Boundary {
        match (self.can_go_previous(), self.can_go_next()) {
            (false, false) => Boundary::Single,
            (false, true) => Boundary::AtFirst,
            (true, false) => Boundary::AtLast,
            (true, true) => Boundary::InBetween,
        }
    }

    pub fn go_to_previous(self) -> Navigation {
        if !self.can_go_previous() {
            return Navigation::Blocked { at: self };
        }
        Navigation::Moved {
            from: self,
            to: Self {
                current: self.current - 1,
                ..self
            },
        }
    }

    pub fn go_to_next(self) -> Navigation {
        if !self.can_go_next() {
            return Navigation::Blocked { at: self };
        }
        Navigation::Moved {
            from: self,
            to: Self {
                current: self.current + 1,
                ..self
            },
        }
    }

    pub fn step(self, direction: Direction) -> Navigation {
        match direction {
            Direction::Previous => self.go_to_previous(),
            Direction::Next => self.go_to_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(current: u32, count: u32) -> ChapterPosition {
        ChapterPosition::new(current, ChapterCount::new(count)).unwrap()
    }

    #[test]
    fn test_first_chapter_of_five() {
        let pos = position(0, 5);
        assert!(!pos.can_go_previous());
        assert!(pos.can_go_next());
        assert_eq!(pos.boundary(), Boundary::AtFirst);
        assert_eq!(
            pos.progress(),
            ProgressView {
                numerator: 1,
                denominator: 5,
                percent: 20.0
            }
        );
    }

    #[test]
    fn test_last_chapter_of_five() {
        let pos = position(4, 5);
        assert!(pos.can_go_previous());
        assert!(!pos.can_go_next());
        assert_eq!(pos.boundary(), Boundary::AtLast);
        assert_eq!(
            pos.progress(),
            ProgressView {
                numerator: 5,
                denominator: 5,
                percent: 100.0
            }
        );
    }

    #[test]
    fn test_absent_document_is_single_chapter() {
        let pos = ChapterPosition::new(0, ChapterCount::from_len(None)).unwrap();
        assert!(!pos.can_go_previous());
        assert!(!pos.can_go_next());
        assert_eq!(pos.boundary(), Boundary::Single);
        assert_eq!(pos.progress().label(), "1/1");
        assert_eq!(pos.progress().percent, 100.0);
    }

    #[test]
    fn test_next_at_last_chapter_is_blocked() {
        let pos = position(4, 5);
        let before = pos.progress();

        let nav = pos.go_to_next();
        assert!(!nav.moved());
        assert_eq!(nav.position(), pos);
        assert_eq!(nav.position().progress(), before);
    }

    #[test]
    fn test_previous_at_first_chapter_is_idempotent() {
        let pos = position(0, 3);
        let once = pos.go_to_previous().position();
        let twice = once.go_to_previous().position();
        assert_eq!(once, pos);
        assert_eq!(twice, pos);
    }

    #[test]
    fn test_next_then_previous_returns_to_origin() {
        for count in 2..8 {
            for current in 0..count - 1 {
                let pos = position(current, count);
                let nav = pos.go_to_next();
                assert!(nav.moved());
                let back = nav.position().go_to_previous();
                assert!(back.moved());
                assert_eq!(back.position(), pos);
            }
        }
    }

    #[test]
    fn test_guards_and_percent_hold_for_all_valid_states() {
        for count in 1..20 {
            for current in 0..count {
                let pos = position(current, count);
                let progress = pos.progress();
                assert!(progress.percent > 0.0 && progress.percent <= 100.0);
                assert_eq!(progress.percent == 100.0, current == count - 1);
                assert_eq!(!pos.can_go_previous(), current == 0);
                assert_eq!(!pos.can_go_next(), current == count - 1);
            }
        }
    }

    #[test]
    fn test_moved_carries_both_ends() {
        let pos = position(1, 3);
        match pos.step(Direction::Next) {
            Navigation::Moved { from, to } => {
                assert_eq!(from.current_index(), 1);
                assert_eq!(to.current_index(), 2);
                assert_eq!(to.chapter_count(), pos.chapter_count());
            }
            Navigation::Blocked { .. } => panic!("expected a move"),
        }
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let err = ChapterPosition::new(5, ChapterCount::new(5)).unwrap_err();
        assert_eq!(
            err,
            ReadingError::IndexOutOfRange {
                index: 5,
                count: ChapterCount::new(5)
            }
        );
    }

    #[test]
    fn test_clamped_pulls_back_to_last_chapter() {
        let pos = ChapterPosition::clamped(9, ChapterCount::new(3));
        assert_eq!(pos.current_index(), 2);
        assert_eq!(ChapterPosition::clamped(1, ChapterCount::new(3)).current_index(), 1);
    }
}
