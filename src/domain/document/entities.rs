//! Document Context - Entities

use serde::{Deserialize, Serialize};

/// 章节 - 只通过在文档中的位置被引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 章节编号（1 基）
    number: u32,
    /// 章节标题
    title: String,
}

impl Chapter {
    /// 空白标题回退为 `Chapter {number}`
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        let title = title.into();
        let title = match title.trim() {
            "" => format!("Chapter {}", number),
            trimmed => trimmed.to_string(),
        };
        Self { number, title }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_falls_back_to_number() {
        assert_eq!(Chapter::new(3, "  ").title(), "Chapter 3");
        assert_eq!(Chapter::new(1, " 序章 ").title(), "序章");
    }
}
