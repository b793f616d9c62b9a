//! メッセージログ（追記専用）

use crate::types::ChatEntry;

/// 会話のタイムライン
///
/// 追記順がそのまま表示順。既存エントリの削除・書き換えは行わない
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageLog {
    entries: Vec<ChatEntry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 末尾に追加
    pub fn append(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// 全件（読み取り専用）
    pub fn all(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Origin;

    #[test]
    fn test_new_log_is_empty() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut log = MessageLog::new();
        log.append(ChatEntry::user("apple"));
        log.append(ChatEntry::assistant("Searching..."));
        log.append(ChatEntry::assistant("(FoodNutrition) 95 kcal"));

        let texts: Vec<&str> = log.iter().filter_map(|e| e.content().as_text()).collect();
        assert_eq!(texts, vec!["apple", "Searching...", "(FoodNutrition) 95 kcal"]);
        assert_eq!(log.all()[0].origin(), Origin::User);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut log = MessageLog::new();
        log.append(ChatEntry::assistant("same"));
        log.append(ChatEntry::assistant("same"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.all()[0], log.all()[1]);
    }
}
