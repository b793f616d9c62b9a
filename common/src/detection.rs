//! 1スキャンサイクル分の検出結果

use std::collections::HashSet;

/// 重複を除いた検出食品（初出順）
///
/// stop-detection成功後に作られ、栄養情報の検索が終わったら破棄する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionResultSet {
    items: Vec<String>,
}

impl DetectionResultSet {
    /// ラベル列から生成（初出順を保ったまま重複を除去）
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let items = labels
            .into_iter()
            .map(Into::into)
            .filter(|label: &String| seen.insert(label.clone()))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for DetectionResultSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_preserves_first_occurrence() {
        let set = DetectionResultSet::from_labels(["apple", "banana", "apple"]);
        assert_eq!(set.items(), ["apple", "banana"]);
    }

    #[test]
    fn test_dedupe_keeps_order_of_first_seen() {
        let set = DetectionResultSet::from_labels(["banana", "apple", "banana", "orange", "apple"]);
        assert_eq!(set.items(), ["banana", "apple", "orange"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_dedupe_is_case_sensitive() {
        let set = DetectionResultSet::from_labels(["Apple", "apple"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty() {
        let set = DetectionResultSet::from_labels(Vec::<String>::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_into_iter() {
        let set = DetectionResultSet::from_labels(vec!["pizza".to_string(), "donut".to_string()]);
        let collected: Vec<String> = set.into_iter().collect();
        assert_eq!(collected, vec!["pizza", "donut"]);
    }
}
