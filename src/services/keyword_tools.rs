//! 关键词工具 - 业务能力层
//!
//! 只负责"按规则直接给出答案"能力

use tracing::debug;

use crate::models::KeywordRule;

/// 关键词工具集
///
/// 按顺序匹配，第一条命中的规则生效
#[derive(Debug, Clone, Default)]
pub struct KeywordTools {
    rules: Vec<KeywordRule>,
}

impl KeywordTools {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        // 统一转小写，避免每次匹配重复转换
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.keywords = rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                rule
            })
            .collect();
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 查找命中的规则
    pub fn lookup(&self, question: &str) -> Option<&KeywordRule> {
        let lowered = question.to_lowercase();
        let hit = self
            .rules
            .iter()
            .find(|rule| !rule.keywords.is_empty() && rule.keywords.iter().all(|k| lowered.contains(k.as_str())));

        if let Some(rule) = hit {
            debug!("命中关键词规则: {}", rule.name);
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, keywords: &[&str], answer: &str) -> KeywordRule {
        KeywordRule {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_requires_all_keywords() {
        let tools = KeywordTools::new(vec![rule(
            "sosa",
            &["Mercedes Sosa", "studio albums"],
            "3",
        )]);

        let hit = tools.lookup("How many STUDIO ALBUMS were published by mercedes sosa?");
        assert_eq!(hit.map(|r| r.answer.as_str()), Some("3"));
        assert!(tools.lookup("Who is Mercedes Sosa?").is_none());
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let tools = KeywordTools::new(vec![
            rule("specific", &["olympics", "1928"], "CUB"),
            rule("generic", &["olympics"], "unknown"),
        ]);

        let hit = tools.lookup("Which country had the least athletes at the 1928 Summer Olympics?");
        assert_eq!(hit.map(|r| r.name.as_str()), Some("specific"));
        assert_eq!(tools.len(), 2);
    }

    #[test]
    fn test_blank_keywords_never_match() {
        let tools = KeywordTools::new(vec![rule("blank", &["  "], "x")]);
        assert!(tools.lookup("anything at all").is_none());
    }
}
