use std::path::Path;

use tokio::fs;

use crate::error::ConfigError;
use crate::models::rule::{KeywordRule, RuleFile};

/// 解析 TOML 格式的规则内容
///
/// 没有关键词的规则永远不会命中，加载时直接丢弃
pub fn parse_rules(content: &str, source: &str) -> Result<Vec<KeywordRule>, ConfigError> {
    let file: RuleFile = toml::from_str(content).map_err(|e| ConfigError::RulesParse {
        path: source.to_string(),
        source: e,
    })?;

    let mut rules = Vec::with_capacity(file.rules.len());
    for rule in file.rules {
        if rule.keywords.iter().all(|k| k.trim().is_empty()) {
            tracing::warn!("规则 {} 没有关键词，已忽略", rule.name);
            continue;
        }
        rules.push(rule);
    }

    Ok(rules)
}

/// 从 TOML 文件加载关键词规则
pub async fn load_rules_file(path: &Path) -> Result<Vec<KeywordRule>, ConfigError> {
    let source_path = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::RulesRead {
            path: source_path.clone(),
            source: e,
        })?;

    let rules = parse_rules(&content, &source_path)?;
    tracing::info!("成功加载 {} 条关键词规则: {}", rules.len(), source_path);

    Ok(rules)
}
