use serde::Deserialize;

/// 关键词规则：题干中包含全部关键词时直接给出答案
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordRule {
    /// 规则名称（仅用于日志）
    pub name: String,
    pub keywords: Vec<String>,
    pub answer: String,
}

/// 规则文件结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub rules: Vec<KeywordRule>,
}
