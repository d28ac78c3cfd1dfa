//! 提示词构建与答案清洗

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Task;

static ANSWER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(final\s+answer|answer)\s*:\s*").expect("答案前缀正则无效")
});

/// 构建发送给模型的用户消息
pub fn build_prompt(task: &Task) -> String {
    let mut prompt = format!("Question: {}", task.prompt);

    if !task.metadata.is_empty() {
        let metadata = serde_json::to_string(&task.metadata).unwrap_or_default();
        prompt.push_str(&format!("\n\nMetadata: {}", metadata));
    }

    prompt
}

/// 清洗模型输出：去掉首尾空白以及 "Answer:" / "Final answer:" 前缀
pub fn normalize_answer(raw: &str) -> String {
    let trimmed = raw.trim();
    ANSWER_PREFIX.replace(trimmed, "").trim().to_string()
}
