//! 运行结果与评分报告

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::answer::AnswerRecord;

/// 评分后端返回的结果，所有字段都可能缺失
///
/// 后端已接受提交时，字段类型不符只当作缺失处理，不让整次提交失败
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub correct_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_attempted: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    })
}

fn lenient_u64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// 结果表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub task_id: String,
    pub question: String,
    pub submitted_answer: String,
}

/// 作答失败时结果表中显示的前缀
pub const AGENT_ERROR_PREFIX: &str = "AGENT ERROR: ";

/// 一次运行的汇总结果
#[derive(Debug, Clone, Default)]
pub struct SubmissionResult {
    /// 题目总数
    pub total: usize,
    /// 成功作答数
    pub succeeded: usize,
    /// 作答失败数
    pub failed: usize,
    /// 后端给出的分数（仅提交成功时存在）
    pub backend_score: Option<f64>,
    /// 作答失败的题目及错误信息
    pub per_task_errors: BTreeMap<String, String>,
    /// 按获取顺序排列的答案
    pub answers: Vec<AnswerRecord>,
    /// 完整评分报告
    pub report: Option<ScoreReport>,
    /// 提交失败时的错误信息
    pub submission_error: Option<String>,
    /// 是否发起了提交
    pub submitted: bool,
    /// 结果表
    pub results_log: Vec<ResultRow>,
    /// 运行日志文件，仅在成功写入后设置
    pub log_file: Option<String>,
}

impl SubmissionResult {
    /// 提交是否成功
    pub fn is_success(&self) -> bool {
        self.report.is_some()
    }

    /// 生成面向用户的状态文本
    pub fn status_message(&self, username: &str) -> String {
        if let Some(report) = &self.report {
            let score = report
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let correct = report
                .correct_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string());
            let attempted = report
                .total_attempted
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string());
            return format!(
                "提交成功！\n用户: {}\n总分: {}% ({}/{} 正确)\n消息: {}",
                report.username.as_deref().unwrap_or(username),
                score,
                correct,
                attempted,
                report.message.as_deref().unwrap_or("未收到消息。")
            );
        }

        if let Some(err) = &self.submission_error {
            return format!("提交失败: {}", err);
        }

        "智能体没有产生任何可提交的答案。".to_string()
    }
}
