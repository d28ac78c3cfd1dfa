use serde::{Deserialize, Serialize};

/// 单道题目的答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub task_id: String,
    #[serde(rename = "submitted_answer")]
    pub answer_text: String,
}

impl AnswerRecord {
    pub fn new(task_id: impl Into<String>, answer_text: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            answer_text: answer_text.into(),
        }
    }
}

/// 提交身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    pub username: String,
    /// 智能体代码仓库链接
    pub agent_code_url: String,
}

/// 批量提交的请求体
#[derive(Debug, Clone, Serialize)]
pub struct Submission<'a> {
    pub username: &'a str,
    pub agent_code: &'a str,
    pub answers: &'a [AnswerRecord],
}

impl<'a> Submission<'a> {
    pub fn new(identity: &'a AgentIdentity, answers: &'a [AnswerRecord]) -> Self {
        Self {
            username: identity.username.trim(),
            agent_code: &identity.agent_code_url,
            answers,
        }
    }
}
