//! 评分后端 API 客户端
//!
//! 封装题目获取（GET /questions）与答案提交（POST /submit）

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use super::{QuestionSource, SubmissionClient};
use crate::config::Config;
use crate::error::{FetchError, SubmissionError};
use crate::models::{parse_tasks, ScoreReport, Submission, Task};
use crate::utils::retry::{with_retry, RetryPolicy};

/// 错误详情的最大长度（字符）
const MAX_ERROR_DETAIL_CHARS: usize = 500;

/// 评分后端客户端
#[derive(Clone)]
pub struct BenchmarkClient {
    http: reqwest::Client,
    base_url: String,
    fetch_timeout: Duration,
    submit_timeout: Duration,
    retry: RetryPolicy,
}

impl BenchmarkClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            fetch_timeout: config.fetch_timeout,
            submit_timeout: config.submit_timeout,
            retry: config.retry,
        }
    }

    pub fn questions_url(&self) -> String {
        format!("{}/questions", self.base_url)
    }

    pub fn submit_url(&self) -> String {
        format!("{}/submit", self.base_url)
    }

    async fn fetch_once(&self) -> Result<Vec<Task>, FetchError> {
        let url = self.questions_url();
        info!("[HTTP] 正在获取题目: {}", url);

        let response = self
            .http
            .get(&url)
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                endpoint: url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&url, e))?;
        let payload: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        let tasks = parse_tasks(payload)?;
        info!("[HTTP] 收到 {} 道题目", tasks.len());
        Ok(tasks)
    }

    async fn submit_once(&self, submission: &Submission<'_>) -> Result<ScoreReport, SubmissionError> {
        let url = self.submit_url();
        info!(
            "[HTTP] 正在提交 {} 个答案到: {}",
            submission.answers.len(),
            url
        );

        let response = self
            .http
            .post(&url)
            .timeout(self.submit_timeout)
            .json(submission)
            .send()
            .await
            .map_err(SubmissionError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(SubmissionError::from_reqwest)?;

        if !status.is_success() {
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                detail: extract_error_detail(&body),
            });
        }

        debug!("提交响应: {}", body);
        let report: ScoreReport =
            serde_json::from_str(&body).map_err(|e| SubmissionError::Decode(e.to_string()))?;
        info!("[HTTP] 提交成功");
        Ok(report)
    }
}

#[async_trait]
impl QuestionSource for BenchmarkClient {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError> {
        with_retry(&self.retry, "获取题目", || self.fetch_once()).await
    }
}

#[async_trait]
impl SubmissionClient for BenchmarkClient {
    async fn submit(&self, submission: &Submission<'_>) -> Result<ScoreReport, SubmissionError> {
        with_retry(&self.retry, "提交答案", || self.submit_once(submission)).await
    }
}

/// 从错误响应中提取详情
///
/// JSON 响应优先使用 `detail` 字段，没有时返回完整原文；
/// 非 JSON 响应截断到 500 个字符
pub fn extract_error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) if !detail.is_null() => detail.to_string(),
            _ => body.to_string(),
        },
        Err(_) => body.chars().take(MAX_ERROR_DETAIL_CHARS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_from_json() {
        assert_eq!(
            extract_error_detail(r#"{"detail": "Invalid username"}"#),
            "Invalid username"
        );
        assert_eq!(
            extract_error_detail(r#"{"detail": [{"loc": ["body"]}]}"#),
            r#"[{"loc":["body"]}]"#
        );
    }

    #[test]
    fn test_extract_detail_truncates_only_plain_text() {
        let body = "x".repeat(800);
        assert_eq!(extract_error_detail(&body).len(), 500);
        assert_eq!(extract_error_detail(r#"{"error": "nope"}"#), r#"{"error": "nope"}"#);

        let long_json = format!(r#"{{"error": "{}"}}"#, "y".repeat(800));
        assert_eq!(extract_error_detail(&long_json), long_json);
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let config = Config {
            api_url: "http://localhost:7860/".to_string(),
            ..Config::default()
        };
        let client = BenchmarkClient::new(&config);
        assert_eq!(client.questions_url(), "http://localhost:7860/questions");
        assert_eq!(client.submit_url(), "http://localhost:7860/submit");
    }
}
