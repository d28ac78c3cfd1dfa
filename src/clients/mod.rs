//! 与评分后端交互的客户端
//!
//! 控制器与应用只依赖这里的两个 trait，测试中可以替换为桩实现

pub mod benchmark_client;

use async_trait::async_trait;

use crate::error::{FetchError, SubmissionError};
use crate::models::{ScoreReport, Submission, Task};

pub use benchmark_client::BenchmarkClient;

/// 题目来源
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError>;
}

/// 答案提交端
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, submission: &Submission<'_>) -> Result<ScoreReport, SubmissionError>;
}
