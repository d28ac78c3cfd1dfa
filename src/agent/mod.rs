//! 作答能力
//!
//! 控制器只依赖 [`Answerer`]，具体推理策略可以随意替换

pub mod gaia_agent;
pub mod prompt;

use async_trait::async_trait;

use crate::error::AnswerError;
use crate::models::Task;

pub use gaia_agent::GaiaAgent;

/// 把一道题目映射为答案文本
#[async_trait]
pub trait Answerer: Send + Sync {
    async fn answer(&self, task: &Task) -> Result<String, AnswerError>;
}
