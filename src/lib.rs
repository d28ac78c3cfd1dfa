//! # GAIA Runner
//!
//! 从评分后端获取 GAIA 基准题目，逐题调用智能体作答，批量提交并汇总结果
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 与评分后端交互，只暴露能力
//! - `QuestionSource` / `SubmissionClient` - 可替换的题目来源与提交端
//! - `BenchmarkClient` - 基于 reqwest 的默认实现
//!
//! ### ② 业务能力层（Services / Agent）
//! - `services/` - 关键词工具与 LLM 调用能力
//! - `agent/` - `Answerer` 作答接口与默认的 `GaiaAgent`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/run_controller` - 逐题作答 → 批量提交 → 汇总
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 身份校验、获取题目、调度流程、输出统计

pub mod agent;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use agent::{Answerer, GaiaAgent};
pub use clients::{BenchmarkClient, QuestionSource, SubmissionClient};
pub use config::Config;
pub use error::{AnswerError, AppError, AppResult, ConfigError, FetchError, SubmissionError};
pub use models::{AgentIdentity, AnswerRecord, ScoreReport, SubmissionResult, Task};
pub use orchestrator::App;
pub use workflow::RunController;
