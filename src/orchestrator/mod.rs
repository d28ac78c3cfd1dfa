//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次完整评测的调度，是整个系统的"指挥中心"。
//!
//! - 校验提交身份
//! - 创建并持有客户端与智能体
//! - 获取题目（失败则整次运行终止）
//! - 委托 `workflow::RunController` 逐题作答并提交
//! - 输出统计信息与运行日志
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一次评测)
//!     ↓
//! workflow::RunController (Vec<Task> → SubmissionResult)
//!     ↓
//! agent::Answerer (单个 Task)      clients::SubmissionClient (批量提交)
//!     ↓
//! services (能力层：关键词工具 / LLM)
//! ```

pub mod app;

pub use app::App;
