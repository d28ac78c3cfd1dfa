//! 默认智能体
//!
//! 作答顺序：
//! 1. 关键词工具
//! 2. LLM（配置了 API Key 时）
//! 3. 兜底答案

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::prompt::{build_prompt, normalize_answer};
use super::Answerer;
use crate::config::Config;
use crate::error::{AnswerError, AppResult};
use crate::models::load_rules_file;
use crate::services::{KeywordTools, LlmService};
use crate::utils::logging::truncate_text;

pub struct GaiaAgent {
    tools: KeywordTools,
    llm: Option<LlmService>,
    system_prompt: String,
    fallback_answer: Option<String>,
}

impl GaiaAgent {
    /// 按配置创建智能体（加载规则文件、创建 LLM 服务）
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        let tools = match &config.rules_file {
            Some(path) => KeywordTools::new(load_rules_file(Path::new(path)).await?),
            None => KeywordTools::default(),
        };

        let llm = LlmService::from_config(config);
        match &llm {
            Some(service) => info!("🤖 使用 LLM 兜底，模型: {}", service.model_name()),
            None => info!("ℹ️ 未配置 LLM_API_KEY，仅使用关键词工具"),
        }

        Ok(Self::new(
            tools,
            llm,
            config.system_prompt.clone(),
            config.fallback_answer.clone(),
        ))
    }

    pub fn new(
        tools: KeywordTools,
        llm: Option<LlmService>,
        system_prompt: impl Into<String>,
        fallback_answer: Option<String>,
    ) -> Self {
        Self {
            tools,
            llm,
            system_prompt: system_prompt.into(),
            fallback_answer,
        }
    }

    /// 询问 LLM，失败或答案为空时返回错误
    async fn ask_llm(&self, llm: &LlmService, prompt: &str) -> Result<String, AnswerError> {
        let raw = llm
            .send_to_llm(prompt, Some(&self.system_prompt))
            .await
            .map_err(|e| AnswerError::Llm {
                model: llm.model_name().to_string(),
                message: e.to_string(),
            })?;
        debug!("LLM 原始输出: {}", truncate_text(&raw, 80));

        let answer = normalize_answer(&raw);
        if answer.is_empty() {
            return Err(AnswerError::Llm {
                model: llm.model_name().to_string(),
                message: "返回内容为空".to_string(),
            });
        }
        Ok(answer)
    }
}

#[async_trait]
impl Answerer for GaiaAgent {
    async fn answer(&self, task: &crate::models::Task) -> Result<String, AnswerError> {
        debug!("[任务 {}] 题干: {}", task.id, truncate_text(&task.prompt, 80));

        if let Some(rule) = self.tools.lookup(&task.prompt) {
            info!("[任务 {}] 🔧 关键词工具命中: {}", task.id, rule.name);
            return Ok(normalize_answer(&rule.answer));
        }

        let mut last_error = None;
        if let Some(llm) = &self.llm {
            let prompt = build_prompt(task);
            match self.ask_llm(llm, &prompt).await {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    warn!("[任务 {}] ⚠️ {}，改用兜底答案", task.id, e);
                    last_error = Some(e);
                }
            }
        }

        match &self.fallback_answer {
            Some(fallback) => Ok(fallback.clone()),
            None => Err(last_error.unwrap_or(AnswerError::NoAnswer)),
        }
    }
}
