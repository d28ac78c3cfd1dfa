//! 评测应用 - 编排层
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建评分后端客户端和智能体
//! 2. **身份校验**：没有用户名时不发起任何请求
//! 3. **获取题目**：失败则整次运行终止，不会提交
//! 4. **作答提交**：委托 `RunController`
//! 5. **全局统计**：输出状态文本、结果表和运行日志

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::agent::{Answerer, GaiaAgent};
use crate::clients::{BenchmarkClient, QuestionSource, SubmissionClient};
use crate::config::Config;
use crate::error::{AppResult, ConfigError};
use crate::models::{AgentIdentity, SubmissionResult};
use crate::utils::logging::{
    log_space_metadata, log_startup, log_tasks_loaded, print_final_stats, write_run_log,
};
use crate::workflow::RunController;

/// 应用主结构
pub struct App {
    config: Config,
    source: Arc<dyn QuestionSource>,
    submitter: Arc<dyn SubmissionClient>,
    answerer: Arc<dyn Answerer>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        let client = Arc::new(BenchmarkClient::new(&config));
        let agent = GaiaAgent::from_config(&config).await?;
        info!("✓ 智能体已就绪");

        Ok(Self::with_parts(
            config,
            client.clone(),
            client,
            Arc::new(agent),
        ))
    }

    /// 使用自定义的题目来源、提交端和智能体组装应用
    pub fn with_parts(
        config: Config,
        source: Arc<dyn QuestionSource>,
        submitter: Arc<dyn SubmissionClient>,
        answerer: Arc<dyn Answerer>,
    ) -> Self {
        Self {
            config,
            source,
            submitter,
            answerer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 解析提交身份
    pub fn identity(&self) -> AppResult<AgentIdentity> {
        let username = self.config.username.trim();
        if username.is_empty() {
            return Err(ConfigError::MissingUsername.into());
        }
        Ok(AgentIdentity {
            username: username.to_string(),
            agent_code_url: self.config.agent_code_url(),
        })
    }

    /// 运行一次完整评测：获取 → 作答 → 提交 → 汇总
    pub async fn run(&self) -> AppResult<SubmissionResult> {
        log_space_metadata(&self.config);

        let identity = self.identity()?;
        info!("[身份] 提交用户: {}", identity.username);

        let tasks = match self.source.fetch_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!("❌ 获取题目失败: {}", e);
                return Err(e.into());
            }
        };
        log_tasks_loaded(tasks.len());

        let controller = RunController::new(self.submitter.as_ref(), &identity)
            .verbose(self.config.verbose_logging);
        let mut result = controller.run(&tasks, self.answerer.as_ref()).await;

        let status = result.status_message(&identity.username);
        for line in status.lines() {
            info!("{}", line);
        }

        if let Some(path) = self.config.output_log_file.as_deref() {
            match write_run_log(path, &status, &result) {
                Ok(()) => result.log_file = Some(path.to_string()),
                Err(e) => warn!("⚠️ 写入运行日志失败: {:#}", e),
            }
        }

        print_final_stats(&result);

        Ok(result)
    }
}
