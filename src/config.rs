use std::time::Duration;

use crate::utils::retry::RetryPolicy;

/// 默认评分后端地址
pub const DEFAULT_API_URL: &str = "https://agents-course-unit4-scoring.hf.space";

/// 默认系统提示词
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a precise GAIA reasoning assistant. \
For each question, return only the final answer, with no explanation or extra text.";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 评分后端地址
    pub api_url: String,
    /// 提交用户名
    pub username: String,
    /// 运行环境的 Space ID（用于生成代码仓库链接）
    pub space_id: Option<String>,
    /// 运行环境的 Space Host
    pub space_host: Option<String>,
    /// 未设置 Space ID 时使用的代码仓库链接
    pub agent_code_url: String,
    // --- 网络策略 ---
    pub fetch_timeout: Duration,
    pub submit_timeout: Duration,
    pub retry: RetryPolicy,
    // --- LLM 配置 ---
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub system_prompt: String,
    // --- 智能体配置 ---
    /// 关键词规则文件（TOML）
    pub rules_file: Option<String>,
    /// 兜底答案，None 表示不兜底
    pub fallback_answer: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件，None 表示不写文件
    pub output_log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            username: String::new(),
            space_id: None,
            space_host: None,
            agent_code_url: String::new(),
            fetch_timeout: Duration::from_secs(15),
            submit_timeout: Duration::from_secs(60),
            retry: RetryPolicy::default(),
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            rules_file: None,
            fallback_answer: Some("I don't know".to_string()),
            verbose_logging: false,
            output_log_file: Some("gaia_run.txt".to_string()),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源构建配置，便于测试
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let parse_secs = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(fallback)
        };
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let retry = RetryPolicy {
            max_attempts: lookup("HTTP_MAX_ATTEMPTS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(default.retry.max_attempts),
            delay: lookup("HTTP_RETRY_DELAY_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default.retry.delay),
        };

        Self {
            api_url: non_empty("GAIA_API_URL").unwrap_or(default.api_url),
            username: lookup("HF_USERNAME").map(|v| v.trim().to_string()).unwrap_or(default.username),
            space_id: non_empty("SPACE_ID"),
            space_host: non_empty("SPACE_HOST"),
            agent_code_url: non_empty("AGENT_CODE_URL").unwrap_or(default.agent_code_url),
            fetch_timeout: parse_secs("FETCH_TIMEOUT_SECS", default.fetch_timeout),
            submit_timeout: parse_secs("SUBMIT_TIMEOUT_SECS", default.submit_timeout),
            retry,
            llm_api_key: non_empty("LLM_API_KEY"),
            llm_api_base_url: non_empty("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: non_empty("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            system_prompt: non_empty("AGENT_SYSTEM_PROMPT").unwrap_or(default.system_prompt),
            rules_file: non_empty("AGENT_RULES_FILE"),
            // 显式设置为空字符串表示关闭兜底
            fallback_answer: match lookup("AGENT_FALLBACK_ANSWER") {
                Some(v) if v.trim().is_empty() => None,
                Some(v) => Some(v.trim().to_string()),
                None => default.fallback_answer,
            },
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default.verbose_logging),
            output_log_file: match lookup("OUTPUT_LOG_FILE") {
                Some(v) if v.trim().is_empty() => None,
                Some(v) => Some(v.trim().to_string()),
                None => default.output_log_file,
            },
        }
    }

    /// 提交时附带的代码仓库链接
    pub fn agent_code_url(&self) -> String {
        match &self.space_id {
            Some(space_id) => format!("https://huggingface.co/spaces/{}/tree/main", space_id),
            None => self.agent_code_url.clone(),
        }
    }
}
