use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 获取题目失败（整次运行终止）
    #[error("获取题目失败: {0}")]
    Fetch(#[from] FetchError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 未提供用户名（相当于未登录）
    #[error("未设置用户名，请通过 HF_USERNAME 提供提交身份")]
    MissingUsername,
    /// 规则文件读取失败
    #[error("无法读取规则文件 {path}: {source}")]
    RulesRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 规则文件解析失败
    #[error("无法解析规则文件 {path}: {source}")]
    RulesParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 题目获取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {message}")]
    Request { endpoint: String, message: String },
    /// 请求超时
    #[error("请求超时 ({endpoint})")]
    Timeout { endpoint: String },
    /// 接口返回非成功状态码
    #[error("接口返回错误状态 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 返回数据格式错误
    #[error("题目数据格式错误: {0}")]
    Malformed(String),
    /// 返回空列表
    #[error("题目接口返回空列表")]
    Empty,
}

impl FetchError {
    /// 从 reqwest 错误构造
    pub fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Request {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// 单个题目作答失败
///
/// 只影响当前题目，运行继续
#[derive(Debug, Error)]
pub enum AnswerError {
    /// LLM 调用失败
    #[error("LLM 调用失败 (模型: {model}): {message}")]
    Llm { model: String, message: String },
    /// 所有作答手段都没有给出答案
    #[error("智能体未能给出答案")]
    NoAnswer,
    /// 其他错误
    #[error("{0}")]
    Other(String),
}

/// 批量提交失败
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 服务器返回错误状态码
    #[error("服务器返回状态码 {status}。详情: {detail}")]
    Status { status: u16, detail: String },
    /// 请求超时
    #[error("请求超时")]
    Timeout,
    /// 网络错误
    #[error("网络错误 - {0}")]
    Network(String),
    /// 评分结果解析失败
    #[error("无法解析评分结果: {0}")]
    Decode(String),
}

impl SubmissionError {
    /// 从 reqwest 错误构造
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmissionError::Timeout
        } else if err.is_decode() {
            SubmissionError::Decode(err.to_string())
        } else {
            SubmissionError::Network(err.to_string())
        }
    }
}

/// 判断错误是否值得重试
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

fn is_transient_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

impl Retryable for FetchError {
    fn is_retryable(&self) -> bool {
        match self {
            FetchError::Request { .. } | FetchError::Timeout { .. } => true,
            FetchError::BadStatus { status, .. } => is_transient_status(*status),
            FetchError::Malformed(_) | FetchError::Empty => false,
        }
    }
}

impl Retryable for SubmissionError {
    fn is_retryable(&self) -> bool {
        match self {
            SubmissionError::Timeout | SubmissionError::Network(_) => true,
            SubmissionError::Status { status, .. } => is_transient_status(*status),
            SubmissionError::Decode(_) => false,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
