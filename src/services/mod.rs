pub mod keyword_tools;
pub mod llm_service;

pub use keyword_tools::KeywordTools;
pub use llm_service::LlmService;
