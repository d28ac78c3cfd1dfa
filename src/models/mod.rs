pub mod answer;
pub mod loaders;
pub mod report;
pub mod rule;
pub mod task;

pub use answer::{AgentIdentity, AnswerRecord, Submission};
pub use loaders::{load_rules_file, parse_rules};
pub use rule::{KeywordRule, RuleFile};
pub use report::{ResultRow, ScoreReport, SubmissionResult, AGENT_ERROR_PREFIX};
pub use task::{parse_tasks, Task};
