//! 作答与提交流程 - 流程层
//!
//! 核心职责：定义"一次评测"的完整处理流程
//!
//! 流程顺序：
//! 1. 按获取顺序逐题作答（单题失败不影响后续题目）
//! 2. 至少有一个答案时批量提交
//! 3. 汇总结果

use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::agent::Answerer;
use crate::clients::SubmissionClient;
use crate::models::{
    AgentIdentity, AnswerRecord, ResultRow, Submission, SubmissionResult, Task, AGENT_ERROR_PREFIX,
};
use crate::utils::logging::truncate_text;

/// 作答与提交控制器
///
/// - 不持有题目来源
/// - 只依赖作答能力与提交端
/// - 每道题目恰好产生一个结果：答案或错误
pub struct RunController<'a> {
    submitter: &'a dyn SubmissionClient,
    identity: &'a AgentIdentity,
    verbose_logging: bool,
}

impl<'a> RunController<'a> {
    pub fn new(submitter: &'a dyn SubmissionClient, identity: &'a AgentIdentity) -> Self {
        Self {
            submitter,
            identity,
            verbose_logging: false,
        }
    }

    pub fn verbose(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }

    /// 逐题作答并提交
    ///
    /// 重复的题目ID只处理第一次出现，`total` 为实际处理的题目数
    pub async fn run(&self, tasks: &[Task], answerer: &dyn Answerer) -> SubmissionResult {
        let mut result = SubmissionResult::default();
        let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());

        info!("[评测] 正在对 {} 道题目作答...", tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            if !seen.insert(task.id.as_str()) {
                warn!("[任务 {}] ⚠️ 题目ID重复，跳过", task.id);
                continue;
            }
            result.total += 1;
            info!(
                "[任务 {}] 开始处理第 {}/{} 题",
                task.id,
                index + 1,
                tasks.len()
            );

            match answerer.answer(task).await {
                Ok(answer) => {
                    if self.verbose_logging {
                        info!("[任务 {}] ✓ 答案: {}", task.id, truncate_text(&answer, 80));
                    }
                    result.results_log.push(ResultRow {
                        task_id: task.id.clone(),
                        question: task.prompt.clone(),
                        submitted_answer: answer.clone(),
                    });
                    result.answers.push(AnswerRecord::new(task.id.clone(), answer));
                    result.succeeded += 1;
                }
                Err(e) => {
                    error!("[任务 {}] ❌ 作答失败: {}", task.id, e);
                    let message = e.to_string();
                    result.results_log.push(ResultRow {
                        task_id: task.id.clone(),
                        question: task.prompt.clone(),
                        submitted_answer: format!("{}{}", AGENT_ERROR_PREFIX, message),
                    });
                    result.per_task_errors.insert(task.id.clone(), message);
                    result.failed += 1;
                }
            }
        }

        if result.answers.is_empty() {
            warn!("[评测] ⚠️ 智能体没有产生任何可提交的答案，跳过提交");
            return result;
        }

        result.submitted = true;
        let submission = Submission::new(self.identity, &result.answers);
        match self.submitter.submit(&submission).await {
            Ok(report) => {
                info!("[评测] 📤 提交成功");
                result.backend_score = report.score;
                result.report = Some(report);
            }
            Err(e) => {
                error!("[评测] ❌ 提交失败: {}", e);
                result.submission_error = Some(e.to_string());
            }
        }

        result
    }
}
