use anyhow::{Context, Result};
/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{ResultRow, SubmissionResult};

/// 写入运行日志文件
///
/// 包含时间戳头部、状态文本和结果表
pub fn write_run_log(log_file_path: &str, status: &str, result: &SubmissionResult) -> Result<()> {
    let content = format!(
        "{}\nGAIA 评测运行日志 - {}\n{}\n\n{}\n\n{}",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60),
        status,
        render_results_table(&result.results_log)
    );
    fs::write(log_file_path, content)
        .with_context(|| format!("无法写入日志文件: {}", log_file_path))?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - GAIA 评测模式");
    info!("🌐 评分后端: {}", config.api_url);
    info!("{}", "=".repeat(60));
}

/// 记录运行环境信息（Space Host / Space ID）
pub fn log_space_metadata(config: &Config) {
    match &config.space_host {
        Some(host) => {
            info!("✅ SPACE_HOST: {}", host);
            info!("   运行地址: https://{}.hf.space", host);
        }
        None => info!("ℹ️ 未设置 SPACE_HOST（可能在本地运行）"),
    }

    match &config.space_id {
        Some(space_id) => {
            info!("✅ SPACE_ID: {}", space_id);
            info!("   仓库地址: https://huggingface.co/spaces/{}", space_id);
            info!("   代码目录: {}", config.agent_code_url());
        }
        None => info!("ℹ️ 未设置 SPACE_ID，无法生成仓库地址"),
    }
}

/// 记录题目加载信息
pub fn log_tasks_loaded(total: usize) {
    info!("✓ 获取到 {} 道题目", total);
    info!("📋 将逐题顺序作答\n");
}

/// 打印最终统计信息
pub fn print_final_stats(result: &SubmissionResult) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", result.succeeded, result.total);
    info!("❌ 失败: {}", result.failed);
    match result.backend_score {
        Some(score) => info!("🏆 得分: {}%", score),
        None => warn!("🏆 得分: 无"),
    }
    info!("{}", "=".repeat(60));
    if let Some(path) = &result.log_file {
        info!("\n日志已保存至: {}", path);
    }
}

/// 把结果表渲染为纯文本
pub fn render_results_table(rows: &[ResultRow]) -> String {
    let mut out = String::new();
    out.push_str("Task ID | Question | Submitted Answer\n");
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{} | {} | {}\n",
            row.task_id,
            truncate_text(&row.question.replace('\n', " "), 80),
            row.submitted_answer
        ));
    }
    out
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
