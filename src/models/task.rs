//! 题目（Task）模型与原始数据解析

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::FetchError;

/// 一道基准测试题目
///
/// 获取后不再修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// 题目ID（唯一）
    pub id: String,
    /// 题干
    pub prompt: String,
    /// 附件文件名（可选）
    pub file_name: Option<String>,
    /// 除 task_id 与 question 以外的全部原始字段
    pub metadata: Map<String, Value>,
}

impl Task {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            file_name: None,
            metadata: Map::new(),
        }
    }

    /// 从原始 JSON 记录构建，缺少 task_id 或 question 时返回 None
    pub fn from_value(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        let id = obj
            .get("task_id")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        let prompt = obj.get("question").and_then(|v| v.as_str())?;

        let metadata: Map<String, Value> = obj
            .iter()
            .filter(|(k, _)| k.as_str() != "task_id" && k.as_str() != "question")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let file_name = metadata
            .get("file_name")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Some(Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            file_name,
            metadata,
        })
    }
}

/// 解析题目接口返回的数据
///
/// 非数组或空数组视为错误；单条格式错误或ID重复的记录会被跳过
pub fn parse_tasks(payload: Value) -> Result<Vec<Task>, FetchError> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(FetchError::Malformed(format!(
                "期望 JSON 数组，实际为 {}",
                json_kind(&other)
            )))
        }
    };

    if items.is_empty() {
        return Err(FetchError::Empty);
    }

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(items.len());

    for item in &items {
        let Some(task) = Task::from_value(item) else {
            warn!("⚠️ 跳过格式错误的题目记录: {}", item);
            continue;
        };
        if !seen.insert(task.id.clone()) {
            warn!("⚠️ 跳过重复的题目ID: {}", task.id);
            continue;
        }
        tasks.push(task);
    }

    if tasks.is_empty() {
        return Err(FetchError::Malformed(format!(
            "{} 条记录中没有有效题目",
            items.len()
        )));
    }

    Ok(tasks)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Array(_) => "数组",
        Value::Object(_) => "对象",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_splits_metadata() {
        let item = json!({
            "task_id": "abc",
            "question": "What is 2+2?",
            "Level": "1",
            "file_name": "sales.xlsx"
        });
        let task = Task::from_value(&item).unwrap();

        assert_eq!(task.id, "abc");
        assert_eq!(task.prompt, "What is 2+2?");
        assert_eq!(task.file_name.as_deref(), Some("sales.xlsx"));
        assert_eq!(task.metadata.len(), 2);
        assert!(!task.metadata.contains_key("task_id"));
        assert!(!task.metadata.contains_key("question"));
    }

    #[test]
    fn test_empty_file_name_is_no_reference() {
        let item = json!({"task_id": "abc", "question": "q", "file_name": ""});
        let task = Task::from_value(&item).unwrap();
        assert!(task.file_name.is_none());
    }

    #[test]
    fn test_parse_skips_malformed_and_duplicate_records() {
        let payload = json!([
            {"task_id": "1", "question": "first"},
            {"question": "no id"},
            {"task_id": "", "question": "blank id"},
            {"task_id": "2"},
            {"task_id": "1", "question": "duplicate"},
            {"task_id": "3", "question": ""}
        ]);
        let tasks = parse_tasks(payload).unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(tasks[0].prompt, "first");
    }

    #[test]
    fn test_parse_rejects_empty_and_non_array_payloads() {
        assert!(matches!(parse_tasks(json!([])), Err(FetchError::Empty)));
        assert!(matches!(
            parse_tasks(json!({"detail": "oops"})),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(
            parse_tasks(json!([{"foo": 1}, 42])),
            Err(FetchError::Malformed(_))
        ));
    }
}
