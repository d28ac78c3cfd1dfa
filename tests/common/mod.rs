//! 集成测试共用的本地评分后端

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use gaia_runner::Config;
use serde_json::{json, Value};

/// 可配置响应的本地后端
pub struct MockBackend {
    pub questions_status: StatusCode,
    pub questions_body: Value,
    pub questions_delay: Duration,
    pub submit_status: StatusCode,
    pub submit_body: Value,
    pub question_hits: AtomicUsize,
    pub submissions: Mutex<Vec<Value>>,
}

impl MockBackend {
    pub fn new(questions_body: Value) -> Self {
        Self {
            questions_status: StatusCode::OK,
            questions_body,
            questions_delay: Duration::ZERO,
            submit_status: StatusCode::OK,
            submit_body: json!({
                "username": "alice",
                "score": 50.0,
                "correct_count": 1,
                "total_attempted": 2,
                "message": "Score calculated successfully"
            }),
            question_hits: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn question_hits(&self) -> usize {
        self.question_hits.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<Value> {
        self.submissions.lock().unwrap().clone()
    }
}

async fn questions(State(backend): State<Arc<MockBackend>>) -> (StatusCode, Json<Value>) {
    backend.question_hits.fetch_add(1, Ordering::SeqCst);
    if !backend.questions_delay.is_zero() {
        tokio::time::sleep(backend.questions_delay).await;
    }
    (backend.questions_status, Json(backend.questions_body.clone()))
}

async fn submit(
    State(backend): State<Arc<MockBackend>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.submissions.lock().unwrap().push(body);
    (backend.submit_status, Json(backend.submit_body.clone()))
}

/// 启动本地后端，返回基础地址
pub async fn spawn_backend(backend: Arc<MockBackend>) -> String {
    let app = Router::new()
        .route("/questions", get(questions))
        .route("/submit", post(submit))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn sample_questions() -> Value {
    json!([
        {"task_id": "1", "question": "2+2", "Level": "1", "file_name": ""},
        {"task_id": "2", "question": "capital of France", "Level": "1", "file_name": ""}
    ])
}

pub fn test_config(api_url: String) -> Config {
    Config {
        api_url,
        username: "alice".to_string(),
        output_log_file: None,
        ..Config::default()
    }
}
