mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use gaia_runner::utils::RetryPolicy;
use gaia_runner::{
    AgentIdentity, AnswerRecord, BenchmarkClient, FetchError, QuestionSource, SubmissionClient,
    SubmissionError,
};
use gaia_runner::models::Submission;
use serde_json::json;

use common::{sample_questions, spawn_backend, test_config, MockBackend};

fn identity() -> AgentIdentity {
    AgentIdentity {
        username: "alice".to_string(),
        agent_code_url: "https://huggingface.co/spaces/alice/gaia/tree/main".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_tasks_parses_questions() {
    let backend = Arc::new(MockBackend::new(json!([
        {"task_id": "1", "question": "2+2", "file_name": "calc.py"},
        {"question": "missing id"},
        {"task_id": "2", "question": "capital of France"}
    ])));
    let url = spawn_backend(backend.clone()).await;
    let client = BenchmarkClient::new(&test_config(url));

    let tasks = client.fetch_tasks().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "1");
    assert_eq!(tasks[0].file_name.as_deref(), Some("calc.py"));
    assert_eq!(tasks[1].prompt, "capital of France");
    assert_eq!(backend.question_hits(), 1);
}

#[tokio::test]
async fn test_fetch_rejects_empty_payload() {
    let backend = Arc::new(MockBackend::new(json!([])));
    let url = spawn_backend(backend).await;
    let client = BenchmarkClient::new(&test_config(url));

    let err = client.fetch_tasks().await.unwrap_err();
    assert!(matches!(err, FetchError::Empty));
}

#[tokio::test]
async fn test_fetch_retries_transient_status_per_policy() {
    let mut backend = MockBackend::new(json!({"detail": "warming up"}));
    backend.questions_status = StatusCode::SERVICE_UNAVAILABLE;
    let backend = Arc::new(backend);
    let url = spawn_backend(backend.clone()).await;

    let mut config = test_config(url);
    config.retry = RetryPolicy {
        max_attempts: 3,
        delay: Duration::from_millis(10),
    };
    let client = BenchmarkClient::new(&config);

    let err = client.fetch_tasks().await.unwrap_err();
    assert!(matches!(err, FetchError::BadStatus { status: 503, .. }));
    assert_eq!(backend.question_hits(), 3);
}

#[tokio::test]
async fn test_fetch_times_out() {
    let mut backend = MockBackend::new(sample_questions());
    backend.questions_delay = Duration::from_millis(500);
    let url = spawn_backend(Arc::new(backend)).await;

    let mut config = test_config(url);
    config.fetch_timeout = Duration::from_millis(50);
    let client = BenchmarkClient::new(&config);

    let err = client.fetch_tasks().await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout { .. }));
}

#[tokio::test]
async fn test_fetch_unreachable_backend() {
    // 端口 1 上没有服务
    let client = BenchmarkClient::new(&test_config("http://127.0.0.1:1".to_string()));

    let err = client.fetch_tasks().await.unwrap_err();
    assert!(matches!(err, FetchError::Request { .. }));
}

#[tokio::test]
async fn test_submit_sends_batch_and_returns_report() {
    let backend = Arc::new(MockBackend::new(sample_questions()));
    let url = spawn_backend(backend.clone()).await;
    let client = BenchmarkClient::new(&test_config(url));

    let identity = identity();
    let answers = vec![AnswerRecord::new("1", "4"), AnswerRecord::new("2", "Paris")];
    let report = client
        .submit(&Submission::new(&identity, &answers))
        .await
        .unwrap();

    assert_eq!(report.score, Some(50.0));
    assert_eq!(report.correct_count, Some(1));

    let submissions = backend.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(
        submissions[0],
        json!({
            "username": "alice",
            "agent_code": "https://huggingface.co/spaces/alice/gaia/tree/main",
            "answers": [
                {"task_id": "1", "submitted_answer": "4"},
                {"task_id": "2", "submitted_answer": "Paris"}
            ]
        })
    );
}

#[tokio::test]
async fn test_submit_error_uses_detail_field() {
    let mut backend = MockBackend::new(sample_questions());
    backend.submit_status = StatusCode::BAD_REQUEST;
    backend.submit_body = json!({"detail": "Invalid username"});
    let url = spawn_backend(Arc::new(backend)).await;
    let client = BenchmarkClient::new(&test_config(url));

    let identity = identity();
    let answers = vec![AnswerRecord::new("1", "4")];
    let err = client
        .submit(&Submission::new(&identity, &answers))
        .await
        .unwrap_err();

    match err {
        SubmissionError::Status { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Invalid username");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
