mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use common::{init_logging, memory_store, two_question_level};
use finsight_quiz::flow::QuizFlow;
use finsight_quiz::model::question::Question;
use finsight_quiz::report::ScoreReporter;
use finsight_quiz::sample_data;
use finsight_quiz::source::RemoteSource;
use tokio::net::TcpListener;
use url::Url;

type Reports = Arc<Mutex<Vec<serde_json::Value>>>;

async fn questions_handler(Path(level_id): Path<String>) -> Json<Vec<Question>> {
    let questions = match level_id.as_str() {
        "budgeting-basics" => sample_data::budgeting_basics(),
        "investing-101" => sample_data::investing_101(),
        _ => Vec::new(),
    };
    Json(questions)
}

async fn complete_handler(State(reports): State<Reports>, Json(body): Json<serde_json::Value>) {
    reports.lock().unwrap().push(body);
}

/// Stub Finsight backend serving question lists and recording score reports.
async fn start_stub_backend() -> (Url, Reports) {
    let reports: Reports = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/levels/{level_id}/questions", get(questions_handler))
        .route("/quiz/complete", post(complete_handler))
        .with_state(reports.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(10)).await;

    (Url::parse(&format!("http://{addr}/")).unwrap(), reports)
}

#[tokio::test]
async fn remote_source_fetches_question_list() {
    init_logging();
    let (base_url, _) = start_stub_backend().await;
    let source = RemoteSource::new(base_url);

    let fetched = source.fetch("budgeting-basics").await.unwrap();

    assert_eq!(fetched.level_id, "budgeting-basics");
    assert_eq!(fetched.questions.len(), 4);
    assert_eq!(fetched.questions[0].correct_option, 1);
}

#[tokio::test]
async fn stale_fetch_is_discarded_by_level_tag() {
    init_logging();
    let (base_url, _) = start_stub_backend().await;
    let source = RemoteSource::new(base_url);

    let fetched = source.fetch("budgeting-basics").await.unwrap();

    // By the time the response resolved, the user moved to another level.
    let active_level = "investing-101";
    assert!(!fetched.is_for(active_level));
    assert!(fetched.is_for("budgeting-basics"));
}

#[tokio::test]
async fn fetch_failure_surfaces_as_error() {
    init_logging();
    // Nothing is listening here.
    let source = RemoteSource::new(Url::parse("http://127.0.0.1:9/").unwrap());

    assert!(source.fetch("budgeting-basics").await.is_err());
}

#[tokio::test]
async fn completion_report_reaches_backend() {
    init_logging();
    let (base_url, reports) = start_stub_backend().await;
    let reporter = ScoreReporter::new(&base_url).unwrap();

    let mut flow =
        QuizFlow::new("investing-101", two_question_level(), memory_store()).with_reporter(reporter);
    flow.select(0).unwrap();
    flow.advance().unwrap();
    flow.select(1).unwrap();
    flow.advance().unwrap();
    assert!(flow.is_completed());

    // The report is fire-and-forget; poll until the stub has seen it.
    let mut received = None;
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        if let Some(report) = reports.lock().unwrap().first().cloned() {
            received = Some(report);
            break;
        }
    }

    let report = received.expect("stub backend never received the score report");
    assert_eq!(report["levelId"], "investing-101");
    assert_eq!(report["total"], 2);
    assert_eq!(report["correctCount"], 1);
    assert_eq!(report["perQuestionOutcomes"], serde_json::json!([true, false]));
}

#[tokio::test]
async fn failed_report_leaves_completed_state_intact() {
    init_logging();
    let reporter = ScoreReporter::new(&Url::parse("http://127.0.0.1:9/").unwrap()).unwrap();

    let mut flow =
        QuizFlow::new("investing-101", two_question_level(), memory_store()).with_reporter(reporter);
    flow.select(0).unwrap();
    flow.advance().unwrap();
    flow.select(2).unwrap();
    flow.advance().unwrap();

    assert!(flow.is_completed());

    // Let the doomed report task run; completion must not regress.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(flow.is_completed());
    assert_eq!(flow.summary().correct_count, 2);
}
