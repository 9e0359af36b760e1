//! Interactive loop tests over in-memory input and output.

mod common;

use std::sync::Arc;

use serde_json::json;
use tokio::io::BufReader;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paper_search_assistant::agent::ChatSession;
use paper_search_assistant::repl::{EMPTY_INPUT_WARNING, LoopState, PROMPT, Repl};

use common::{ScriptedModel, sample_paper_json, sample_search_result, setup_registry};

async fn run_repl(model: Arc<ScriptedModel>, mock_server: &MockServer, input: &str) -> (Repl, String) {
    let mut repl = Repl::new(ChatSession::new(model, setup_registry(mock_server)));
    let mut out = Vec::new();
    repl.run(input.as_bytes(), &mut out).await.unwrap();
    (repl, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_quit_makes_no_calls() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&mock_server).await;

    let model = Arc::new(ScriptedModel::new());
    let (repl, out) = run_repl(model.clone(), &mock_server, "  Quit \n").await;

    assert_eq!(repl.state(), LoopState::Terminated);
    assert_eq!(repl.tasks_run(), 0);
    assert_eq!(model.call_count(), 0);
    assert_eq!(out, PROMPT);
}

#[tokio::test]
async fn test_empty_input_reprompts_with_warning() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new());

    let (_, out) = run_repl(model.clone(), &mock_server, "\n   \nquit\n").await;

    assert_eq!(out.matches(EMPTY_INPUT_WARNING).count(), 2);
    assert_eq!(out.matches(PROMPT).count(), 3);
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_reads_from_async_source() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new());

    let source = tokio_test::io::Builder::new().read(b"\n").read(b"quit\n").build();
    let mut repl = Repl::new(ChatSession::new(model.clone(), setup_registry(&mock_server)));
    let mut out = Vec::new();
    repl.run(BufReader::new(source), &mut out).await.unwrap();

    assert_eq!(repl.state(), LoopState::Terminated);
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_eof_terminates() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new());

    let (repl, _) = run_repl(model, &mock_server, "").await;

    assert_eq!(repl.state(), LoopState::Terminated);
}

#[tokio::test]
async fn test_task_prints_final_reply_and_resets() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_result(vec![
            sample_paper_json("p1", "Neural Radiance Fields", 2020, 4000),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let model = Arc::new(
        ScriptedModel::new()
            .tool_call("call_1", "search_papers", json!({"topic": "nerf", "year": 2020}))
            .reply("Found: Neural Radiance Fields (2020). TERMINATE")
            .reply("Nothing else. TERMINATE"),
    );

    let (repl, out) = run_repl(model.clone(), &mock_server, "nerf papers from 2020\nwhat else?\nquit\n").await;

    assert_eq!(repl.tasks_run(), 2);
    assert!(out.contains("Found: Neural Radiance Fields (2020). TERMINATE\n"));
    assert!(out.contains("Nothing else. TERMINATE\n"));

    // The second task starts from a clean history.
    let third = &model.requests()[2];
    assert_eq!(third.messages.len(), 2);
    assert_eq!(third.messages[1].content, "what else?");
}

#[tokio::test]
async fn test_failed_task_is_reported_and_loop_continues() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new().fail(503, "overloaded").reply("Recovered. TERMINATE"));

    let (repl, out) = run_repl(model.clone(), &mock_server, "first\nsecond\nquit\n").await;

    assert_eq!(repl.tasks_run(), 2);
    assert!(out.contains("Error: "));
    assert!(out.contains("Recovered. TERMINATE"));
    assert_eq!(model.requests()[1].messages.len(), 2);
}
