//! Conversation tests: scripted model, real dispatcher, mocked Semantic Scholar.

mod common;

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paper_search_assistant::agent::{ChatSession, SearchAgent, TerminationPredicate, TerminationReason};
use paper_search_assistant::error::AgentError;
use paper_search_assistant::llm::Role;

use common::{ScriptedModel, sample_paper_json, sample_search_result, setup_registry};

#[tokio::test]
async fn test_tool_call_reaches_search_and_result_reaches_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("query", "graph neural networks"))
        .and(query_param("year", "2021-"))
        .and(query_param("minCitationCount", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_result(vec![
            sample_paper_json("p1", "Graph Transformers", 2022, 120),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let model = Arc::new(
        ScriptedModel::new()
            .tool_call(
                "call_1",
                "search_papers",
                json!({"topic": "graph neural networks", "year": 2020, "year_operator": "after", "min_citations": 50}),
            )
            .reply("1. Graph Transformers (2022), 120 citations.\nTERMINATE"),
    );

    let mut session = ChatSession::new(model.clone(), setup_registry(&mock_server));
    let transcript = session
        .initiate_chat("Find papers on graph neural networks after 2020 with at least 50 citations", None)
        .await
        .unwrap();

    assert_eq!(transcript.reason, TerminationReason::Sentinel);
    assert_eq!(transcript.turns, 2);
    assert_eq!(transcript.tool_call_count(), 1);
    assert_eq!(
        transcript.last_agent_message(),
        Some("1. Graph Transformers (2022), 120 citations.\nTERMINATE")
    );

    let requests = model.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].tools.len(), 1);
    assert_eq!(requests[0].tools[0].name, "search_papers");

    let tool_message = requests[1].messages.last().unwrap();
    assert_eq!(tool_message.role, Role::Tool);
    assert_eq!(tool_message.tool_call_id.as_deref(), Some("call_1"));

    let records: Value = serde_json::from_str(&tool_message.content).unwrap();
    assert_eq!(records[0]["title"], "Graph Transformers");
    assert_eq!(records[0]["citationCount"], 120);
}

#[tokio::test]
async fn test_first_request_carries_system_and_task() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new().reply("No papers needed. TERMINATE"));

    let mut session = ChatSession::new(model.clone(), setup_registry(&mock_server));
    session.initiate_chat("hello", None).await.unwrap();

    let request = &model.requests()[0];
    assert_eq!(request.messages[0].role, Role::System);
    assert!(request.messages[0].content.contains("TERMINATE"));
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.messages[1].content, "hello");
}

#[tokio::test]
async fn test_upstream_failure_is_relayed_to_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let model = Arc::new(
        ScriptedModel::new()
            .tool_call("call_1", "search_papers", json!({"topic": "robotics"}))
            .reply("The search service is busy. TERMINATE"),
    );

    let mut session = ChatSession::new(model.clone(), setup_registry(&mock_server));
    let transcript = session.initiate_chat("robotics papers", None).await.unwrap();

    assert_eq!(transcript.reason, TerminationReason::Sentinel);

    let tool_message = model.requests()[1].messages.last().unwrap().clone();
    let payload: Value = serde_json::from_str(&tool_message.content).unwrap();
    assert!(payload["error"].as_str().unwrap().contains("Rate limited"));
}

#[tokio::test]
async fn test_max_turns_bounds_exchanges() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(
        ScriptedModel::new()
            .reply("Which year do you mean?")
            .reply("Still waiting for details.")
            .reply("Giving up."),
    );

    let mut session = ChatSession::new(model.clone(), setup_registry(&mock_server));
    let transcript = session.initiate_chat("papers", Some(2)).await.unwrap();

    assert_eq!(transcript.reason, TerminationReason::MaxTurns);
    assert_eq!(transcript.turns, 2);
    assert_eq!(model.call_count(), 2);
    assert_eq!(transcript.last_agent_message(), Some("Still waiting for details."));
}

#[tokio::test]
async fn test_auto_reply_limit() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new().reply("one").reply("two").reply("three"));

    let mut session =
        ChatSession::new(model.clone(), setup_registry(&mock_server)).with_max_consecutive_auto_reply(1);
    let transcript = session.initiate_chat("papers", None).await.unwrap();

    assert_eq!(transcript.reason, TerminationReason::AutoReplyLimit);
    assert_eq!(model.call_count(), 2);
}

#[tokio::test]
async fn test_custom_termination_predicate() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new().reply("working").reply("All done."));

    let mut session = ChatSession::new(model.clone(), setup_registry(&mock_server))
        .with_termination(TerminationPredicate::new(|text| text.ends_with("done.")));
    let transcript = session.initiate_chat("papers", None).await.unwrap();

    assert_eq!(transcript.reason, TerminationReason::Sentinel);
    assert_eq!(transcript.turns, 2);
}

#[tokio::test]
async fn test_model_failure_surfaces_as_error() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new().fail(500, "backend down"));

    let mut session = ChatSession::new(model, setup_registry(&mock_server));
    let err = session.initiate_chat("papers", None).await.unwrap_err();

    assert!(matches!(err, AgentError::Llm(_)));
}

#[tokio::test]
async fn test_reset_clears_history_between_tasks() {
    let mock_server = MockServer::start().await;
    let model = Arc::new(ScriptedModel::new().reply("first TERMINATE").reply("second TERMINATE"));

    let mut session = ChatSession::new(model.clone(), setup_registry(&mock_server));
    session.initiate_chat("task one", None).await.unwrap();
    session.reset();
    assert!(session.agent().history().is_empty());
    assert!(session.dispatcher().history().is_empty());

    session.initiate_chat("task two", None).await.unwrap();

    let second = &model.requests()[1];
    assert_eq!(second.messages.len(), 2);
    assert_eq!(second.messages[1].content, "task two");
}

#[test]
fn test_search_agent_debug_names_backend_and_model() {
    let agent = SearchAgent::new(Arc::new(ScriptedModel::new()), Vec::new());
    let debug = format!("{agent:?}");

    assert!(debug.contains("backend: \"scripted\""));
    assert!(debug.contains("model: \"scripted-model\""));
}
