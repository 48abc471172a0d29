use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use weather_time_agent::config::{Config, Protocol, Transport};
use weather_time_agent::server::build_router;
use weather_time_agent::CityAgent;

const SESSION_HEADER: &str = "mcp-session-id";

fn app() -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 8080,
        protocol: Protocol::Http,
        transport: Transport::Http,
    };
    build_router(&config, CityAgent::new())
}

async fn post(app: &Router, session: Option<&str>, message: Value) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("host", "127.0.0.1:8080")
        .header("content-type", "application/json")
        .header("accept", "application/json, text/event-stream");
    if let Some(id) = session {
        builder = builder.header(SESSION_HEADER, id);
    }

    app.clone()
        .oneshot(builder.body(Body::from(message.to_string())).unwrap())
        .await
        .unwrap()
}

/// Pulls the JSON-RPC response out of a plain JSON or event-stream body
async fn rpc_response(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    if let Ok(value) = serde_json::from_str::<Value>(&text) {
        return value;
    }
    text.lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .filter_map(|data| serde_json::from_str::<Value>(data.trim()).ok())
        .find(|value| value.get("id").is_some())
        .unwrap_or_else(|| panic!("no JSON-RPC response in body: {text}"))
}

#[tokio::test]
async fn weather_tool_round_trip_over_streamable_http() {
    let app = app();

    let response = post(
        &app,
        None,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "integration-test", "version": "0.0.0"}
            }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let session = response
        .headers()
        .get(SESSION_HEADER)
        .expect("initialize should open a session")
        .to_str()
        .unwrap()
        .to_string();

    let init = rpc_response(response).await;
    assert_eq!(init["result"]["serverInfo"]["name"], "weather-time-agent");
    assert_eq!(init["result"]["serverInfo"]["title"], "sample_agent");

    let response = post(
        &app,
        Some(&session),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let response = post(
        &app,
        Some(&session),
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {"name": "get_weather", "arguments": {"city": "Atlantis"}}
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let call = rpc_response(response).await;
    assert_eq!(call["id"], 2);
    assert_eq!(call["result"]["isError"], true);
    assert_eq!(
        call["result"]["structuredContent"],
        json!({
            "status": "error",
            "error_message": "Weather information for 'Atlantis' is not available."
        })
    );
}
