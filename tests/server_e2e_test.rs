// ==========================================
// HTTP 宿主进程端到端测试
// ==========================================
// 测试范围:
// 1. 真实监听端口上的页面/布局/事件请求
// 2. 端口占用时启动失败
// ==========================================

mod helpers;

use std::net::SocketAddr;
use std::sync::Arc;

use helpers::sample_csv_path;
use spacex_launch_dashboard::app::{server, AppState, ServerStartError, UpdateResponse, WidgetId};
use spacex_launch_dashboard::config::DashboardConfig;

async fn start_server() -> SocketAddr {
    let config = DashboardConfig {
        data_path: sample_csv_path(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        ..DashboardConfig::default()
    };
    let state = Arc::new(AppState::new(config).expect("无法初始化AppState"));

    let listener = server::bind(state.config.bind_addr).await.expect("绑定失败");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server::serve(listener, state).await;
    });
    addr
}

fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}

async fn post_update(addr: SocketAddr, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(url(addr, "/api/update"))
        .json(&body)
        .send()
        .await
        .expect("请求失败")
}

#[tokio::test]
async fn test_index_page() {
    let addr = start_server().await;

    let response = reqwest::get(url(addr, "/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("success-pie-chart"));
}

#[tokio::test]
async fn test_layout_endpoint() {
    let addr = start_server().await;

    let response = reqwest::get(url(addr, "/api/layout")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let view: serde_json::Value = response.json().await.unwrap();
    assert_eq!(view["dropdown"]["value"], "ALL");
    assert_eq!(view["slider"]["value"], serde_json::json!([0.0, 9600.0]));
    assert_eq!(view["slider"]["max"], serde_json::json!(10000.0));
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = start_server().await;

    let response = reqwest::get(url(addr, "/api/health")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rows"], 14);
}

#[tokio::test]
async fn test_update_endpoint_initial_event() {
    let addr = start_server().await;

    let response = post_update(
        addr,
        serde_json::json!({
            "trigger": { "event": "initial" },
            "selection": { "site": "ALL", "payload_range": [0, 10000] },
        }),
    )
    .await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response: UpdateResponse = response.json().await.unwrap();
    let targets: Vec<WidgetId> = response.outputs.iter().map(|o| o.target).collect();
    assert_eq!(
        targets,
        vec![WidgetId::SuccessPieChart, WidgetId::SuccessPayloadScatterChart]
    );
    assert_eq!(
        response.outputs[0].figure["layout"]["title"]["text"],
        "Total Success Launches by Site"
    );
}

#[tokio::test]
async fn test_update_endpoint_unknown_site_returns_empty_chart() {
    let addr = start_server().await;

    let response = post_update(
        addr,
        serde_json::json!({
            "trigger": { "widget": "site-dropdown", "event": "change" },
            "selection": { "site": "Starbase", "payload_range": [0, 10000] },
        }),
    )
    .await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response: UpdateResponse = response.json().await.unwrap();
    assert_eq!(response.outputs[0].figure["data"][0]["values"], serde_json::json!([]));
    assert_eq!(response.outputs[1].figure["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_update_endpoint_unbound_widget_is_unknown_event() {
    let addr = start_server().await;

    let response = post_update(
        addr,
        serde_json::json!({
            "trigger": { "widget": "success-pie-chart", "event": "change" },
            "selection": { "site": "ALL", "payload_range": [0, 10000] },
        }),
    )
    .await;

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["code"], "UNKNOWN_EVENT");
}

#[tokio::test]
async fn test_update_endpoint_rejects_malformed_body() {
    let addr = start_server().await;

    let response = post_update(addr, serde_json::json!({ "trigger": { "widget": "nope" } })).await;

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_start_fails_when_port_in_use() {
    let addr = start_server().await;

    let result = server::bind(addr).await;

    assert!(matches!(result, Err(ServerStartError::Bind { .. })));
}
