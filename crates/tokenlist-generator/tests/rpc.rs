use serde_json::json;
use tokenlist_generator::rpc::{http_client, RpcClient};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const TOKEN: &str = "0xAbCd000000000000000000000000000000000001";

fn client(server: &MockServer) -> RpcClient {
    RpcClient::new(
        http_client(std::time::Duration::from_secs(5)).unwrap(),
        Some(server.uri().parse().unwrap()),
    )
}

#[tokio::test]
async fn posts_eth_call_and_returns_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_call",
            "params": [{ "to": TOKEN, "data": "0x313ce567" }, "latest"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x12",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).eth_call(TOKEN, "0x313ce567").await;

    assert_eq!(result.as_deref(), Some("0x12"));
}

#[tokio::test]
async fn server_error_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x12",
        })))
        .mount(&server)
        .await;

    assert_eq!(client(&server).eth_call(TOKEN, "0x313ce567").await, None);
}

#[tokio::test]
async fn null_or_missing_result_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": null,
        })))
        .mount(&server)
        .await;

    assert_eq!(client(&server).eth_call(TOKEN, "0x06fdde03").await, None);
}

#[tokio::test]
async fn unreachable_endpoint_yields_none() {
    let client = RpcClient::new(
        http_client(std::time::Duration::from_secs(1)).unwrap(),
        Some("http://127.0.0.1:9".parse().unwrap()),
    );

    assert_eq!(client.eth_call(TOKEN, "0x06fdde03").await, None);
}
