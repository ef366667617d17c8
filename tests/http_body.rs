use httpmock::Method::POST;
use httpmock::MockServer;
use sample_service_client::{ClientError, SampleServiceClient};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[test]
fn test_post_json_body_sent() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/some/post")
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .body("{\n  \"someKey\": \"someKey-123\"\n}");
        then.status(200).body("created");
    });

    let client = SampleServiceClient::new(server.url("/api/")).expect("client should build");
    let body = client.post_json("someKey-123").expect("request should succeed");
    assert_eq!(body, "created");
    mock.assert();
}

#[test]
fn test_post_json_keeps_non_ascii_literal() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/some/post")
            .body_contains("\"someKey\": \"鍵-🔑\"");
        then.status(200).body("ok");
    });

    let client = SampleServiceClient::new(server.url("/api/")).expect("client should build");
    client.post_json("鍵-🔑").expect("request should succeed");
    mock.assert();
}

#[test]
fn test_post_json_reports_empty_body() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/some/post");
        then.status(200);
    });

    let client = SampleServiceClient::new(server.url("/api/")).expect("client should build");
    let err = client.post_json("someKey-123").expect_err("empty body");
    assert!(matches!(err, ClientError::EmptyBody));
}
