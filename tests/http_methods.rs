use httpmock::Method::{DELETE, GET, POST};
use httpmock::MockServer;
use sample_service_client::{ClientError, SampleServiceClient};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> SampleServiceClient {
    SampleServiceClient::new(server.url("/api/")).expect("client should build")
}

#[test]
fn test_get_returns_body() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/some/search/")
            .query_param("someId", "someId-1")
            .header("accept", "application/json")
            .header("accept-charset", "utf-8");
        then.status(200).body("ok");
    });

    let body = client_for(&server).get("someId-1").expect("request should succeed");
    assert_eq!(body, "ok");
    mock.assert();
}

#[test]
fn test_get_reports_non_ok_status() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/some/search/");
        then.status(404).body("not found");
    });

    let err = client_for(&server).get("someId-1").expect_err("404 should fail");
    assert!(matches!(err, ClientError::NonOkStatus(404)));
    mock.assert_hits(1);
}

#[test]
fn test_get_reports_empty_body() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/some/search/");
        then.status(200);
    });

    let err = client_for(&server).get("someId-1").expect_err("empty body should fail");
    assert!(matches!(err, ClientError::EmptyBody));
}

#[test]
fn test_get_reports_connection_refused() {
    if !can_bind_localhost() {
        return;
    }
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let client =
        SampleServiceClient::new(format!("http://127.0.0.1:{}/api/", port)).expect("client");
    let err = client.get("someId-1").expect_err("nothing is listening");
    assert!(matches!(err, ClientError::Transport(_)));
}

#[test]
fn test_delete_returns_confirmation_not_body() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/some/x")
            .header("accept", "application/json");
        then.status(200).body("server body");
    });

    let message = client_for(&server).delete("x").expect("request should succeed");
    assert!(message.contains("x"));
    assert!(!message.contains("server body"));
    mock.assert();
}

#[test]
fn test_delete_reports_non_ok_status() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/some/x");
        then.status(500).body("boom");
    });

    let err = client_for(&server).delete("x").expect_err("500 should fail");
    assert!(matches!(err, ClientError::NonOkStatus(500)));
}

#[test]
fn test_client_is_reused_across_calls() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    let get = server.mock(|when, then| {
        when.method(GET).path("/api/some/search/");
        then.status(200).body("ok");
    });
    let post = server.mock(|when, then| {
        when.method(POST).path("/api/some/post");
        then.status(200).body("posted");
    });

    let client = client_for(&server);
    for _ in 0..3 {
        client.get("someId-1").expect("get");
        client.post_json("someKey-123").expect("post");
    }
    get.assert_hits(3);
    post.assert_hits(3);
}

#[test]
fn test_no_retry_on_failure() {
    if !can_bind_localhost() {
        return;
    }
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/some/search/");
        then.status(503).body("unavailable");
    });

    let err = client_for(&server).get("someId-1").expect_err("503 should fail");
    assert!(matches!(err, ClientError::NonOkStatus(503)));
    mock.assert_hits(1);
}
