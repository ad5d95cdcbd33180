//! Dispatch through `ReqwestTransport` against local sockets.

use std::net::SocketAddr;
use std::time::Duration;

use courier::body::{FormBody, JsonBody, MultipartBody, Part};
use courier::{
    Client, ClientConfig, Cookie, Error, Method, Request, TimeoutContext, with_body,
    with_context_builder, with_cookies, with_header, with_method, with_query,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Serves every connection with `status`, echoing the raw request as the body.
async fn echo_server(status: u16) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(echo(stream, status));
        }
    });
    addr
}

async fn echo(mut stream: TcpStream, status: u16) {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let head_end = loop {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            return;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&raw[..head_end]).to_ascii_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while raw.len() < head_end + content_length {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
    }

    let response = format!(
        "HTTP/1.1 {status} Echo\r\nContent-Length: {}\r\nX-Echo: yes\r\nConnection: close\r\n\r\n",
        raw.len()
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.write_all(&raw).await.unwrap();
    stream.shutdown().await.ok();
}

/// Accepts connections and never answers.
async fn silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    addr
}

async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn post_users() -> Request {
    let body = JsonBody::new(&serde_json::json!({ "name": "ada" })).unwrap();
    Request::new("users", [with_method(Method::Post), with_body(body)])
}

#[tokio::test]
async fn test_post_json_to_echo_endpoint() {
    init_tracing();
    let addr = echo_server(201).await;
    let mut request = post_users();
    request.set_base_url(&format!("http://{addr}"));

    let response = request.send().await;

    assert!(response.is_success(), "{:?}", response.error());
    assert_eq!(response.status(), Some(201));
    assert_eq!(response.request().method, Method::Post);

    let success = response.into_result().unwrap();
    assert_eq!(success.header("x-echo"), Some("yes"));
    let echoed = success.text().to_ascii_lowercase();
    assert!(echoed.starts_with("post /users http/1.1\r\n"), "{echoed}");
    assert!(echoed.contains("content-type: application/json\r\n"));
    assert!(echoed.ends_with(r#"{"name":"ada"}"#));
}

#[tokio::test]
async fn test_unreachable_host_is_error_response() {
    init_tracing();
    let addr = closed_port().await;
    let mut request = post_users();
    request.set_base_url(&format!("http://{addr}/"));

    let response = request.send().await;

    assert!(response.is_error());
    assert_eq!(response.request().method, Method::Post);
    assert_eq!(response.request().path, format!("http://{addr}/users"));
    assert!(matches!(response.error(), Some(Error::Transport(_))));
}

#[tokio::test]
async fn test_relative_uri_is_error_response() {
    let response = post_users().send().await;

    assert!(response.is_error());
    assert_eq!(response.request().method, Method::Post);
    assert_eq!(response.request().path, "users");
}

#[tokio::test]
async fn test_server_error_status_is_success_response() {
    let addr = echo_server(500).await;
    let mut request = Request::new("/broken", []);
    request.set_base_url(&format!("http://{addr}"));

    let response = request.send().await;

    assert!(response.is_success());
    assert_eq!(response.status(), Some(500));
}

#[tokio::test]
async fn test_timeout_expiry_is_error_response() {
    init_tracing();
    let addr = silent_server().await;
    let mut request = Request::new("slow", [with_context_builder(TimeoutContext::new(
        Duration::from_millis(150),
    ))]);
    request.set_base_url(&format!("http://{addr}"));

    let started = std::time::Instant::now();
    let response = request.send().await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(response.error().is_some_and(Error::is_timeout));
}

#[tokio::test]
async fn test_query_headers_and_cookies_reach_the_server() {
    let addr = echo_server(200).await;
    let mut request = Request::new("/search", [
        with_query([("q", "a b"), ("page", "2")].into_iter().collect()),
        with_header([("X-Trace", "t1"), ("Content-Type", "text/plain")].into_iter().collect()),
        with_cookies([Cookie::new("session", "s1"), Cookie::new("theme", "dark")]),
        with_body(FormBody::new([("field", "value")])),
        with_method(Method::Put),
    ]);
    request.set_base_url(&format!("http://{addr}/"));

    let response = request.send().await;
    let echoed = response.text().unwrap().to_ascii_lowercase();

    assert!(echoed.starts_with("put /search?page=2&q=a+b http/1.1\r\n"), "{echoed}");
    assert!(echoed.contains("x-trace: t1\r\n"));
    assert!(echoed.contains("cookie: session=s1; theme=dark\r\n"));
    assert!(echoed.contains("content-type: application/x-www-form-urlencoded\r\n"));
    assert!(!echoed.contains("content-type: text/plain"));
    assert!(echoed.ends_with("field=value"));
}

#[tokio::test]
async fn test_multipart_upload() {
    let addr = echo_server(200).await;
    let body = MultipartBody::with_boundary("courier-boundary")
        .text("title", "report")
        .part(Part::file("file", "r.csv", "a,b\n1,2").mime("text/csv"));
    let mut request = Request::new("upload", [with_method(Method::Post), with_body(body)]);
    request.set_base_url(&format!("http://{addr}"));

    let echoed = request.send().await.text().unwrap();

    assert!(echoed.contains("multipart/form-data; boundary=courier-boundary"));
    assert!(echoed.contains("filename=\"r.csv\""));
    assert!(echoed.ends_with("--courier-boundary--\r\n"));
}

#[tokio::test]
async fn test_client_applies_config() {
    init_tracing();
    let addr = echo_server(202).await;
    let config = ClientConfig {
        base_url: Some(format!("http://{addr}/v1")),
        headers: [("User-Agent".to_string(), "courier-it".to_string())].into(),
        ..ClientConfig::default()
    };
    let client = Client::from_config(config).unwrap();
    let request = Request::new("/items", []);

    let first = client.send(&request).await;
    let second = client.send(&request).await;

    for response in [first, second] {
        assert_eq!(response.status(), Some(202));
        let echoed = response.text().unwrap().to_ascii_lowercase();
        assert!(echoed.starts_with("get /v1/items http/1.1\r\n"), "{echoed}");
        assert!(echoed.contains("user-agent: courier-it\r\n"));
    }
    assert_eq!(request.path(), "/items");
}
