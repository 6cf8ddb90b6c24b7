// SPDX-License-Identifier: MPL-2.0
//! Feed loading against a throwaway local HTTP server.

use apod_gallery::apod::feed;
use apod_gallery::error::LoadError;
use apod_gallery::media::remote;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single response and returns the URL to request.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/data.json")
}

fn client() -> reqwest::Client {
    remote::build_client(Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn loads_and_sorts_a_feed() {
    let url = serve_once(
        "200 OK",
        r#"[{"date":"2024-01-01","title":"A"},{"date":"2024-01-02","title":"B"}]"#,
    )
    .await;

    let records = feed::load(client(), url).await.expect("feed loads");

    let titles: Vec<_> = records.iter().map(|r| r.title()).collect();
    assert_eq!(titles, ["B", "A"]);
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let url = serve_once("404 Not Found", "not here").await;

    match feed::load(client(), url).await {
        Err(LoadError::Transport(message)) => assert!(message.contains("404"), "{message}"),
        other => panic!("expected a transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn object_payload_is_a_shape_error() {
    let url = serve_once("200 OK", r#"{"error":"rate limited"}"#).await;

    assert!(matches!(
        feed::load(client(), url).await,
        Err(LoadError::Shape(_))
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    assert!(matches!(
        feed::load(client(), format!("http://{addr}/data.json")).await,
        Err(LoadError::Transport(_))
    ));
}

#[tokio::test]
async fn image_fetch_reports_failures_as_text() {
    let url = serve_once("500 Internal Server Error", "").await;

    let result = remote::fetch_image(client(), url).await;
    assert!(result.is_err());
}
