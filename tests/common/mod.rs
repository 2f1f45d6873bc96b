//! A tiny HTTP responder standing in for a node. Every request is recorded and
//! answered by a handler; connections are closed after each response.

#![allow(dead_code)]

use rpc_toolkit::{RpcClient, RpcConfig};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const USER: &str = "alice";
pub const PASS: &str = "s3cret:with:colons";

#[derive(Debug, Clone)]
pub struct Captured {
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Captured {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }

    pub fn method(&self) -> String {
        self.json()["method"].as_str().unwrap_or_default().to_owned()
    }
}

pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Reply { status: 200, body: body.into(), delay: None }
    }

    pub fn result(result: Value) -> Self {
        Reply::ok(serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Reply { status, body: body.into(), delay: None }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct MockNode {
    pub url: String,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl MockNode {
    pub async fn spawn<F>(handler: F) -> MockNode
    where
        F: Fn(&Captured) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler = Arc::new(handler);

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let recorded = recorded.clone();
                let handler = handler.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, recorded, handler).await;
                });
            }
        });

        MockNode { url, requests }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests().iter().map(Captured::method).collect()
    }

    pub fn config(&self) -> RpcConfig {
        RpcConfig::new(&self.url, Some(USER.to_owned()), Some(PASS.to_owned())).unwrap()
    }

    pub fn client(&self) -> RpcClient {
        RpcClient::new(self.config()).unwrap()
    }
}

async fn serve<F>(
    mut stream: TcpStream,
    recorded: Arc<Mutex<Vec<Captured>>>,
    handler: Arc<F>,
) -> std::io::Result<()>
where
    F: Fn(&Captured) -> Reply,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let headers: HashMap<String, String> = head
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_owned()))
        .collect();
    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..]).into_owned();

    let captured = Captured { headers, body };
    let reply = (*handler)(&captured);
    recorded.lock().unwrap().push(captured);

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reason(reply.status),
        reply.body.len(),
        reply.body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
