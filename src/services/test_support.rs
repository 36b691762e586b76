//! # 进程内模拟后端（仅测试使用）
//!
//! 基于 hyper 1 的最小 HTTP/1.1 服务器：按 (方法, 路径) 返回预设的状态码和响应体，
//! 并记录收到的每个请求，供测试断言请求内容。未配置的路由返回 404。

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::services::api::ApiClient;
use crate::services::config::ApiConfig;

/// 模拟后端收到的一次请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: String,
    path: String,
    status: u16,
    body: String,
    delay: Duration,
}

type Routes = Arc<Mutex<Vec<Route>>>;
type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

/// 模拟后端，Drop 时停止监听
pub struct MockBackend {
    addr: SocketAddr,
    routes: Routes,
    requests: Requests,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// 在随机本地端口上启动服务器
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Routes = Arc::default();
        let requests: Requests = Arc::default();

        let server = tokio::spawn(accept_loop(listener, routes.clone(), requests.clone()));

        Self {
            addr,
            routes,
            requests,
            server,
        }
    }

    /// 设置（或替换）一条路由的响应
    pub fn route(&self, method: &str, path: &str, status: u16, body: &str) {
        self.route_delayed(method, path, status, body, Duration::ZERO);
    }

    /// 同 [`MockBackend::route`]，但收到请求后等待 `delay` 才响应
    pub fn route_delayed(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: &str,
        delay: Duration,
    ) {
        let mut routes = self.routes.lock().unwrap();
        routes.retain(|r| !(r.method == method && r.path == path));
        routes.push(Route {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
            delay,
        });
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            base_url: format!("http://{}", self.addr),
            bypass_token: None,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// 按方法统计收到的请求数
    pub fn count(&self, method: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn accept_loop(listener: TcpListener, routes: Routes, requests: Requests) {
    while let Ok((stream, _)) = listener.accept().await {
        let routes = routes.clone();
        let requests = requests.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let routes = routes.clone();
                let requests = requests.clone();
                async move { Ok::<_, Infallible>(respond(req, &routes, &requests).await) }
            });
            let _ = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await;
        });
    }
}

async fn respond(
    req: Request<Incoming>,
    routes: &Routes,
    requests: &Requests,
) -> Response<Full<Bytes>> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers = req
        .headers()
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    let body = req
        .into_body()
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();

    requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let (status, payload, delay) = routes
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.method == method && r.path == path)
        .map(|r| (r.status, r.body.clone(), r.delay))
        .unwrap_or((404, r#"{"message":"not found"}"#.to_string(), Duration::ZERO));

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(payload)))
        .unwrap()
}
