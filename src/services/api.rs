//! # 后端 REST API 客户端
//!
//! 所有对作品集后端的网络访问都经过 [`ApiClient`]。客户端在应用启动时根据 [`ApiConfig`]
//! 显式构造一次，作为 Tauri managed state 注入到需要它的 command 中，不存在全局单例。
//!
//! ## 端点
//! | 操作 | 方法 | 路径 |
//! |------|------|------|
//! | 列出 / 新建项目 | GET / POST | `/application/projects` |
//! | 列出 / 新建经历 | GET / POST | `/application/experiences` |
//! | 列出 / 新建博客 | GET / POST | `/application/blogs` |
//! | 列出 / 新建留言 | GET / POST | `/application/messages` |
//! | 删除留言 | DELETE | `/application/messages/{id}` |
//!
//! ## 错误处理
//! 网络失败、非 2xx 状态、响应解析失败分别对应 [`ApiError`] 的不同变体，
//! 配置不合法（地址无法解析、令牌不是合法请求头）对应 `Invalid`。
//! 列表接口返回空响应体或 `null` 时视为空集合，不是错误。
//! 不做任何重试，超时沿用 reqwest 默认行为。

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::blog::BlogPost;
use crate::models::experience::Experience;
use crate::models::message::ContactMessage;
use crate::models::project::Project;
use crate::services::config::ApiConfig;

/// 部署保护绕过请求头
pub const BYPASS_HEADER: &str = "x-vercel-protection-bypass";

/// API 调用失败的原因
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络 / 传输层失败（连接被拒、DNS 失败、连接中断等）
    #[error("网络请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    /// 后端返回了非成功状态码
    #[error("后端返回错误状态 {status}: {}", .message.as_deref().unwrap_or("无错误信息"))]
    Status {
        status: StatusCode,
        /// 响应体中的 `message` 字段（如有）
        message: Option<String>,
    },

    /// 响应体不是预期的 JSON 结构
    #[error("解析响应失败: {0}")]
    Decode(String),

    /// 配置或请求参数不合法（如令牌含非法字符）
    #[error("请求参数无效: {0}")]
    Invalid(String),
}

impl ApiError {
    /// 后端在错误响应中给出的提示信息
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// 后端资源集合
///
/// 每个集合同时支持列表（GET）和新建（POST）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Experiences,
    Blogs,
    Messages,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Projects => "/application/projects",
            Collection::Experiences => "/application/experiences",
            Collection::Blogs => "/application/blogs",
            Collection::Messages => "/application/messages",
        }
    }
}

/// 作品集后端客户端
///
/// 内部的 `reqwest::Client` 自带连接池，`clone()` 开销很小。
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// 根据配置构造客户端
    ///
    /// 配置了绕过令牌时，把它设为每个请求的默认请求头。
    ///
    /// # 错误
    /// 令牌含有非法请求头字符，或底层 HTTP 客户端构建失败时返回错误
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.bypass_token {
            let value = HeaderValue::from_str(token)
                .map_err(|e| ApiError::Invalid(format!("绕过令牌不是合法的请求头值: {}", e)))?;
            headers.insert(HeaderName::from_static(BYPASS_HEADER), value);
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ======== 列表接口 ========

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.list(Collection::Projects).await
    }

    pub async fn list_experiences(&self) -> Result<Vec<Experience>, ApiError> {
        self.list(Collection::Experiences).await
    }

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.list(Collection::Blogs).await
    }

    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        self.list(Collection::Messages).await
    }

    // ======== 写接口 ========

    /// 向指定集合提交一条新记录
    ///
    /// 请求体以 JSON 发送，成功响应的内容被忽略。
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        collection: Collection,
        payload: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(collection.path()))
            .json(payload)
            .send()
            .await?;
        read_success_body(response).await.map(|_| ())
    }

    /// 删除一条联系留言
    ///
    /// 标识符作为单个路径段追加，特殊字符会被转义。
    pub async fn delete_message(&self, id: &str) -> Result<(), ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::Invalid("留言标识符为空".to_string()));
        }

        let mut url = Url::parse(&self.url(Collection::Messages.path()))
            .map_err(|e| ApiError::Invalid(format!("后端地址无效: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Invalid("后端地址不能作为基础路径".to_string()))?
            .push(id);

        let response = self.http.delete(url).send().await?;
        read_success_body(response).await.map(|_| ())
    }

    // ======== 内部辅助 ========

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn list<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, ApiError> {
        let response = self.http.get(self.url(collection.path())).send().await?;
        let body = read_success_body(response).await?;
        decode_list(&body)
    }
}

/// 读取响应体；状态码非 2xx 时转为 [`ApiError::Status`]
async fn read_success_body(response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let body = response.bytes().await?.to_vec();

    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status,
            message: extract_message(&body),
        })
    }
}

/// 从错误响应体中提取 `message` 字段
fn extract_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

/// 解析列表响应，空响应体或 `null` 视为空集合
fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(vec![]);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if value.is_null() {
        return Ok(vec![]);
    }

    let Value::Array(elements) = value else {
        return Err(ApiError::Decode("列表响应不是 JSON 数组".to_string()));
    };

    // 逐条解析，单条记录格式不对只跳过该条，不影响其余记录
    Ok(elements
        .into_iter()
        .enumerate()
        .filter_map(|(i, element)| match serde_json::from_value(element) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("跳过无法解析的第 {} 条记录: {}", i, e);
                None
            }
        })
        .collect())
}
