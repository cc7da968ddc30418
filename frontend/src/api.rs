//! API 客户端
//!
//! 所有 REST 调用的唯一出口：按 `ApiRequest` 元数据构造请求，
//! 自动附加 bearer 令牌，并把 `{success, data, error}` 信封
//! 归一化为 `Result`。

use gloo_net::http::{Request, RequestBuilder, Response};

use campushire_shared::ApiEnvelope;
use campushire_shared::protocol::{ApiRequest, HttpMethod};
use leptos::prelude::*;

use crate::web::storage;

/// API 层错误
///
/// 只区分传输失败、HTTP 非 2xx、信封内业务错误与响应解析失败，
/// 再往上统一降格为展示用的字符串。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 请求未到达服务器（网络/构建失败）
    Network(String),
    /// HTTP 非 2xx 且信封不可用
    Status(u16),
    /// 信封 `success=false` 携带的业务错误
    Api(String),
    /// 响应体无法解析
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(status) => write!(f, "Request failed with status {status}"),
            ApiError::Api(msg) => write!(f, "{msg}"),
            ApiError::Decode(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// 保持 `Copy`：事件闭包只复制这个轻量句柄，便于在组件间传递
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl ApiClient {
    /// `base_url` 为空时走同源相对路径
    pub fn new(base_url: &'static str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn attach_auth(builder: RequestBuilder) -> RequestBuilder {
        match storage::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn dispatch<R: ApiRequest>(&self, req: &R) -> Result<Response, ApiError> {
        let url = self.url(&req.path());
        let builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let builder = Self::attach_auth(builder);

        let request = match R::METHOD {
            HttpMethod::Get => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
            _ => builder
                .header("Content-Type", "application/json")
                .json(req)
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// 非 2xx：优先透出信封里的错误文案，否则退化为状态码
    async fn error_from(resp: Response) -> ApiError {
        let status = resp.status();
        match resp.json::<ApiEnvelope<serde_json::Value>>().await {
            Ok(envelope) => match envelope.error {
                Some(message) => ApiError::Api(message),
                None => ApiError::Status(status),
            },
            Err(_) => ApiError::Status(status),
        }
    }

    /// 发送请求并取出信封中的数据
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let resp = self.dispatch(req).await?;
        if !resp.ok() {
            return Err(Self::error_from(resp).await);
        }
        let envelope: ApiEnvelope<R::Response> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        envelope.into_result().map_err(ApiError::Api)
    }

    /// 只关心 success 标志的端点（删除、投递留言等）
    pub async fn send_ok<R>(&self, req: &R) -> Result<(), ApiError>
    where
        R: ApiRequest<Response = ()>,
    {
        let resp = self.dispatch(req).await?;
        if !resp.ok() {
            return Err(Self::error_from(resp).await);
        }
        let envelope: ApiEnvelope<serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Api(
                envelope.error.unwrap_or_else(|| "Request failed".to_string()),
            ))
        }
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}
