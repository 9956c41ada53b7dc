//! HTTP 传输层
//!
//! 基于 `gloo-net` 的 fetch 实现，供核心 crate 的 `ApiClient` 注入使用。

use async_trait::async_trait;
use gloo_net::http::Request;
use skillmatch::shared::protocol::HttpMethod;
use skillmatch::{AppError, AppResult, HttpClient, HttpRequest, HttpResponse};
use std::fmt::Display;

/// fetch 各阶段的失败，消息会直接显示在页面上
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchStage {
    Build,
    Send,
    Read,
}

impl FetchStage {
    fn error(self, cause: impl Display) -> AppError {
        match self {
            FetchStage::Build => AppError::network(format!("Failed to build request: {}", cause)),
            FetchStage::Send => AppError::network(cause.to_string()),
            FetchStage::Read => AppError::network(format!("Failed to read response: {}", cause)),
        }
    }
}

/// 浏览器 fetch 传输
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> AppResult<HttpResponse> {
        let builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
        };
        let builder = req
            .headers
            .iter()
            .fold(builder, |b, (key, value)| b.header(key, value));

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| FetchStage::Build.error(e))?;

        let resp = request
            .send()
            .await
            .map_err(|e| FetchStage::Send.error(e))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| FetchStage::Read.error(e))?;

        Ok(HttpResponse { status, body })
    }
}
