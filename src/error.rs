//! 错误类型
//!
//! 所有错误最终都以一条可读消息呈现在发起操作的页面上，
//! 没有任何一种错误会终止应用。

use thiserror::Error;

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// 客户端校验失败，请求不会发出
    #[error("{0}")]
    Validation(String),

    /// 需要令牌但本地没有
    #[error("not authenticated")]
    AuthRequired,

    /// 服务端返回非 2xx
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 请求未能完成
    #[error("Network error: {0}")]
    Network(String),

    /// 响应体无法解析
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 多请求视图中每一个请求都失败了
    #[error("Failed to load courses. Please try again.")]
    AllLookupsFailed { failures: usize },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// 页面内联展示的消息
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

// =========================================================
// 存储错误
// =========================================================

/// 本地持久化存储的错误，会在 `SessionStore` 内部被吸收
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage operation `{op}` failed: {detail}")]
    Operation { op: &'static str, detail: String },
}

impl StorageError {
    pub fn operation(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Operation {
            op,
            detail: detail.into(),
        }
    }
}
