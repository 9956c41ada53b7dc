//! 浏览器 API 封装模块
//!
//! 核心 crate 中传输层与存储 trait 的浏览器实现，以及基于 History API 的路由服务。

mod http;
pub mod router;
mod storage;

pub use http::FetchHttpClient;
pub use storage::BrowserStorage;
