//! API 客户端上下文
//!
//! 核心 crate 的 `ApiClient` 注入浏览器 fetch 传输后，通过 Context 共享给各页面。

use crate::web::FetchHttpClient;
use leptos::prelude::*;
use skillmatch::{ApiClient, ClientConfig};

pub type AppApi = ApiClient<FetchHttpClient>;

/// 构建期配置：`SKILLMATCH_API_URL` 未设置时使用默认的 `/api`
pub fn client_config() -> ClientConfig {
    ClientConfig::from_env_value(option_env!("SKILLMATCH_API_URL"))
}

pub fn provide_api(config: ClientConfig) -> AppApi {
    let api = ApiClient::new(config, FetchHttpClient);
    provide_context(api.clone());
    api
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> AppApi {
    use_context::<AppApi>().expect("ApiClient should be provided")
}
