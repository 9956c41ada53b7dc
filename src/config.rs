// =========================================================
// 客户端配置 (Client Configuration)
// =========================================================

/// 默认值：未提供构建变量时使用
pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_SKILLS_KEY: &str = "selectedSkills";

/// 客户端配置
///
/// API 地址与本地存储键名都集中在这里，其余模块只读取它。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_key: String,
    pub skills_key: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            skills_key: DEFAULT_SKILLS_KEY.to_string(),
        }
    }

    /// 读取外部变量，读不到或为空就用默认值
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
