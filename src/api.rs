use crate::config::ClientConfig;
use crate::error::{AppError, AppResult};
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use skillmatch_shared::protocol::{ApiRequest, GetCoursesRequest, GetProfileRequest};
use skillmatch_shared::{
    CONTENT_TYPE_JSON, Course, ErrorBody, HEADER_AUTH_TOKEN, HEADER_CONTENT_TYPE, LoginRequest,
    Profile, ProfileUpdate, RegisterRequest, SaveSkillsRequest,
};

/// 登录结果的投影
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub has_selected_skills: bool,
    pub selected_skills: Option<Vec<String>>,
}

/// 远程 API 客户端
///
/// 无状态：认证令牌由调用方（会话）逐次传入。
/// 接受任何实现了 `HttpClient` 的传输层，从而解耦具体的 HTTP 实现。
#[derive(Clone, Debug)]
pub struct ApiClient<C> {
    config: ClientConfig,
    client: C,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(config: ClientConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn transport(&self) -> &C {
        &self.client
    }

    /// 发送任意 `ApiRequest`
    ///
    /// 需要认证但没有令牌时立即失败，不发出请求。
    pub async fn call<R: ApiRequest>(&self, req: &R, token: Option<&str>) -> AppResult<R::Response> {
        let mut http = HttpRequest::new(&self.config.url(&req.path()), R::METHOD)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        if R::AUTHENTICATED {
            let token = token.ok_or(AppError::AuthRequired)?;
            http = http.with_header(HEADER_AUTH_TOKEN, token);
        }

        if R::METHOD.has_body() {
            let body = serde_json::to_string(req)
                .map_err(|e| AppError::validation(format!("Invalid request: {}", e)))?;
            http = http.with_body(body);
        }

        log::debug!("[Api] {} {}", R::METHOD.as_str(), http.url);
        let resp = self.client.send(http).await?;

        if !resp.ok() {
            return Err(Self::failure(&resp, req.failure_message()));
        }
        resp.json::<R::Response>()
    }

    /// 非 2xx：优先使用服务端的 `message`
    fn failure(resp: &HttpResponse, fallback: String) -> AppError {
        let message = serde_json::from_str::<ErrorBody>(&resp.body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback);
        log::debug!("[Api] request failed with {}: {}", resp.status, message);
        AppError::api(resp.status, message)
    }

    // =========================================================
    // 业务接口
    // =========================================================

    /// 注册，返回新令牌
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<String> {
        let req = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        Ok(self.call(&req, None).await?.token)
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.call(&req, None).await?;
        Ok(LoginOutcome {
            token: resp.token,
            has_selected_skills: resp.has_selected_skills,
            selected_skills: resp.selected_skills,
        })
    }

    pub async fn save_skills(&self, token: Option<&str>, skills: &[String]) -> AppResult<()> {
        let req = SaveSkillsRequest {
            skills: skills.to_vec(),
        };
        self.call(&req, token).await?;
        Ok(())
    }

    pub async fn get_profile(&self, token: Option<&str>) -> AppResult<Profile> {
        self.call(&GetProfileRequest, token).await
    }

    pub async fn update_profile(&self, token: Option<&str>, update: &ProfileUpdate) -> AppResult<Profile> {
        self.call(update, token).await
    }

    pub async fn get_courses(&self, token: Option<&str>, skill: &str) -> AppResult<Vec<Course>> {
        self.call(&GetCoursesRequest::new(skill), token).await
    }
}
