//! SkillMatch 客户端核心
//!
//! 与平台无关的客户端逻辑，浏览器相关的部分（存储、fetch、DOM）由 frontend 注入：
//! - `session`: 会话状态（令牌、加载标志）及其持久化
//! - `guard`: 受保护页面的三态守卫
//! - `api`: 远程 API 的请求封装
//! - `flow`: 各页面的业务流程

pub mod api;
pub mod config;
pub mod error;
pub mod flow;
pub mod guard;
pub mod request;
pub mod route;
pub mod session;
pub mod skills;
pub mod storage;

pub use api::{ApiClient, LoginOutcome};
pub use config::ClientConfig;
pub use error::{AppError, AppResult, StorageError};
pub use guard::{GuardState, RouteGuard};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use route::AppRoute;
pub use session::{Session, SessionStore};
pub use skills::SkillSelection;
pub use storage::{KeyValueStore, MemoryStore};

pub use skillmatch_shared as shared;
