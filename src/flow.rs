//! 页面流程
//!
//! 每个页面的业务逻辑：调用一次 API，成功后给出要提交到会话的结果与下一个路由。
//! 网络部分是 async 的；会话提交是同步的 `commit`，由页面在拿到结果后调用，
//! 这样响应式状态不会跨 await 被借用。

#[cfg(test)]
mod tests;

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::session::SessionStore;
use crate::skills::SkillSelection;
use crate::storage::KeyValueStore;
use futures::future::join_all;
use skillmatch_shared::{Course, Profile, ProfileUpdate};

pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_NO_SKILLS_SELECTED: &str = "No skills selected";
pub const MSG_SELECT_AT_LEAST_ONE: &str = "Please select at least one skill";
pub const MSG_PROFILE_UPDATED: &str = "Profile updated successfully";

// =========================================================
// 登录 / 注册
// =========================================================

/// 认证成功，尚未提交到会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    token: String,
    skills: Option<Vec<String>>,
    next: AppRoute,
}

impl SignedIn {
    pub fn next(&self) -> AppRoute {
        self.next
    }

    /// 写入会话，返回要跳转的路由
    pub fn commit<S: KeyValueStore>(self, session: &mut SessionStore<S>) -> AppRoute {
        session.login(self.token);
        if let Some(skills) = self.skills.filter(|s| !s.is_empty()) {
            session.cache_skills(&skills);
        }
        self.next
    }
}

/// 注册表单
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.password != self.confirm_password {
            return Err(AppError::validation(MSG_PASSWORD_MISMATCH));
        }
        Ok(())
    }
}

/// 注册：校验失败时不会发出任何请求
pub async fn register<C: HttpClient>(api: &ApiClient<C>, form: &RegisterForm) -> AppResult<SignedIn> {
    form.validate()?;
    let token = api.register(&form.username, &form.email, &form.password).await?;
    Ok(SignedIn {
        token,
        skills: None,
        next: AppRoute::SelectSkills,
    })
}

/// 登录：已选过技能的用户直接进入结果页
pub async fn login<C: HttpClient>(api: &ApiClient<C>, email: &str, password: &str) -> AppResult<SignedIn> {
    let outcome = api.login(email, password).await?;
    let next = if outcome.has_selected_skills {
        AppRoute::Results
    } else {
        AppRoute::SelectSkills
    };
    Ok(SignedIn {
        token: outcome.token,
        skills: outcome.selected_skills,
        next,
    })
}

// =========================================================
// 技能选择
// =========================================================

/// 技能已保存到服务端，尚未写入本地缓存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSkills {
    skills: Vec<String>,
}

impl SavedSkills {
    pub fn commit<S: KeyValueStore>(self, session: &SessionStore<S>) -> AppRoute {
        session.cache_skills(&self.skills);
        AppRoute::Results
    }
}

pub async fn save_selection<C: HttpClient>(
    api: &ApiClient<C>,
    token: Option<&str>,
    selection: &SkillSelection,
) -> AppResult<SavedSkills> {
    if selection.is_empty() {
        return Err(AppError::validation(MSG_SELECT_AT_LEAST_ONE));
    }
    api.save_skills(token, selection.as_slice()).await?;
    Ok(SavedSkills {
        skills: selection.as_slice().to_vec(),
    })
}

// =========================================================
// 个人资料
// =========================================================

pub async fn load_profile<C: HttpClient>(api: &ApiClient<C>, token: Option<&str>) -> AppResult<Profile> {
    api.get_profile(token).await
}

/// 资料编辑表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    /// 留空表示保持原密码
    pub password: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            email: profile.email.clone(),
            password: String::new(),
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: Some(self.username.clone()),
            email: Some(self.email.clone()),
            password: Some(self.password.clone()).filter(|p| !p.is_empty()),
        }
    }
}

pub async fn update_profile<C: HttpClient>(
    api: &ApiClient<C>,
    token: Option<&str>,
    form: &ProfileForm,
) -> AppResult<Profile> {
    api.update_profile(token, &form.to_update()).await
}

// =========================================================
// 结果页
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseGroup {
    pub skill: String,
    pub courses: Vec<Course>,
}

/// 结果页要查询的技能：优先本地缓存，缓存为空时回退到资料
pub async fn selected_skills<C: HttpClient>(
    api: &ApiClient<C>,
    token: Option<&str>,
    cached: Vec<String>,
) -> AppResult<Vec<String>> {
    if !cached.is_empty() {
        return Ok(cached);
    }
    let profile = api.get_profile(token).await?;
    Ok(profile.selected_skills)
}

/// 并发查询每个技能的课程
///
/// 单个技能失败只会让它从结果中消失；只有全部失败才返回错误。
/// 每个查询成功的技能都产生一个分组（课程可能为空），分组按技能的选择顺序排列。
pub async fn load_courses<C: HttpClient>(
    api: &ApiClient<C>,
    token: Option<&str>,
    skills: &[String],
) -> AppResult<Vec<CourseGroup>> {
    if skills.is_empty() {
        return Err(AppError::validation(MSG_NO_SKILLS_SELECTED));
    }
    if token.is_none() {
        return Err(AppError::AuthRequired);
    }

    let lookups = skills.iter().map(|skill| async move {
        let result = api.get_courses(token, skill).await;
        (skill, result)
    });
    let results = join_all(lookups).await;

    let mut groups = Vec::new();
    let mut failures = 0;
    for (skill, result) in results {
        match result {
            Ok(courses) => groups.push(CourseGroup {
                skill: skill.clone(),
                courses,
            }),
            Err(e) => {
                log::debug!("[Results] lookup for {} failed: {}", skill, e);
                failures += 1;
            }
        }
    }

    if failures == skills.len() {
        return Err(AppError::AllLookupsFailed { failures });
    }
    Ok(groups)
}
