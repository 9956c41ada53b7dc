use super::*;
use crate::config::ClientConfig;
use crate::request::MockHttpClient;
use crate::storage::MemoryStore;
use serde_json::json;
use skillmatch_shared::protocol::HttpMethod;

// =========================================================
// Shared Mock Components
// =========================================================

const BASE: &str = "https://api.test/api";

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn setup_env() -> (ApiClient<MockHttpClient>, SessionStore<MemoryStore>, MemoryStore) {
    let config = ClientConfig::new(BASE);
    let storage = MemoryStore::new();
    let mut session = SessionStore::new(storage.clone(), &config);
    session.initialize();
    (ApiClient::new(config, MockHttpClient::new()), session, storage)
}

fn register_form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        username: "ann".into(),
        email: "ann@x.io".into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

fn transport(api: &ApiClient<MockHttpClient>) -> &MockHttpClient {
    api.transport()
}

// =========================================================
// Register
// =========================================================

#[tokio::test]
async fn register_mismatch_never_hits_network() {
    let (api, session, _) = setup_env();

    let err = register(&api, &register_form("secret", "Secret")).await.unwrap_err();
    assert_eq!(err.message(), "Passwords do not match");
    assert_eq!(transport(&api).request_count(), 0);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn register_commits_token_and_goes_to_skill_selection() {
    let (api, mut session, storage) = setup_env();
    transport(&api).mock_response(
        HttpMethod::Post,
        &url("/auth/register"),
        201,
        json!({ "token": "tok-1" }),
    );

    let signed_in = register(&api, &register_form("pw", "pw")).await.unwrap();
    let next = signed_in.commit(&mut session);

    assert_eq!(next, AppRoute::SelectSkills);
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn register_failure_leaves_session_untouched() {
    let (api, session, _) = setup_env();
    transport(&api).mock_response(
        HttpMethod::Post,
        &url("/auth/register"),
        400,
        json!({ "message": "User already exists" }),
    );

    let err = register(&api, &register_form("pw", "pw")).await.unwrap_err();
    assert_eq!(err.message(), "User already exists");
    assert!(!session.is_authenticated());
}

// =========================================================
// Login
// =========================================================

#[tokio::test]
async fn login_with_skills_goes_to_results_and_caches_them() {
    let (api, mut session, _) = setup_env();
    transport(&api).mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        200,
        json!({ "token": "t", "hasSelectedSkills": true, "selectedSkills": ["Python", "Go"] }),
    );

    let next = login(&api, "a@b.c", "pw").await.unwrap().commit(&mut session);
    assert_eq!(next, AppRoute::Results);
    assert!(session.is_authenticated());
    assert_eq!(
        session.cached_skills(),
        vec!["Python".to_string(), "Go".to_string()]
    );
}

#[tokio::test]
async fn login_without_skills_goes_to_selection() {
    let (api, mut session, storage) = setup_env();
    transport(&api).mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        200,
        json!({ "token": "t", "hasSelectedSkills": false }),
    );

    let signed_in = login(&api, "a@b.c", "pw").await.unwrap();
    assert_eq!(signed_in.next(), AppRoute::SelectSkills);
    signed_in.commit(&mut session);
    assert!(!storage.contains("selectedSkills"));
}

#[tokio::test]
async fn login_then_logout_clears_everything() {
    let (api, mut session, storage) = setup_env();
    transport(&api).mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        200,
        json!({ "token": "t", "hasSelectedSkills": true, "selectedSkills": ["Go"] }),
    );

    login(&api, "a@b.c", "pw").await.unwrap().commit(&mut session);
    session.logout();

    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
    assert!(storage.is_empty());
}

// =========================================================
// Select skills
// =========================================================

#[tokio::test]
async fn save_selection_requires_a_skill() {
    let (api, _, _) = setup_env();
    let err = save_selection(&api, Some("t"), &SkillSelection::new())
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Please select at least one skill");
    assert_eq!(transport(&api).request_count(), 0);
}

#[tokio::test]
async fn save_selection_caches_and_routes_to_results() {
    let (api, mut session, _) = setup_env();
    session.login("t");
    transport(&api).mock_response(HttpMethod::Post, &url("/skills"), 200, json!({ "ok": true }));

    let mut selection = SkillSelection::new();
    selection.toggle("Docker");
    selection.toggle("Git");

    let saved = save_selection(&api, session.token(), &selection).await.unwrap();
    assert_eq!(saved.commit(&session), AppRoute::Results);
    assert_eq!(
        session.cached_skills(),
        vec!["Docker".to_string(), "Git".to_string()]
    );
}

#[tokio::test]
async fn save_selection_without_token_fails_locally() {
    let (api, session, _) = setup_env();
    let selection: SkillSelection = ["Go"].into_iter().collect();

    let err = save_selection(&api, session.token(), &selection).await.unwrap_err();
    assert_eq!(err, AppError::AuthRequired);
    assert_eq!(transport(&api).request_count(), 0);
}

// =========================================================
// Profile
// =========================================================

#[test]
fn blank_password_is_not_sent() {
    let form = ProfileForm {
        username: "ann".into(),
        email: "ann@x.io".into(),
        password: String::new(),
    };
    let update = form.to_update();
    assert_eq!(update.password, None);
    assert_eq!(update.username.as_deref(), Some("ann"));

    let form = ProfileForm {
        password: "new".into(),
        ..form
    };
    assert_eq!(form.to_update().password.as_deref(), Some("new"));
}

#[tokio::test]
async fn profile_load_and_update() {
    let (api, mut session, _) = setup_env();
    session.login("t");
    transport(&api).mock_response(
        HttpMethod::Get,
        &url("/auth/profile"),
        200,
        json!({ "username": "ann", "email": "ann@x.io", "selectedSkills": ["AWS"] }),
    );
    transport(&api).mock_response(
        HttpMethod::Put,
        &url("/auth/profile"),
        200,
        json!({ "username": "annie", "email": "ann@x.io", "selectedSkills": ["AWS"] }),
    );

    let profile = load_profile(&api, session.token()).await.unwrap();
    let mut form = ProfileForm::from_profile(&profile);
    assert_eq!(form.password, "");
    form.username = "annie".into();

    let updated = update_profile(&api, session.token(), &form).await.unwrap();
    assert_eq!(updated.username, "annie");
}

// =========================================================
// Results
// =========================================================

#[tokio::test]
async fn partial_failure_omits_failed_skill() {
    let (api, _, _) = setup_env();
    transport(&api).mock_response(
        HttpMethod::Get,
        &url("/courses/Python"),
        200,
        json!([{ "title": "T1", "url": "u", "platform": "P" }]),
    );
    transport(&api).mock_response(
        HttpMethod::Get,
        &url("/courses/Go"),
        500,
        json!({ "message": "boom" }),
    );

    let skills = vec!["Python".to_string(), "Go".to_string()];
    let groups = load_courses(&api, Some("t"), &skills).await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].skill, "Python");
    assert_eq!(groups[0].courses.len(), 1);
    assert_eq!(groups[0].courses[0].title, "T1");
    assert_eq!(groups[0].courses[0].description, None);
}

#[tokio::test]
async fn total_failure_escalates() {
    let (api, _, _) = setup_env();
    transport(&api).mock_network_failure(HttpMethod::Get, &url("/courses/Go"));
    // /courses/Rust 未配置，mock 返回 404

    let skills = vec!["Go".to_string(), "Rust".to_string()];
    let err = load_courses(&api, Some("t"), &skills).await.unwrap_err();
    assert_eq!(err, AppError::AllLookupsFailed { failures: 2 });
    assert_eq!(err.message(), "Failed to load courses. Please try again.");
    assert_eq!(transport(&api).request_count(), 2);
}

#[tokio::test]
async fn groups_follow_selection_order() {
    let (api, _, _) = setup_env();
    for skill in ["Java", "AWS", "Git"] {
        transport(&api).mock_response(
            HttpMethod::Get,
            &url(&format!("/courses/{}", skill)),
            200,
            json!([{ "title": format!("{} 101", skill), "url": "u", "platform": "P" }]),
        );
    }

    let skills = vec!["Git".to_string(), "Java".to_string(), "AWS".to_string()];
    let groups = load_courses(&api, Some("t"), &skills).await.unwrap();
    let order: Vec<_> = groups.iter().map(|g| g.skill.as_str()).collect();
    assert_eq!(order, vec!["Git", "Java", "AWS"]);
}

#[tokio::test]
async fn successful_lookup_with_no_courses_keeps_its_group() {
    let (api, _, _) = setup_env();
    transport(&api).mock_response(HttpMethod::Get, &url("/courses/Python"), 200, json!([]));
    transport(&api).mock_response(
        HttpMethod::Get,
        &url("/courses/Go"),
        200,
        json!([{ "title": "Go Tour", "url": "u", "platform": "P" }]),
    );

    let skills = vec!["Python".to_string(), "Go".to_string()];
    let groups = load_courses(&api, Some("t"), &skills).await.unwrap();

    let summary: Vec<_> = groups
        .iter()
        .map(|g| (g.skill.as_str(), g.courses.len()))
        .collect();
    assert_eq!(summary, vec![("Python", 0), ("Go", 1)]);
}

#[tokio::test]
async fn no_skills_is_a_page_error() {
    let (api, _, _) = setup_env();
    let err = load_courses(&api, Some("t"), &[]).await.unwrap_err();
    assert_eq!(err.message(), "No skills selected");
    assert_eq!(transport(&api).request_count(), 0);
}

#[tokio::test]
async fn course_lookup_without_token_fails_fast() {
    let (api, _, _) = setup_env();
    let err = load_courses(&api, None, &["Go".to_string()]).await.unwrap_err();
    assert_eq!(err, AppError::AuthRequired);
    assert_eq!(transport(&api).request_count(), 0);
}

#[tokio::test]
async fn skills_come_from_cache_before_profile() {
    let (api, _, _) = setup_env();

    let skills = selected_skills(&api, Some("t"), vec!["Go".into()]).await.unwrap();
    assert_eq!(skills, vec!["Go".to_string()]);
    assert_eq!(transport(&api).request_count(), 0);

    transport(&api).mock_response(
        HttpMethod::Get,
        &url("/auth/profile"),
        200,
        json!({ "username": "u", "email": "e", "selectedSkills": ["React"] }),
    );
    let skills = selected_skills(&api, Some("t"), Vec::new()).await.unwrap();
    assert_eq!(skills, vec!["React".to_string()]);
}
