use crate::{
    Course, LoginRequest, LoginResponse, Profile, ProfileUpdate, RegisterRequest,
    SaveSkillsRequest, TokenResponse,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or suffix), relative to the API base.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request must carry the session token.
    const AUTHENTICATED: bool;

    /// The concrete path. Defaults to `PATH`; endpoints with path parameters override it.
    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::PATH)
    }

    /// Message shown when the server fails without supplying its own.
    fn failure_message(&self) -> String;
}

/// Percent-encode a single path segment (`C++` -> `C%2B%2B`).
pub fn encode_path_segment(segment: &str) -> String {
    // form encoding turns spaces into '+', and a literal '+' is already %2B
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for RegisterRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn failure_message(&self) -> String {
        "Registration failed".to_string()
    }
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn failure_message(&self) -> String {
        "Login failed".to_string()
    }
}

/// The acknowledgement body is server-defined; it only has to be valid JSON.
impl ApiRequest for SaveSkillsRequest {
    type Response = IgnoredAny;
    const PATH: &'static str = "/skills";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;

    fn failure_message(&self) -> String {
        "Failed to save skills".to_string()
    }
}

/// Read the current user's profile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GetProfileRequest;

impl ApiRequest for GetProfileRequest {
    type Response = Profile;
    const PATH: &'static str = "/auth/profile";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn failure_message(&self) -> String {
        "Failed to get profile".to_string()
    }
}

impl ApiRequest for ProfileUpdate {
    type Response = Profile;
    const PATH: &'static str = "/auth/profile";
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTHENTICATED: bool = true;

    fn failure_message(&self) -> String {
        "Failed to update profile".to_string()
    }
}

/// List the courses recommended for one skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCoursesRequest {
    #[serde(skip)]
    pub skill: String,
}

impl GetCoursesRequest {
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
        }
    }
}

impl ApiRequest for GetCoursesRequest {
    type Response = Vec<Course>;
    const PATH: &'static str = "/courses";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}/{}", Self::PATH, encode_path_segment(&self.skill)))
    }

    fn failure_message(&self) -> String {
        format!("Failed to fetch courses for {}", self.skill)
    }
}
