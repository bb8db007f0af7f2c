//! OAuth2 클라이언트 엔티티

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::string_utils::{constant_time_eq, split_scope};

/// 등록된 OAuth2 클라이언트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    /// 공개 식별자 (unique)
    pub client_id: String,
    /// 비밀 값. 기밀 클라이언트 인증에 사용
    pub client_secret: String,
    /// 허용된 grant type (`authorization_code`, `refresh_token`, `password` 등)
    pub grant_types: Vec<String>,
    /// 허용된 response type (`code`, `token` 등)
    pub response_types: Vec<String>,
    /// 등록된 리다이렉트 URI 목록
    pub redirect_uris: Vec<String>,
    /// 공백으로 구분된 허용 scope
    pub scope: String,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// 제시된 시크릿이 등록된 값과 같은지 확인합니다.
    pub fn check_secret(&self, client_secret: &str) -> bool {
        constant_time_eq(self.client_secret.as_bytes(), client_secret.as_bytes())
    }

    pub fn check_grant_type(&self, grant_type: &str) -> bool {
        self.grant_types.iter().any(|g| g == grant_type)
    }

    pub fn check_response_type(&self, response_type: &str) -> bool {
        self.response_types.iter().any(|r| r == response_type)
    }

    /// 리다이렉트 URI는 등록된 값과 정확히 일치해야 합니다.
    pub fn check_redirect_uri(&self, redirect_uri: &str) -> bool {
        self.redirect_uris.iter().any(|uri| uri == redirect_uri)
    }

    /// 요청된 scope가 모두 허용 목록에 포함되는지 확인합니다.
    pub fn check_scope(&self, requested: &str) -> bool {
        let allowed: Vec<&str> = split_scope(&self.scope).collect();
        split_scope(requested).all(|s| allowed.contains(&s))
    }

    /// 첫 번째로 등록된 리다이렉트 URI
    pub fn default_redirect_uri(&self) -> Option<&str> {
        self.redirect_uris.first().map(String::as_str)
    }
}
