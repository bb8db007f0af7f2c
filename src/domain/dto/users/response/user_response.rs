use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub is_superuser: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            is_superuser: user.is_superuser(),
            is_blocked: user.is_blocked(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// 사용자 생성 응답 DTO
///
/// 서버가 비밀번호를 생성한 경우에만 `generated_password`가 포함됩니다.
/// 이 응답 이후로 평문은 어디에서도 다시 얻을 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_password: Option<String>,
}

/// 랜덤 비밀번호 재설정 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPasswordResponse {
    pub password: String,
}
