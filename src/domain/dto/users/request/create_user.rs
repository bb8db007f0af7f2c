//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// `password`를 생략하면 서버가 랜덤 비밀번호를 생성하여 응답으로 한 번 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자명 (1-150자, 영문/숫자와 `_ . - @`만 허용)
    #[validate(length(
        min = 1,
        max = 150,
        message = "사용자명은 1-150자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 계정 비밀번호 (선택, 최대 72바이트)
    #[serde(default)]
    #[validate(length(min = 1, message = "비밀번호는 비어 있을 수 없습니다"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: Option<String>,
}

/// 사용자명 형식 검증
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("blank_username")
            .with_message("사용자명은 필수입니다".into()));
    }
    if !trimmed.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '@')) {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, `_ . - @`만 사용 가능합니다".into()));
    }
    Ok(())
}

/// bcrypt 입력 한계(72바이트) 검증
pub(crate) fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > crate::domain::credentials::MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("비밀번호는 72바이트를 넘을 수 없습니다".into()));
    }
    Ok(())
}
