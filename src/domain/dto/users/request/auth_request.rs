//! 인증 및 관리자 요청 DTO
//!
//! 로그인, 관리자 비밀번호 재설정, 계정 플래그 변경 요청을 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use super::create_user::validate_password_bytes;

/// 로그인 요청 구조체
///
/// 길이 제한은 두지 않습니다. 72바이트를 넘는 비밀번호는 검증 단계에서 불일치로 처리됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 관리자 비밀번호 설정 요청
#[derive(Debug, Deserialize, Validate)]
pub struct SetPasswordRequest {
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,
}

/// 불리언 플래그 변경 요청 (`is_blocked`, `is_superuser`)
#[derive(Debug, Deserialize)]
pub struct FlagRequest {
    pub value: bool,
}
