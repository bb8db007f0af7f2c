//! 로그인 검증 핸들러
//!
//! 세션이나 토큰을 발급하지 않고 자격 증명만 확인합니다.
//! 토큰 발급은 외부 그랜트 엔진이 `OAuthStorage`를 통해 처리합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::dto::users::request::LoginRequest,
    domain::dto::users::response::UserResponse,
    services::users::UserService,
};

/// 사용자명/비밀번호 로그인
///
/// 성공하면 사용자 정보를, 실패하면 401을 반환합니다.
/// 없는 사용자와 잘못된 비밀번호는 같은 응답을 받습니다.
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service
        .authenticate(&payload.username, &payload.password)
        .await?;

    log::info!("로그인 성공 - 사용자 ID: {}", user.id());

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
