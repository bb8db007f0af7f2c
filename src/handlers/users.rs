//! # User HTTP Handlers
//!
//! 사용자 등록과 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 등록 | 201 Created |
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK |
//!
//! 비밀번호를 생략하고 등록하면 서버가 생성한 비밀번호가 응답에 한 번만 포함됩니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"alice"}'
//! ```

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::dto::users::request::CreateUserRequest,
    domain::dto::users::response::{CreateUserResponse, UserResponse},
    services::users::UserService,
};

/// 새 사용자를 등록합니다.
///
/// # Errors
///
/// * `400` - 사용자명/비밀번호 검증 실패
/// * `409` - 이미 사용 중인 사용자명
#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let (user, generated_password) = user_service
        .register(&request.username, request.password.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(CreateUserResponse {
        user: UserResponse::from(user),
        generated_password,
    }))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
