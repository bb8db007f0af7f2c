//! # 관리자 HTTP 핸들러
//!
//! `SuperuserMiddleware`로 보호되는 `/api/v1/admin` 스코프의 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `PUT` | `/users/{id}/password` | 비밀번호 지정 | 204 No Content |
//! | `POST` | `/users/{id}/password/reset` | 랜덤 비밀번호로 재설정 | 200 OK |
//! | `PUT` | `/users/{id}/blocked` | 차단/해제 | 200 OK |
//! | `PUT` | `/users/{id}/superuser` | 관리자 지정/해제 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//! | `POST` | `/clients` | OAuth2 클라이언트 등록 | 201 Created |
//!
//! 관리자는 자기 계정을 차단하거나 삭제하거나 관리자 권한을 해제할 수 없습니다.

use actix_web::{delete, post, put, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::dto::oauth::{ClientResponse, RegisterClientRequest},
    domain::dto::users::request::{FlagRequest, SetPasswordRequest},
    domain::dto::users::response::{GeneratedPasswordResponse, UserResponse},
    domain::models::AuthenticatedUser,
    services::oauth::OAuthStorage,
    services::users::UserService,
};

#[put("/users/{user_id}/password")]
pub async fn set_password(
    admin: AuthenticatedUser,
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<SetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    user_service.reset_password(&user_id, &payload.password).await?;
    log::info!("관리자 {} - 비밀번호 지정: {}", admin.user_id, user_id);

    Ok(HttpResponse::NoContent().finish())
}

/// 랜덤 비밀번호로 재설정하고 평문을 응답으로 한 번 돌려줍니다.
#[post("/users/{user_id}/password/reset")]
pub async fn reset_password(
    admin: AuthenticatedUser,
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let password = user_service.reset_random_password(&user_id).await?;
    log::info!("관리자 {} - 랜덤 비밀번호 재설정: {}", admin.user_id, user_id);

    Ok(HttpResponse::Ok().json(GeneratedPasswordResponse { password }))
}

#[put("/users/{user_id}/blocked")]
pub async fn set_blocked(
    admin: AuthenticatedUser,
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<FlagRequest>,
) -> Result<HttpResponse, AppError> {
    if payload.value {
        reject_self(&admin, &user_id)?;
    }

    let user = user_service.set_blocked(&user_id, payload.value).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/users/{user_id}/superuser")]
pub async fn set_superuser(
    admin: AuthenticatedUser,
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<FlagRequest>,
) -> Result<HttpResponse, AppError> {
    if !payload.value {
        reject_self(&admin, &user_id)?;
    }

    let user = user_service.set_superuser(&user_id, payload.value).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/users/{user_id}")]
pub async fn delete_user(
    admin: AuthenticatedUser,
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    reject_self(&admin, &user_id)?;

    user_service.delete_user(&user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// 클라이언트 시크릿은 이 응답으로만 전달됩니다.
#[post("/clients")]
pub async fn register_client(
    admin: AuthenticatedUser,
    storage: web::Data<OAuthStorage>,
    payload: web::Json<RegisterClientRequest>,
) -> Result<HttpResponse, AppError> {
    let client = storage.register_client(payload.into_inner()).await?;
    log::info!("관리자 {} - 클라이언트 등록: {}", admin.user_id, client.client_id);

    Ok(HttpResponse::Created().json(ClientResponse::from(client)))
}

fn reject_self(admin: &AuthenticatedUser, user_id: &str) -> Result<(), AppError> {
    if admin.user_id == user_id {
        return Err(AppError::ValidationError(
            "자기 자신의 계정에는 적용할 수 없습니다".to_string(),
        ));
    }
    Ok(())
}
