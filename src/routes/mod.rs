//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Features
//!
//! - 사용자 등록/조회 API 엔드포인트
//! - 로그인 검증 API 엔드포인트
//! - 관리자 전용 API (HTTP Basic + 관리자 권한)
//! - 헬스체크 엔드포인트
//!
//! 핸들러는 `web::Data<UserService>`와 `web::Data<OAuthStorage>`를 앱 데이터로 기대합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::from(user_service))
//!     .app_data(web::Data::from(oauth_storage))
//!     .configure(configure_all_routes)
//! ```

use crate::handlers;
use crate::middlewares::SuperuserMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_admin_routes(cfg);
}

/// 사용자 관련 라우트 (인증 불필요)
///
/// - `POST /api/v1/users` - 사용자 등록
/// - `GET /api/v1/users/{id}` - 사용자 조회
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
    );
}

/// 인증 관련 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","password":"secret123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
    );
}

/// 관리자 전용 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/admin/users/{id}/password/reset \
///   -u admin:adminpass
/// ```
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(SuperuserMiddleware::new())
            .service(handlers::admin::set_password)
            .service(handlers::admin::reset_password)
            .service(handlers::admin::set_blocked)
            .service(handlers::admin::set_superuser)
            .service(handlers::admin::delete_user)
            .service(handlers::admin::register_client)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "oauth_storage_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde_json::Value;
    use crate::config::OAuthSettings;
    use crate::domain::credentials::PasswordHasher;
    use crate::repositories::memory::MemoryStore;
    use crate::services::oauth::OAuthStorage;
    use crate::services::users::UserService;

    fn services() -> (Arc<UserService>, Arc<OAuthStorage>) {
        let store = Arc::new(MemoryStore::new());
        let hasher = Arc::new(PasswordHasher::new(4, 16).unwrap());
        let user_service = Arc::new(UserService::new(store.clone(), hasher));
        let storage = Arc::new(OAuthStorage::new(
            store.clone(),
            store.clone(),
            store,
            user_service.clone(),
            OAuthSettings::default(),
        ));
        (user_service, storage)
    }

    fn basic(username: &str, password: &str) -> (header::HeaderName, String) {
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        (header::AUTHORIZATION, format!("Basic {}", encoded))
    }

    macro_rules! app {
        ($user_service:expr, $storage:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::from($user_service.clone()))
                    .app_data(web::Data::from($storage.clone()))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let (user_service, storage) = services();
        let app = app!(user_service, storage);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_create_user_with_generated_password() {
        let (user_service, storage) = services();
        let app = app!(user_service, storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(serde_json::json!({ "username": "alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let generated = body["generated_password"].as_str().unwrap().to_string();
        let id = body["user"]["id"].as_str().unwrap().to_string();
        assert!(body["user"].get("password").is_none());

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["username"], "alice");
        assert!(user.get("password").is_none());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "username": "alice", "password": generated }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_create_user_errors() {
        let (user_service, storage) = services();
        user_service.register("alice", Some("secret123")).await.unwrap();
        let app = app!(user_service, storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(serde_json::json!({ "username": "alice", "password": "other" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(serde_json::json!({ "username": "bob", "password": "x".repeat(73) }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/v1/users/missing").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_login_failure_is_unauthorized() {
        let (user_service, storage) = services();
        user_service.register("alice", Some("secret123")).await.unwrap();
        let app = app!(user_service, storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "username": "alice", "password": "Secret123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_admin_requires_credentials() {
        let (user_service, storage) = services();
        let app = app!(user_service, storage);

        let req = test::TestRequest::delete().uri("/api/v1/admin/users/any").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[actix_web::test]
    async fn test_admin_rejects_regular_and_blocked_users() {
        let (user_service, storage) = services();
        user_service.register("alice", Some("secret123")).await.unwrap();
        user_service.ensure_superuser("admin", "adminpass").await.unwrap();
        let admin = user_service.get_user_by_username("admin").await.unwrap();
        let app = app!(user_service, storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/admin/clients")
            .insert_header(basic("alice", "secret123"))
            .set_json(serde_json::json!({ "grant_types": ["password"] }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        user_service.set_blocked(admin.id(), true).await.unwrap();
        let req = test::TestRequest::post()
            .uri("/api/v1/admin/clients")
            .insert_header(basic("admin", "adminpass"))
            .set_json(serde_json::json!({ "grant_types": ["password"] }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_admin_manages_users() {
        let (user_service, storage) = services();
        let (alice, _) = user_service.register("alice", Some("secret123")).await.unwrap();
        user_service.ensure_superuser("admin", "adminpass").await.unwrap();
        let app = app!(user_service, storage);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/admin/users/{}/password", alice.id()))
            .insert_header(basic("admin", "adminpass"))
            .set_json(serde_json::json!({ "password": "changed123" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        assert!(user_service.authenticate("alice", "changed123").await.is_ok());

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/admin/users/{}/password/reset", alice.id()))
            .insert_header(basic("admin", "adminpass"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let generated = body["password"].as_str().unwrap();
        assert!(user_service.authenticate("alice", generated).await.is_ok());

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/admin/users/{}/blocked", alice.id()))
            .insert_header(basic("admin", "adminpass"))
            .set_json(serde_json::json!({ "value": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["is_blocked"], true);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/admin/users/{}/superuser", alice.id()))
            .insert_header(basic("admin", "adminpass"))
            .set_json(serde_json::json!({ "value": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["is_superuser"], true);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/users/{}", alice.id()))
            .insert_header(basic("admin", "adminpass"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        assert!(user_service.get_user(alice.id()).await.is_err());
    }

    #[actix_web::test]
    async fn test_admin_cannot_delete_self() {
        let (user_service, storage) = services();
        user_service.ensure_superuser("admin", "adminpass").await.unwrap();
        let admin = user_service.get_user_by_username("admin").await.unwrap();
        let app = app!(user_service, storage);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/users/{}", admin.id()))
            .insert_header(basic("admin", "adminpass"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_admin_registers_client() {
        let (user_service, storage) = services();
        user_service.ensure_superuser("admin", "adminpass").await.unwrap();
        let app = app!(user_service, storage);

        let req = test::TestRequest::post()
            .uri("/api/v1/admin/clients")
            .insert_header(basic("admin", "adminpass"))
            .set_json(serde_json::json!({
                "grant_types": ["authorization_code"],
                "response_types": ["code"],
                "redirect_uris": ["https://app.example.com/cb"],
                "scope": "read"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let client_id = body["client_id"].as_str().unwrap();
        let secret = body["client_secret"].as_str().unwrap();
        assert!(storage.get_client(client_id, Some(secret)).await.unwrap().is_some());
    }
}
