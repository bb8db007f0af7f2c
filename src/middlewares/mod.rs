//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 관리자 미들웨어 (SuperuserMiddleware)
//! - `Authorization: Basic ...` 헤더 해석
//! - `UserService::authenticate`로 자격 증명 확인 (차단된 계정 거부)
//! - 관리자가 아니면 403
//! - 인증된 관리자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::SuperuserMiddleware;
//!
//! web::scope("/admin")
//!     .wrap(SuperuserMiddleware::new())
//!     .route("/users/{id}", web::delete().to(delete_user))
//! ```

pub mod superuser_middleware;
mod superuser_inner;

pub use superuser_middleware::SuperuserMiddleware;
