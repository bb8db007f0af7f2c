//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data`로 주입된 서비스를 호출하고, 에러는 `AppError`로 전파하여
//! `ResponseError` 구현이 JSON 에러 응답으로 바꾸게 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Grant Engine, Admin Tool, Browser)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - UserService, OAuthStorage        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Stores - MongoDB / Memory                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 등록 (`POST /users`), 조회 (`GET /users/{id}`)
//! - **`auth`**: 로그인 검증 (`POST /auth/login`)
//! - **`admin`**: 관리자 전용 비밀번호 재설정, 차단, 관리자 지정, 삭제, 클라이언트 등록
//!
//! ## 입력 검증
//!
//! 요청 DTO는 `validator` derive를 사용하며 핸들러 첫 줄에서 검증합니다.
//!
//! ```rust,ignore
//! payload.validate()
//!     .map_err(|e| AppError::ValidationError(e.to_string()))?;
//! ```

pub mod admin;
pub mod auth;
pub mod users;
