//! OAuth2 인가 서버 저장소 백엔드
//!
//! OAuth2 그랜트 엔진이 사용하는 저장 모델(사용자, 클라이언트, 인가 코드, 토큰)과
//! bcrypt 기반 자격 증명 관리를 제공하는 Rust 서비스입니다.
//!
//! # Features
//!
//! - **자격 증명 관리**: bcrypt 해싱, 랜덤 비밀번호 생성, 상수 시간 검증, cost 상향 재해싱
//! - **사용자 관리**: 등록, 로그인 검증, 비밀번호 재설정, 차단, 관리자 지정, 삭제
//! - **OAuth2 저장소**: 클라이언트, 인가 코드(PKCE), 액세스/리프레시 토큰
//! - **명시적 DI**: `main`에서 만드는 `ServiceLocator`와 생성자 주입
//! - **MongoDB**: 영구 저장 (또는 인메모리 저장소)
//! - **Redis**: 토큰 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserService, OAuthStorage
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Stores      │ ← UserStore, ClientStore, ...
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 MemoryStore)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use oauth_storage_backend::domain::credentials::PasswordHasher;
//! use oauth_storage_backend::repositories::MemoryStore;
//! use oauth_storage_backend::services::users::UserService;
//!
//! let store = Arc::new(MemoryStore::new());
//! let user_service = UserService::new(store, Arc::new(PasswordHasher::from_config()?));
//!
//! let (user, generated) = user_service.register("alice", None).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
