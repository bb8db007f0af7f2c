//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 트레이트 객체를 생성자로 주입받으며, `main`에서 한 번 만들어
//! `ServiceLocator`에 등록한 뒤 `web::Data`로 핸들러에 전달됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (등록, 인증, 비밀번호 재설정, 차단, 삭제)
//! - 그랜트 엔진용 OAuth2 저장소 (클라이언트, 인가 코드, 토큰)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{oauth::OAuthStorage, users::UserService};
//!
//! let user_service = Arc::new(UserService::new(store.clone(), hasher));
//! let storage = OAuthStorage::new(store.clone(), store.clone(), store, user_service.clone(), settings);
//! ```

pub mod oauth;
pub mod users;
