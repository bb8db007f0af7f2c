//! # Domain Models Module
//!
//! 저장되지 않는 도메인 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): 저장소에 기록되는 레코드, 고유 ID와 생명주기를 가짐
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! └── auth/
//!     └── authenticated_user.rs   ← 관리자 미들웨어가 요청에 첨부하는 인증 정보
//! ```

pub mod auth;

pub use auth::authenticated_user::AuthenticatedUser;
