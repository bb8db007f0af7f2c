//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 길이, 문자 집합, 바이트 한계 (`validator`)
//! 3. **비즈니스 검증**: 중복 사용자명 등은 서비스 계층에서 처리
//!
//! 검증 실패는 핸들러에서 `AppError::ValidationError`(400)로 변환됩니다.

pub mod auth_request;
pub mod create_user;

pub use auth_request::{FlagRequest, LoginRequest, SetPasswordRequest};
pub use create_user::CreateUserRequest;
