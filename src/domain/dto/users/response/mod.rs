//! # 사용자 관련 응답 DTO 모듈
//!
//! 서비스 처리 결과를 클라이언트에게 전달하는 응답 구조입니다.
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "user": {
//!     "id": "0b6f1c2e-4d0a-4c57-9f57-3f1f8e0c2b1a",
//!     "username": "alice",
//!     "is_superuser": false,
//!     "is_blocked": false,
//!     "created_at": "2026-01-01T00:00:00Z",
//!     "updated_at": "2026-01-01T00:00:00Z"
//!   },
//!   "generated_password": "q7Rk#pX2m@Zt9wHe"
//! }
//! ```

pub mod user_response;

pub use user_response::{CreateUserResponse, GeneratedPasswordResponse, UserResponse};
