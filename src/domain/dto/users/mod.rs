//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs     # 회원가입 요청 (비밀번호 선택)
//! │   └── auth_request.rs    # 로그인, 관리자 비밀번호/플래그 변경
//! └── response/
//!     └── user_response.rs   # 사용자 정보, 생성된 비밀번호
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
