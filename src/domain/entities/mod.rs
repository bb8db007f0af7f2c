//! 도메인 엔티티 모듈
//!
//! 저장소에 기록되는 레코드 타입과 그에 대한 순수 연산을 정의합니다.
//!
//! - [`users`] - 사용자 계정과 비밀번호 관리
//! - [`oauth`] - OAuth2 클라이언트, 인가 코드, 토큰

pub mod oauth;
pub mod users;
