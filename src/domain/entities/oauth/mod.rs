//! OAuth2 저장 엔티티
//!
//! 그랜트 엔진이 읽고 쓰는 클라이언트, 인가 코드, 토큰 레코드입니다.

pub mod authorization_code;
pub mod client;
pub mod token;

pub use authorization_code::AuthorizationCode;
pub use client::Client;
pub use token::{Token, BEARER_TOKEN_TYPE};
