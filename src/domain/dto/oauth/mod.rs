//! OAuth2 저장소 DTO
//!
//! - [`request`] - 클라이언트 등록 요청, 인가 코드 / 토큰 발급 입력
//! - [`response`] - 클라이언트 등록 응답

pub mod request;
pub mod response;

pub use request::{NewAuthorizationCode, NewToken, RegisterClientRequest};
pub use response::ClientResponse;
