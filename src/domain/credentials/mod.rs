//! Credentials Module
//!
//! 사용자 비밀번호의 해싱, 랜덤 생성, 검증을 담당합니다.
//! 평문은 해싱 직후 버려지며, 랜덤 생성된 평문만 호출자에게 한 번 반환됩니다.
//!
//! # 구성
//!
//! - [`password`] - `PasswordHasher`, `PasswordHash`, `CredentialError`
//! - [`generator`] - CSPRNG 기반 임시 비밀번호/토큰 생성

pub mod generator;
pub mod password;

pub use generator::{generate_password, generate_token};
pub use password::{CredentialError, PasswordHash, PasswordHasher, MAX_PASSWORD_BYTES};
