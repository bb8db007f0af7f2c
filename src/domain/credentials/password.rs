//! bcrypt 기반 비밀번호 해싱 및 검증
//!
//! 해시 문자열은 `$2b$<cost>$<salt><digest>` 형식으로 알고리즘 버전과 cost를 함께 담습니다.
//! 검증은 저장된 해시에 기록된 파라미터를 그대로 사용하므로, 설정된 cost가 바뀌어도
//! 과거에 만든 해시는 계속 검증됩니다.

use std::fmt;
use bcrypt::HashParts;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::config::PasswordConfig;
use super::generator::generate_password;

/// bcrypt가 실제로 사용하는 최대 입력 길이 (바이트)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// bcrypt가 허용하는 cost 범위
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// 랜덤 비밀번호 길이 범위
pub const MIN_RANDOM_PASSWORD_LENGTH: usize = 12;
pub const DEFAULT_RANDOM_PASSWORD_LENGTH: usize = 16;

/// 자격 증명 처리 에러
///
/// 비밀번호 불일치는 이 타입으로 표현하지 않습니다 (`Ok(false)`).
#[derive(Error, Debug)]
pub enum CredentialError {
    /// 빈 평문으로 해시를 만들려는 프로그래밍 오류
    #[error("password must not be empty")]
    EmptyPassword,

    /// bcrypt 입력 한계를 넘는 평문
    #[error("password must not exceed 72 bytes")]
    PasswordTooLong,

    /// 저장된 해시를 해석할 수 없음 (손상된 레코드)
    #[error("stored credential is malformed: {0}")]
    MalformedHash(String),

    /// KDF 실행 실패
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// 지원하지 않는 bcrypt cost
    #[error("bcrypt cost {0} is outside the supported range 4..=31")]
    InvalidCost(u32),
}

impl CredentialError {
    /// 호출자가 잘못된 값을 넘긴 경우인지 확인합니다.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CredentialError::EmptyPassword | CredentialError::PasswordTooLong)
    }
}

/// KDF 출력 값
///
/// [`PasswordHasher`]를 통해서만 만들어지거나 저장소에서 읽어옵니다.
/// 로그나 디버그 출력에 해시가 노출되지 않도록 `Debug`/`Display`는 가려집니다.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// 저장소에 기록할 해시 문자열
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 저장소에서 읽은 해시 문자열을 감쌉니다.
    pub(crate) fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// 해시에 기록된 파라미터를 해석합니다.
    fn parts(&self) -> Result<HashParts, CredentialError> {
        self.0
            .parse::<HashParts>()
            .map_err(|e| CredentialError::MalformedHash(e.to_string()))
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// 비밀번호 해싱 / 검증기
///
/// # 예제
///
/// ```rust,ignore
/// let hasher = PasswordHasher::new(12, 16)?;
///
/// let hash = hasher.hash("secret123")?;
/// assert!(hasher.verify("secret123", &hash)?);
/// assert!(!hasher.verify("Secret123", &hash)?);
///
/// let (plaintext, hash) = hasher.hash_random()?;
/// assert!(hasher.verify(&plaintext, &hash)?);
/// ```
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    random_password_length: usize,
}

impl PasswordHasher {
    /// 새 해셔를 생성합니다.
    ///
    /// `random_password_length`는 `12..=72` 범위로 보정됩니다.
    ///
    /// # Errors
    ///
    /// * `CredentialError::InvalidCost` - cost가 4..=31 범위를 벗어난 경우
    pub fn new(cost: u32, random_password_length: usize) -> Result<Self, CredentialError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(CredentialError::InvalidCost(cost));
        }

        Ok(Self {
            cost,
            random_password_length: random_password_length
                .clamp(MIN_RANDOM_PASSWORD_LENGTH, MAX_PASSWORD_BYTES),
        })
    }

    /// 환경 설정(`BCRYPT_COST`, `RANDOM_PASSWORD_LENGTH`)으로 해셔를 생성합니다.
    pub fn from_config() -> Result<Self, CredentialError> {
        Self::new(PasswordConfig::bcrypt_cost(), PasswordConfig::random_password_length())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn random_password_length(&self) -> usize {
        self.random_password_length
    }

    /// 평문을 해싱합니다. 매 호출마다 새 솔트가 생성됩니다.
    ///
    /// # Errors
    ///
    /// * `CredentialError::EmptyPassword` - 빈 평문
    /// * `CredentialError::PasswordTooLong` - 72바이트 초과 (bcrypt의 조용한 절삭 방지)
    /// * `CredentialError::Hashing` - KDF 실행 실패
    pub fn hash(&self, plaintext: &str) -> Result<PasswordHash, CredentialError> {
        if plaintext.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(CredentialError::PasswordTooLong);
        }

        bcrypt::hash(plaintext, self.cost)
            .map(PasswordHash)
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    /// 랜덤 평문을 생성하고 같은 경로로 해싱합니다.
    ///
    /// 반환된 평문은 호출자에게 한 번 전달될 뿐, 어디에도 저장되거나 기록되지 않습니다.
    pub fn hash_random(&self) -> Result<(String, PasswordHash), CredentialError> {
        let plaintext = generate_password(self.random_password_length);
        let hash = self.hash(&plaintext)?;
        Ok((plaintext, hash))
    }

    /// 후보 평문이 저장된 해시와 일치하는지 확인합니다.
    ///
    /// bcrypt의 상수 시간 비교를 사용합니다. 72바이트를 넘는 후보는 절삭으로 인한
    /// 오탐을 막기 위해 항상 불일치로 처리합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 일치
    /// * `Ok(false)` - 불일치
    ///
    /// # Errors
    ///
    /// * `CredentialError::MalformedHash` - 저장된 해시를 해석할 수 없음
    pub fn verify(&self, candidate: &str, hash: &PasswordHash) -> Result<bool, CredentialError> {
        if candidate.len() > MAX_PASSWORD_BYTES {
            hash.parts()?;
            return Ok(false);
        }

        bcrypt::verify(candidate, hash.as_str())
            .map_err(|e| CredentialError::MalformedHash(e.to_string()))
    }

    /// 저장된 해시의 cost가 현재 설정보다 낮은지 확인합니다.
    pub fn needs_rehash(&self, hash: &PasswordHash) -> Result<bool, CredentialError> {
        Ok(hash.parts()?.get_cost() < self.cost)
    }
}
