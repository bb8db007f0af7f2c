//! User Entity Implementation
//!
//! 사용자 계정 엔티티와 비밀번호 관리 연산입니다.
//! 저장되는 자격 증명은 항상 [`PasswordHasher`]의 출력이며, 평문은 필드로 존재하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::credentials::{CredentialError, PasswordHash, PasswordHasher};

/// 사용자 엔티티
///
/// `id`와 `username`은 생성 후 변경되지 않습니다.
/// 비밀번호는 `set_password` / `set_random_password`로만 바뀝니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    id: String,
    /// 사용자 이름 (unique)
    username: String,
    /// bcrypt 해시
    password: PasswordHash,
    /// 관리자 여부
    #[serde(default)]
    is_superuser: bool,
    /// 차단 여부
    #[serde(default)]
    is_blocked: bool,
    /// 생성 시간
    created_at: DateTime<Utc>,
    /// 수정 시간
    updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자를 생성합니다.
    ///
    /// 비밀번호가 주어지면 그 값을, 없으면 랜덤 비밀번호를 해싱합니다.
    /// 랜덤 비밀번호를 사용한 경우 생성된 평문이 함께 반환됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let (user, generated) = User::new("alice", Some("secret123"), &hasher)?;
    /// assert!(generated.is_none());
    ///
    /// let (user, generated) = User::new("bob", None, &hasher)?;
    /// let plaintext = generated.unwrap(); // 한 번만 전달됨
    /// ```
    pub fn new(
        username: impl Into<String>,
        password: Option<&str>,
        hasher: &PasswordHasher,
    ) -> Result<(Self, Option<String>), CredentialError> {
        match password {
            Some(plaintext) => Ok((Self::with_password(username, plaintext, hasher)?, None)),
            None => {
                let (user, plaintext) = Self::with_random_password(username, hasher)?;
                Ok((user, Some(plaintext)))
            }
        }
    }

    /// 호출자가 지정한 비밀번호로 사용자를 생성합니다.
    pub fn with_password(
        username: impl Into<String>,
        plaintext: &str,
        hasher: &PasswordHasher,
    ) -> Result<Self, CredentialError> {
        Ok(Self::from_hash(username.into(), hasher.hash(plaintext)?))
    }

    /// 랜덤 비밀번호로 사용자를 생성하고 평문을 반환합니다.
    pub fn with_random_password(
        username: impl Into<String>,
        hasher: &PasswordHasher,
    ) -> Result<(Self, String), CredentialError> {
        let (plaintext, hash) = hasher.hash_random()?;
        Ok((Self::from_hash(username.into(), hash), plaintext))
    }

    fn from_hash(username: String, password: PasswordHash) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password,
            is_superuser: false,
            is_blocked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// 비밀번호를 교체합니다. 이전 해시는 복구할 수 없게 덮어씁니다.
    ///
    /// 실패하면 기존 해시는 그대로 유지됩니다.
    pub fn set_password(&mut self, plaintext: &str, hasher: &PasswordHasher) -> Result<(), CredentialError> {
        self.password = hasher.hash(plaintext)?;
        self.touch();
        Ok(())
    }

    /// 랜덤 비밀번호로 교체하고 생성된 평문을 반환합니다.
    pub fn set_random_password(&mut self, hasher: &PasswordHasher) -> Result<String, CredentialError> {
        let (plaintext, hash) = hasher.hash_random()?;
        self.password = hash;
        self.touch();
        Ok(plaintext)
    }

    /// 후보 비밀번호를 검증합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 일치
    /// * `Ok(false)` - 불일치
    /// * `Err(CredentialError::MalformedHash)` - 저장된 해시 손상
    pub fn verify_password(&self, candidate: &str, hasher: &PasswordHasher) -> Result<bool, CredentialError> {
        hasher.verify(candidate, &self.password)
    }

    /// 저장된 해시가 현재 설정보다 약한 cost를 사용하는지 확인합니다.
    pub fn password_needs_rehash(&self, hasher: &PasswordHasher) -> Result<bool, CredentialError> {
        hasher.needs_rehash(&self.password)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password
    }

    pub fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    pub fn is_blocked(&self) -> bool {
        self.is_blocked
    }

    /// 로그인 가능한 계정인지 확인합니다.
    pub fn is_active(&self) -> bool {
        !self.is_blocked
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.is_blocked = blocked;
        self.touch();
    }

    pub fn set_superuser(&mut self, superuser: bool) {
        self.is_superuser = superuser;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4, 16).unwrap()
    }

    #[test]
    fn test_set_password_then_verify() {
        let hasher = hasher();
        let (mut user, _) = User::new("alice", None, &hasher).unwrap();

        user.set_password("secret123", &hasher).unwrap();
        assert!(user.verify_password("secret123", &hasher).unwrap());
    }

    #[test]
    fn test_verify_fails_for_different_password() {
        let hasher = hasher();
        let user = User::with_password("alice", "secret123", &hasher).unwrap();

        assert!(!user.verify_password("secret124", &hasher).unwrap());
    }

    #[test]
    fn test_random_password_verifies() {
        let hasher = hasher();
        let (mut user, _) = User::new("alice", Some("initial"), &hasher).unwrap();

        let plaintext = user.set_random_password(&hasher).unwrap();
        assert!(user.verify_password(&plaintext, &hasher).unwrap());
        assert!(!user.verify_password("initial", &hasher).unwrap());
    }

    #[test]
    fn test_random_passwords_are_distinct() {
        let hasher = hasher();
        let (mut user, _) = User::new("alice", Some("initial"), &hasher).unwrap();

        let plaintexts: HashSet<String> = (0..1000)
            .map(|_| user.set_random_password(&hasher).unwrap())
            .collect();
        assert_eq!(plaintexts.len(), 1000);
    }

    #[test]
    fn test_stored_hash_never_equals_plaintext() {
        let hasher = hasher();
        let user = User::with_password("alice", "secret123", &hasher).unwrap();

        assert_ne!(user.password_hash().as_str(), "secret123");
    }

    #[test]
    fn test_password_is_case_sensitive() {
        let hasher = hasher();
        let user = User::with_password("alice", "secret123", &hasher).unwrap();

        assert!(user.verify_password("secret123", &hasher).unwrap());
        assert!(!user.verify_password("Secret123", &hasher).unwrap());
    }

    #[test]
    fn test_construction_without_password_generates_one() {
        let hasher = hasher();
        let (user, generated) = User::new("alice", None, &hasher).unwrap();

        let plaintext = generated.expect("generated password must be returned");
        assert!(!user.password_hash().as_str().is_empty());
        assert!(user.verify_password(&plaintext, &hasher).unwrap());
    }

    #[test]
    fn test_construction_with_password_does_not_generate() {
        let hasher = hasher();
        let (user, generated) = User::new("alice", Some("secret123"), &hasher).unwrap();

        assert!(generated.is_none());
        assert!(user.verify_password("secret123", &hasher).unwrap());
    }

    #[test]
    fn test_empty_password_rejected_and_hash_kept() {
        let hasher = hasher();
        let mut user = User::with_password("alice", "secret123", &hasher).unwrap();

        assert!(matches!(user.set_password("", &hasher), Err(CredentialError::EmptyPassword)));
        assert!(user.verify_password("secret123", &hasher).unwrap());
    }

    #[test]
    fn test_defaults_and_flags() {
        let hasher = hasher();
        let mut user = User::with_password("alice", "secret123", &hasher).unwrap();

        assert!(!user.is_superuser());
        assert!(!user.is_blocked());
        assert!(user.is_active());
        assert!(Uuid::parse_str(user.id()).is_ok());

        user.set_blocked(true);
        user.set_superuser(true);
        assert!(!user.is_active());
        assert!(user.is_superuser());
        assert!(user.updated_at() >= user.created_at());
    }

    #[test]
    fn test_serialization_keeps_hash_and_id() {
        let hasher = hasher();
        let user = User::with_password("alice", "secret123", &hasher).unwrap();

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], user.id());
        assert_eq!(json["password"], user.password_hash().as_str());

        let restored: User = serde_json::from_value(json).unwrap();
        assert!(restored.verify_password("secret123", &hasher).unwrap());
    }
}
