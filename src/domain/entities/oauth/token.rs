//! OAuth2 액세스/리프레시 토큰 엔티티

use serde::{Deserialize, Serialize};

pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// 발급된 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "_id")]
    pub id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    /// 발급 시각 (unix 초)
    pub issued_at: i64,
    /// 유효 기간 (초)
    pub expires_in: i64,
    pub client_id: String,
    pub token_type: String,
    #[serde(default)]
    pub revoked: bool,
    pub user_id: String,
}

impl Token {
    pub fn expires_at(&self) -> i64 {
        self.issued_at.saturating_add(self.expires_in)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at()
    }

    /// 폐기되지 않았고 만료되지 않은 토큰인지 확인합니다.
    pub fn is_active(&self, now: i64) -> bool {
        !self.revoked && !self.is_expired(now)
    }

    /// `now` 기준 남은 수명 (초, 음수 없음)
    pub fn remaining_lifetime(&self, now: i64) -> i64 {
        self.expires_at().saturating_sub(now).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> Token {
        Token {
            id: "1".to_string(),
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            scope: "read".to_string(),
            issued_at: 1_000,
            expires_in: 3_600,
            client_id: "client".to_string(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
            revoked: false,
            user_id: "user".to_string(),
        }
    }

    #[test]
    fn test_active_until_expiry() {
        let token = token();
        assert!(token.is_active(4_599));
        assert!(!token.is_active(4_600));
        assert!(token.is_expired(4_600));
    }

    #[test]
    fn test_revoked_token_is_inactive() {
        let mut token = token();
        token.revoked = true;
        assert!(!token.is_active(1_001));
        assert!(!token.is_expired(1_001));
    }

    #[test]
    fn test_remaining_lifetime() {
        let token = token();
        assert_eq!(token.remaining_lifetime(1_000), 3_600);
        assert_eq!(token.remaining_lifetime(10_000), 0);
    }

    #[test]
    fn test_expiry_saturates_on_huge_lifetime() {
        let mut token = token();
        token.expires_in = i64::MAX;
        assert_eq!(token.expires_at(), i64::MAX);
        assert!(token.is_active(i64::MAX - 1));
        assert_eq!(token.remaining_lifetime(i64::MIN), i64::MAX);
    }
}
