//! OAuth2 인가 코드 엔티티 (PKCE 지원)

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::utils::string_utils::constant_time_eq;

/// 발급된 인가 코드
///
/// `auth_time`은 발급 시각(unix 초), `expires_in`은 유효 기간(초)입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationCode {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub response_type: String,
    pub scope: String,
    pub auth_time: i64,
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_challenge_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub user_id: String,
}

impl AuthorizationCode {
    pub fn expires_at(&self) -> i64 {
        self.auth_time.saturating_add(self.expires_in)
    }

    /// `now`(unix 초) 시점에 만료되었는지 확인합니다.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at()
    }

    /// PKCE code verifier를 검증합니다.
    ///
    /// challenge가 없으면 검증할 것이 없으므로 `true`입니다.
    /// method가 없으면 `plain`으로 취급합니다.
    pub fn check_code_challenge(&self, code_verifier: &str) -> bool {
        let Some(challenge) = self.code_challenge.as_deref() else {
            return true;
        };

        match self.code_challenge_method.as_deref().unwrap_or("plain") {
            "plain" => constant_time_eq(challenge.as_bytes(), code_verifier.as_bytes()),
            "S256" => {
                let digest = Sha256::digest(code_verifier.as_bytes());
                let encoded = URL_SAFE_NO_PAD.encode(digest);
                constant_time_eq(challenge.as_bytes(), encoded.as_bytes())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(challenge: Option<&str>, method: Option<&str>) -> AuthorizationCode {
        AuthorizationCode {
            id: "1".to_string(),
            code: "abc".to_string(),
            client_id: "client".to_string(),
            redirect_uri: "https://app.example.com/callback".to_string(),
            response_type: "code".to_string(),
            scope: "read".to_string(),
            auth_time: 1_000,
            expires_in: 300,
            code_challenge: challenge.map(str::to_string),
            code_challenge_method: method.map(str::to_string),
            nonce: None,
            user_id: "user".to_string(),
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let code = code(None, None);
        assert!(!code.is_expired(1_299));
        assert!(code.is_expired(1_300));
        assert_eq!(code.expires_at(), 1_300);
    }

    #[test]
    fn test_expiry_saturates_on_huge_lifetime() {
        let mut code = code(None, None);
        code.expires_in = i64::MAX;
        assert_eq!(code.expires_at(), i64::MAX);
        assert!(!code.is_expired(1_300));
    }

    #[test]
    fn test_no_challenge_always_passes() {
        assert!(code(None, None).check_code_challenge("anything"));
    }

    #[test]
    fn test_plain_challenge() {
        let code = code(Some("verifier"), Some("plain"));
        assert!(code.check_code_challenge("verifier"));
        assert!(!code.check_code_challenge("other"));

        let implicit_plain = self::code(Some("verifier"), None);
        assert!(implicit_plain.check_code_challenge("verifier"));
    }

    #[test]
    fn test_s256_challenge_rfc7636_vector() {
        // RFC 7636 Appendix B
        let code = code(Some("E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"), Some("S256"));
        assert!(code.check_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"));
        assert!(!code.check_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXl"));
        // challenge 값을 그대로 verifier로 보내는 것은 plain 방식이므로 거부
        assert!(!code.check_code_challenge("E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"));
    }

    #[test]
    fn test_unknown_method_fails() {
        assert!(!code(Some("verifier"), Some("S512")).check_code_challenge("verifier"));
    }
}
