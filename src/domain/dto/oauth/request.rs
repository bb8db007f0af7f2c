//! OAuth2 저장소 입력 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

/// 클라이언트 등록 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterClientRequest {
    #[validate(length(min = 1, message = "grant type을 하나 이상 지정해야 합니다"))]
    pub grant_types: Vec<String>,

    #[serde(default)]
    pub response_types: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_redirect_uris"))]
    pub redirect_uris: Vec<String>,

    #[serde(default)]
    pub scope: String,
}

fn validate_redirect_uris(uris: &[String]) -> Result<(), ValidationError> {
    for uri in uris {
        if !(uri.starts_with("https://") || uri.starts_with("http://")) {
            return Err(ValidationError::new("invalid_redirect_uri")
                .with_message("리다이렉트 URI는 http(s) 절대 URL이어야 합니다".into()));
        }
    }
    Ok(())
}

/// 인가 코드 발급 입력
///
/// 코드 값, 발급 시각, 수명은 저장소가 채웁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthorizationCode {
    pub client_id: String,
    pub redirect_uri: String,
    pub response_type: String,
    pub scope: String,
    pub user_id: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code_challenge: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code_challenge_method: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub nonce: Option<String>,
}

/// 토큰 발급 입력
///
/// 토큰 값, 발급 시각, 수명은 저장소가 채웁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewToken {
    pub client_id: String,
    pub scope: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_client_request_validation() {
        let request: RegisterClientRequest = serde_json::from_str(
            r#"{"grant_types": ["authorization_code"], "redirect_uris": ["https://app.example.com/cb"]}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert!(request.scope.is_empty());

        let no_grants: RegisterClientRequest = serde_json::from_str(r#"{"grant_types": []}"#).unwrap();
        assert!(no_grants.validate().is_err());

        let bad_uri: RegisterClientRequest = serde_json::from_str(
            r#"{"grant_types": ["password"], "redirect_uris": ["app://callback"]}"#,
        )
        .unwrap();
        assert!(bad_uri.validate().is_err());
    }

    #[test]
    fn test_new_authorization_code_blank_challenge_is_none() {
        let input: NewAuthorizationCode = serde_json::from_str(
            r#"{"client_id": "c", "redirect_uri": "https://a/cb", "response_type": "code",
                "scope": "read", "user_id": "u", "code_challenge": "  "}"#,
        )
        .unwrap();
        assert!(input.code_challenge.is_none());
        assert!(input.nonce.is_none());
    }
}
