//! OAuth2 저장소 관련 설정
//!
//! 인가 코드와 토큰의 수명을 정의합니다.

use std::env;

/// 인가 코드 기본 수명 (초)
pub const DEFAULT_AUTHORIZATION_CODE_EXPIRES_IN: i64 = 300;
/// 액세스 토큰 기본 수명 (초)
pub const DEFAULT_TOKEN_EXPIRES_IN: i64 = 86_400;
/// 인가 코드 최대 수명 (1시간)
pub const MAX_AUTHORIZATION_CODE_EXPIRES_IN: i64 = 3_600;
/// 토큰 최대 수명 (365일)
pub const MAX_TOKEN_EXPIRES_IN: i64 = 365 * 86_400;
/// 만료 레코드 정리 기본 주기 (초)
pub const DEFAULT_PURGE_INTERVAL_SECS: i64 = 600;

/// `OAuthStorage`에 주입되는 설정 값
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthSettings {
    pub authorization_code_expires_in: i64,
    pub token_expires_in: i64,
}

impl Default for OAuthSettings {
    fn default() -> Self {
        Self {
            authorization_code_expires_in: DEFAULT_AUTHORIZATION_CODE_EXPIRES_IN,
            token_expires_in: DEFAULT_TOKEN_EXPIRES_IN,
        }
    }
}

/// 환경 변수 접근자
pub struct OAuthConfig;

impl OAuthConfig {
    /// `AUTHORIZATION_CODE_EXPIRES_IN` (기본값 300초, 최대 3600초)
    pub fn authorization_code_expires_in() -> i64 {
        Self::lifetime_seconds(
            "AUTHORIZATION_CODE_EXPIRES_IN",
            DEFAULT_AUTHORIZATION_CODE_EXPIRES_IN,
            MAX_AUTHORIZATION_CODE_EXPIRES_IN,
        )
    }

    /// `TOKEN_EXPIRES_IN` (기본값 86400초, 최대 365일)
    pub fn token_expires_in() -> i64 {
        Self::lifetime_seconds("TOKEN_EXPIRES_IN", DEFAULT_TOKEN_EXPIRES_IN, MAX_TOKEN_EXPIRES_IN)
    }

    /// `PURGE_INTERVAL_SECS` (기본값 600초, 최대 1일)
    pub fn purge_interval_secs() -> u64 {
        Self::lifetime_seconds("PURGE_INTERVAL_SECS", DEFAULT_PURGE_INTERVAL_SECS, 86_400) as u64
    }

    pub fn settings() -> OAuthSettings {
        OAuthSettings {
            authorization_code_expires_in: Self::authorization_code_expires_in(),
            token_expires_in: Self::token_expires_in(),
        }
    }

    fn lifetime_seconds(key: &str, default: i64, max: i64) -> i64 {
        let raw = env::var(key).ok();
        let seconds = parse_lifetime(raw.as_deref(), default, max);
        if let Some(raw) = raw.as_deref() {
            if raw.trim().parse::<i64>().ok() != Some(seconds) {
                log::warn!("{}={} 은(는) 유효 범위(1..={})가 아니므로 {}초를 사용합니다", key, raw, max, seconds);
            }
        }
        seconds
    }
}

/// 양수가 아니거나 파싱할 수 없으면 `default`, `max`를 넘으면 `max`
fn parse_lifetime(raw: Option<&str>, default: i64, max: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v.min(max))
        .unwrap_or(default)
}
