//! 데이터베이스, 서버, 환경 관련 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 설정되지 않았거나 파싱할 수 없는 경우
//! 환경별 기본값을 사용합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    ///
    /// `BCRYPT_COST`가 4-31 범위를 벗어나면 무시됩니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    /// 랜덤 비밀번호 길이 (`RANDOM_PASSWORD_LENGTH`, 기본값 16)
    ///
    /// 범위 보정은 `PasswordHasher::new`에서 수행합니다.
    pub fn random_password_length() -> usize {
        env::var("RANDOM_PASSWORD_LENGTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(16)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 요청 속도 제한 설정 (actix-governor)
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 보충되는 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값 10)
    pub fn per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(10)
    }

    /// 순간 허용 요청 수 (`RATE_LIMIT_BURST_SIZE`, 기본값 50)
    pub fn burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(50)
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB + Redis 캐시
    Mongo,
    /// 프로세스 메모리 (개발/테스트용, 재시작 시 소멸)
    Memory,
}

/// 저장소 연결 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND` (`mongo` | `memory`, 기본값 `mongo`)
    pub fn backend() -> StorageBackend {
        match env::var("STORAGE_BACKEND")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "memory" | "in-memory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "oauth_storage_dev".to_string())
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

/// 시작 시 보장할 관리자 계정
///
/// `SUPERUSER_USERNAME`과 `SUPERUSER_PASSWORD`가 모두 설정된 경우에만 사용됩니다.
pub struct SuperuserConfig;

impl SuperuserConfig {
    pub fn credentials() -> Option<(String, String)> {
        let username = env::var("SUPERUSER_USERNAME").ok().filter(|v| !v.trim().is_empty())?;
        let password = env::var("SUPERUSER_PASSWORD").ok().filter(|v| !v.is_empty())?;
        Some((username, password))
    }
}
