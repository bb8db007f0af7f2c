//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! 각 설정 구조체는 값을 보관하지 않고, 호출 시점에 환경 변수를 읽어 타입이 지정된 값을 돌려줍니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 서버, 속도 제한, 저장소, 관리자 계정
//! - [`oauth_config`] - 인가 코드 / 토큰 수명
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 비밀번호 해싱
//! export BCRYPT_COST="12"               # 4-31 범위, 미설정 시 환경별 기본값
//! export RANDOM_PASSWORD_LENGTH="16"    # 12-72 범위로 보정
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"        # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="oauth_storage_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # OAuth2
//! export AUTHORIZATION_CODE_EXPIRES_IN="300"
//! export TOKEN_EXPIRES_IN="86400"
//!
//! # 관리자 계정 (둘 다 설정된 경우에만 생성)
//! export SUPERUSER_USERNAME="admin"
//! export SUPERUSER_PASSWORD="change-me"
//! ```

pub mod data_config;
pub mod oauth_config;

pub use data_config::*;
pub use oauth_config::*;
