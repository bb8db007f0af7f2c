//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 토큰 리포지토리가 발급한 액세스 토큰을 남은 수명만큼 캐싱하는 데 사용합니다
//! ([`token_cache::TokenCache`]).
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new(&StorageConfig::redis_url()).await?;
//! cache.set_with_expiry("token:access:abc", &token, 3600).await?;
//!
//! let cached: Option<Token> = cache.get("token:access:abc").await?;
//! cache.del("token:access:abc").await?;
//! ```

pub mod redis;
pub mod token_cache;

pub use token_cache::TokenCache;
