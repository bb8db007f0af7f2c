//! 토큰 데이터 액세스 계층
//!
//! # Features
//!
//! - **MongoDB 영속화**: 액세스/리프레시 토큰 유니크 인덱스
//! - **액세스 토큰 캐시**: 발급 시에만 채움, 남은 수명만큼 TTL, 폐기 전에 무효화
//!
//! # Usage
//!
//! ```rust,ignore
//! let token_repo = Arc::new(TokenRepository::new(database));
//! let tokens: Arc<dyn TokenStore> = Arc::new(CachedTokenStore::new(token_repo, Arc::new(redis)));
//! let token = tokens.find_by_access_token("abc").await?;
//! tokens.revoke("refresh").await?;
//! ```

pub mod cached_token_store;
pub mod token_repository;

pub use cached_token_store::CachedTokenStore;
pub use token_repository::TokenRepository;
