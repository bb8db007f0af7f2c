//! 액세스 토큰 조회 캐시
//!
//! 캐시에는 발급 시점에 쓴 토큰만 존재합니다. 조회 결과로 캐시를 채우지 않으므로
//! 폐기 이후 동시 조회가 폐기 전 상태를 다시 써 넣을 수 없습니다.

use async_trait::async_trait;
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppResult, ErrorContext},
    domain::entities::oauth::Token,
};

/// 액세스 토큰을 키로 하는 캐시 백엔드
#[async_trait]
pub trait TokenCache: Send + Sync {
    async fn get(&self, access_token: &str) -> AppResult<Option<Token>>;

    /// `ttl_seconds`가 0이면 저장하지 않습니다.
    async fn put(&self, token: &Token, ttl_seconds: u64) -> AppResult<()>;

    /// 키가 없어도 성공입니다.
    async fn remove(&self, access_token: &str) -> AppResult<()>;
}

fn cache_key(access_token: &str) -> String {
    format!("token:access:{}", access_token)
}

#[async_trait]
impl TokenCache for RedisClient {
    async fn get(&self, access_token: &str) -> AppResult<Option<Token>> {
        RedisClient::get::<Token>(self, &cache_key(access_token))
            .await
            .context("토큰 캐시 조회 실패")
    }

    async fn put(&self, token: &Token, ttl_seconds: u64) -> AppResult<()> {
        self.set_with_expiry(&cache_key(&token.access_token), token, ttl_seconds)
            .await
            .context("토큰 캐시 저장 실패")
    }

    async fn remove(&self, access_token: &str) -> AppResult<()> {
        self.del(&cache_key(access_token))
            .await
            .context("토큰 캐시 무효화 실패")
    }
}
