//! 액세스 토큰 캐시를 앞에 둔 토큰 저장소
//!
//! - 캐시는 발급(`create`) 시점에만 채워집니다. 조회 결과로 캐시를 채우지 않으므로
//!   폐기와 동시에 일어난 조회가 폐기 전 상태를 다시 써 넣을 수 없습니다.
//! - 폐기는 캐시 키를 먼저 지운 뒤 영속 저장소에 반영합니다. 무효화가 실패하면
//!   폐기하지 않고 오류를 돌려주므로 캐시와 저장소가 어긋난 채로 남지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use crate::{
    caching::TokenCache,
    core::errors::AppResult,
    domain::entities::oauth::Token,
    repositories::stores::TokenStore,
};

pub struct CachedTokenStore {
    inner: Arc<dyn TokenStore>,
    cache: Arc<dyn TokenCache>,
}

impl CachedTokenStore {
    pub fn new(inner: Arc<dyn TokenStore>, cache: Arc<dyn TokenCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl TokenStore for CachedTokenStore {
    async fn create(&self, token: Token) -> AppResult<Token> {
        // 폐기는 영속 레코드를 먼저 찾아야 하므로 캐시를 먼저 쓰면 폐기보다 늦게 쓰일 수 없다
        let ttl = token.remaining_lifetime(Utc::now().timestamp());
        if let Err(e) = self.cache.put(&token, ttl as u64).await {
            warn!("{}", e);
        }

        match self.inner.create(token.clone()).await {
            Ok(created) => Ok(created),
            Err(e) => {
                if let Err(evict_err) = self.cache.remove(&token.access_token).await {
                    warn!("{}", evict_err);
                }
                Err(e)
            }
        }
    }

    async fn find_by_access_token(&self, access_token: &str) -> AppResult<Option<Token>> {
        match self.cache.get(access_token).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => warn!("{}", e),
        }

        self.inner.find_by_access_token(access_token).await
    }

    async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<Option<Token>> {
        self.inner.find_by_refresh_token(refresh_token).await
    }

    async fn revoke(&self, refresh_token: &str) -> AppResult<bool> {
        let Some(token) = self.inner.find_by_refresh_token(refresh_token).await? else {
            return Ok(false);
        };
        if token.revoked {
            return Ok(false);
        }

        self.cache.remove(&token.access_token).await?;
        self.inner.revoke(refresh_token).await
    }

    async fn purge_expired(&self, now: i64) -> AppResult<u64> {
        self.inner.purge_expired(now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;
    use std::sync::atomic::{AtomicBool, Ordering};
    use crate::core::errors::AppError;
    use crate::domain::entities::oauth::BEARER_TOKEN_TYPE;
    use crate::repositories::memory::MemoryStore;

    #[derive(Default)]
    struct FakeCache {
        entries: RwLock<HashMap<String, Token>>,
        fail_remove: AtomicBool,
    }

    impl FakeCache {
        fn cached(&self, access_token: &str) -> Option<Token> {
            self.entries.read().unwrap().get(access_token).cloned()
        }
    }

    #[async_trait]
    impl TokenCache for FakeCache {
        async fn get(&self, access_token: &str) -> AppResult<Option<Token>> {
            Ok(self.cached(access_token))
        }

        async fn put(&self, token: &Token, ttl_seconds: u64) -> AppResult<()> {
            if ttl_seconds > 0 {
                self.entries.write().unwrap().insert(token.access_token.clone(), token.clone());
            }
            Ok(())
        }

        async fn remove(&self, access_token: &str) -> AppResult<()> {
            if self.fail_remove.load(Ordering::SeqCst) {
                return Err(AppError::InternalError("cache unavailable".to_string()));
            }
            self.entries.write().unwrap().remove(access_token);
            Ok(())
        }
    }

    fn token(access: &str, refresh: &str) -> Token {
        Token {
            id: access.to_string(),
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            scope: "read".to_string(),
            issued_at: Utc::now().timestamp(),
            expires_in: 3600,
            client_id: "client".to_string(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
            revoked: false,
            user_id: "user".to_string(),
        }
    }

    fn cached_store() -> (CachedTokenStore, Arc<MemoryStore>, Arc<FakeCache>) {
        let inner = Arc::new(MemoryStore::new());
        let cache = Arc::new(FakeCache::default());
        let store = CachedTokenStore::new(inner.clone(), cache.clone());
        (store, inner, cache)
    }

    #[actix_web::test]
    async fn test_create_fills_cache() {
        let (store, _, cache) = cached_store();
        store.create(token("access", "refresh")).await.unwrap();

        assert!(cache.cached("access").is_some());
        assert!(store.find_by_access_token("access").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_lookup_does_not_fill_cache() {
        let (store, inner, cache) = cached_store();
        TokenStore::create(inner.as_ref(), token("access", "refresh")).await.unwrap();

        assert!(store.find_by_access_token("access").await.unwrap().is_some());
        assert!(cache.cached("access").is_none());
    }

    #[actix_web::test]
    async fn test_revoked_token_is_not_served_from_cache() {
        let (store, _, cache) = cached_store();
        store.create(token("access", "refresh")).await.unwrap();

        assert!(store.revoke("refresh").await.unwrap());
        assert!(cache.cached("access").is_none());

        // 폐기 후 조회가 캐시를 다시 채우지 않는다
        let found = store.find_by_access_token("access").await.unwrap().unwrap();
        assert!(found.revoked);
        let again = store.find_by_access_token("access").await.unwrap().unwrap();
        assert!(again.revoked);
        assert!(cache.cached("access").is_none());
    }

    #[actix_web::test]
    async fn test_failed_eviction_aborts_revoke() {
        let (store, inner, cache) = cached_store();
        store.create(token("access", "refresh")).await.unwrap();
        cache.fail_remove.store(true, Ordering::SeqCst);

        assert!(store.revoke("refresh").await.is_err());
        assert!(!inner.find_by_refresh_token("refresh").await.unwrap().unwrap().revoked);

        cache.fail_remove.store(false, Ordering::SeqCst);
        assert!(store.revoke("refresh").await.unwrap());
        assert!(!store.revoke("refresh").await.unwrap());
        assert!(store.find_by_access_token("access").await.unwrap().unwrap().revoked);
    }

    #[actix_web::test]
    async fn test_revoke_unknown_refresh_token() {
        let (store, _, _) = cached_store();
        assert!(!store.revoke("unknown").await.unwrap());
    }
}
