//! 인메모리 저장소
//!
//! `STORAGE_BACKEND=memory`일 때와 테스트에서 사용하는 단일 프로세스 저장소입니다.
//! 네 가지 저장소 트레이트를 모두 구현하며, 프로세스가 종료되면 데이터는 사라집니다.
//! 락은 `.await` 지점을 넘어 유지되지 않습니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use async_trait::async_trait;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    domain::entities::oauth::{AuthorizationCode, Client, Token},
    domain::entities::users::User,
    repositories::stores::{AuthorizationCodeStore, ClientStore, TokenStore, UserStore},
};

#[derive(Default)]
pub struct MemoryStore {
    /// id → User
    users: RwLock<HashMap<String, User>>,
    /// client_id → Client
    clients: RwLock<HashMap<String, Client>>,
    /// code → AuthorizationCode
    codes: RwLock<HashMap<String, AuthorizationCode>>,
    /// access_token → Token
    tokens: RwLock<HashMap<String, Token>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn collection_name(&self) -> &str {
        "memory"
    }

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        if users.values().any(|u| u.username() == user.username()) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        users.insert(user.id().to_string(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        match users.get_mut(user.id()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        Ok(users.remove(id).is_some())
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn create(&self, client: Client) -> AppResult<Client> {
        let mut clients = self.clients.write().unwrap_or_else(PoisonError::into_inner);

        if clients.contains_key(&client.client_id) {
            return Err(AppError::ConflictError("이미 등록된 client_id입니다".to_string()));
        }

        clients.insert(client.client_id.clone(), client.clone());
        Ok(client)
    }

    async fn find_by_client_id(&self, client_id: &str) -> AppResult<Option<Client>> {
        let clients = self.clients.read().unwrap_or_else(PoisonError::into_inner);
        Ok(clients.get(client_id).cloned())
    }
}

#[async_trait]
impl AuthorizationCodeStore for MemoryStore {
    async fn create(&self, code: AuthorizationCode) -> AppResult<AuthorizationCode> {
        let mut codes = self.codes.write().unwrap_or_else(PoisonError::into_inner);
        codes.insert(code.code.clone(), code.clone());
        Ok(code)
    }

    async fn find(&self, client_id: &str, code: &str) -> AppResult<Option<AuthorizationCode>> {
        let codes = self.codes.read().unwrap_or_else(PoisonError::into_inner);
        Ok(codes.get(code).filter(|c| c.client_id == client_id).cloned())
    }

    async fn delete(&self, code: &str) -> AppResult<bool> {
        let mut codes = self.codes.write().unwrap_or_else(PoisonError::into_inner);
        Ok(codes.remove(code).is_some())
    }

    async fn purge_expired(&self, now: i64) -> AppResult<u64> {
        let mut codes = self.codes.write().unwrap_or_else(PoisonError::into_inner);
        let before = codes.len();
        codes.retain(|_, c| !c.is_expired(now));
        Ok((before - codes.len()) as u64)
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn create(&self, token: Token) -> AppResult<Token> {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        tokens.insert(token.access_token.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_access_token(&self, access_token: &str) -> AppResult<Option<Token>> {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tokens.get(access_token).cloned())
    }

    async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<Option<Token>> {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tokens.values().find(|t| t.refresh_token == refresh_token).cloned())
    }

    async fn revoke(&self, refresh_token: &str) -> AppResult<bool> {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);

        match tokens
            .values_mut()
            .find(|t| t.refresh_token == refresh_token && !t.revoked)
        {
            Some(token) => {
                token.revoked = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn purge_expired(&self, now: i64) -> AppResult<u64> {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        let before = tokens.len();
        tokens.retain(|_, t| !(t.revoked && t.is_expired(now)));
        Ok((before - tokens.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credentials::PasswordHasher;
    use crate::domain::entities::oauth::BEARER_TOKEN_TYPE;

    fn user(username: &str) -> User {
        User::with_password(username, "secret123", &PasswordHasher::new(4, 16).unwrap()).unwrap()
    }

    fn token(access: &str, refresh: &str) -> Token {
        Token {
            id: access.to_string(),
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            scope: "read".to_string(),
            issued_at: 0,
            expires_in: 3600,
            client_id: "client".to_string(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
            revoked: false,
            user_id: "user".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_user_crud() {
        let store = MemoryStore::new();
        let alice = UserStore::create(&store, user("alice")).await.unwrap();

        assert!(store.find_by_id(alice.id()).await.unwrap().is_some());
        assert_eq!(
            store.find_by_username("alice").await.unwrap().unwrap().id(),
            alice.id()
        );

        let mut blocked = alice.clone();
        blocked.set_blocked(true);
        assert!(UserStore::update(&store, &blocked).await.unwrap());
        assert!(store.find_by_id(alice.id()).await.unwrap().unwrap().is_blocked());

        assert!(UserStore::delete(&store, alice.id()).await.unwrap());
        assert!(!UserStore::delete(&store, alice.id()).await.unwrap());
        assert!(store.find_by_id(alice.id()).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_conflict() {
        let store = MemoryStore::new();
        UserStore::create(&store, user("alice")).await.unwrap();

        let result = UserStore::create(&store, user("alice")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_missing_user_returns_false() {
        let store = MemoryStore::new();
        assert!(!UserStore::update(&store, &user("ghost")).await.unwrap());
    }

    fn authorization_code(code: &str, auth_time: i64) -> AuthorizationCode {
        AuthorizationCode {
            id: code.to_string(),
            code: code.to_string(),
            client_id: "client".to_string(),
            redirect_uri: "https://app.example.com/cb".to_string(),
            response_type: "code".to_string(),
            scope: "read".to_string(),
            auth_time,
            expires_in: 300,
            code_challenge: None,
            code_challenge_method: None,
            nonce: None,
            user_id: "user".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_authorization_code_requires_matching_client() {
        let store = MemoryStore::new();
        AuthorizationCodeStore::create(&store, authorization_code("abc", 0)).await.unwrap();

        assert!(store.find("client", "abc").await.unwrap().is_some());
        assert!(store.find("other", "abc").await.unwrap().is_none());
        assert!(AuthorizationCodeStore::delete(&store, "abc").await.unwrap());
        assert!(store.find("client", "abc").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_revoke_only_once() {
        let store = MemoryStore::new();
        TokenStore::create(&store, token("access", "refresh")).await.unwrap();

        assert!(store.revoke("refresh").await.unwrap());
        assert!(!store.revoke("refresh").await.unwrap());
        assert!(store.find_by_access_token("access").await.unwrap().unwrap().revoked);
        assert!(!store.revoke("unknown").await.unwrap());
    }

    #[actix_web::test]
    async fn test_purge_expired_codes() {
        let store = MemoryStore::new();
        AuthorizationCodeStore::create(&store, authorization_code("old", 0)).await.unwrap();
        AuthorizationCodeStore::create(&store, authorization_code("fresh", 1_000)).await.unwrap();

        assert_eq!(AuthorizationCodeStore::purge_expired(&store, 300).await.unwrap(), 1);
        assert!(store.find("client", "old").await.unwrap().is_none());
        assert!(store.find("client", "fresh").await.unwrap().is_some());
        assert_eq!(AuthorizationCodeStore::purge_expired(&store, 300).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_purge_keeps_unrevoked_tokens() {
        let store = MemoryStore::new();
        TokenStore::create(&store, token("expired", "refresh-expired")).await.unwrap();
        TokenStore::create(&store, token("revoked", "refresh-revoked")).await.unwrap();
        store.revoke("refresh-revoked").await.unwrap();

        // 만료 전에는 폐기된 토큰도 남긴다
        assert_eq!(TokenStore::purge_expired(&store, 3_599).await.unwrap(), 0);

        assert_eq!(TokenStore::purge_expired(&store, 3_600).await.unwrap(), 1);
        assert!(store.find_by_access_token("revoked").await.unwrap().is_none());
        assert!(store.find_by_refresh_token("refresh-expired").await.unwrap().is_some());
    }
}
