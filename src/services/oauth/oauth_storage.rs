//! # OAuth2 저장소 서비스
//!
//! 외부 그랜트 엔진이 호출하는 저장소 파사드입니다. 클라이언트, 인가 코드, 토큰의
//! 생성과 조회를 담당하며 비밀번호 그랜트용 사용자 인증은 [`UserService`]에 위임합니다.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │ Grant Engine │────▶│ OAuthStorage │────▶│ ClientStore              │
//! └──────────────┘     └──────────────┘     │ AuthorizationCodeStore   │
//!                             │             │ TokenStore (+ Redis)     │
//!                             ▼             └──────────────────────────┘
//!                       UserService
//! ```
//!
//! 랜덤 값(client_id, 시크릿, 코드, 토큰)은 모두 CSPRNG로 생성됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;
use validator::Validate;
use crate::{
    config::OAuthSettings,
    core::errors::{AppError, AppResult},
    core::registry::Service,
    domain::credentials::generate_token,
    domain::dto::oauth::{NewAuthorizationCode, NewToken, RegisterClientRequest},
    domain::entities::oauth::{AuthorizationCode, Client, Token, BEARER_TOKEN_TYPE},
    domain::entities::users::User,
    repositories::stores::{AuthorizationCodeStore, ClientStore, TokenStore},
    services::users::UserService,
};

const CLIENT_ID_LENGTH: usize = 24;
const CLIENT_SECRET_LENGTH: usize = 48;
const AUTHORIZATION_CODE_LENGTH: usize = 48;
const TOKEN_LENGTH: usize = 42;

pub struct OAuthStorage {
    client_store: Arc<dyn ClientStore>,
    code_store: Arc<dyn AuthorizationCodeStore>,
    token_store: Arc<dyn TokenStore>,
    user_service: Arc<UserService>,
    settings: OAuthSettings,
}

impl OAuthStorage {
    pub fn new(
        client_store: Arc<dyn ClientStore>,
        code_store: Arc<dyn AuthorizationCodeStore>,
        token_store: Arc<dyn TokenStore>,
        user_service: Arc<UserService>,
        settings: OAuthSettings,
    ) -> Self {
        Self {
            client_store,
            code_store,
            token_store,
            user_service,
            settings,
        }
    }

    /// 새 클라이언트를 등록합니다. `client_id`와 `client_secret`은 랜덤으로 생성됩니다.
    pub async fn register_client(&self, request: RegisterClientRequest) -> AppResult<Client> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let client = Client {
            id: Uuid::new_v4().to_string(),
            client_id: generate_token(CLIENT_ID_LENGTH),
            client_secret: generate_token(CLIENT_SECRET_LENGTH),
            grant_types: request.grant_types,
            response_types: request.response_types,
            redirect_uris: request.redirect_uris,
            scope: request.scope.trim().to_string(),
            created_at: Utc::now(),
        };

        let created = self.client_store.create(client).await?;
        info!("클라이언트 등록 완료 - client_id: {}", created.client_id);
        Ok(created)
    }

    /// 클라이언트를 조회합니다. 시크릿이 주어지면 일치할 때만 반환합니다.
    pub async fn get_client(
        &self,
        client_id: &str,
        client_secret: Option<&str>,
    ) -> AppResult<Option<Client>> {
        let client = self.client_store.find_by_client_id(client_id).await?;

        Ok(match (client, client_secret) {
            (Some(client), Some(secret)) if !client.check_secret(secret) => {
                debug!("클라이언트 시크릿 불일치 - client_id: {}", client_id);
                None
            }
            (client, _) => client,
        })
    }

    pub async fn create_authorization_code(
        &self,
        input: NewAuthorizationCode,
    ) -> AppResult<AuthorizationCode> {
        let code = AuthorizationCode {
            id: Uuid::new_v4().to_string(),
            code: generate_token(AUTHORIZATION_CODE_LENGTH),
            client_id: input.client_id,
            redirect_uri: input.redirect_uri,
            response_type: input.response_type,
            scope: input.scope,
            auth_time: Utc::now().timestamp(),
            expires_in: self.settings.authorization_code_expires_in,
            code_challenge: input.code_challenge,
            code_challenge_method: input.code_challenge_method,
            nonce: input.nonce,
            user_id: input.user_id,
        };

        let created = self.code_store.create(code).await?;
        debug!("인가 코드 발급 - client_id: {}, user_id: {}", created.client_id, created.user_id);
        Ok(created)
    }

    /// 만료되지 않은 인가 코드만 반환합니다.
    pub async fn get_authorization_code(
        &self,
        client_id: &str,
        code: &str,
    ) -> AppResult<Option<AuthorizationCode>> {
        let now = Utc::now().timestamp();

        Ok(self
            .code_store
            .find(client_id, code)
            .await?
            .filter(|c| !c.is_expired(now)))
    }

    pub async fn delete_authorization_code(&self, code: &str) -> AppResult<bool> {
        self.code_store.delete(code).await
    }

    pub async fn create_token(&self, input: NewToken) -> AppResult<Token> {
        let token = Token {
            id: Uuid::new_v4().to_string(),
            access_token: generate_token(TOKEN_LENGTH),
            refresh_token: generate_token(TOKEN_LENGTH),
            scope: input.scope,
            issued_at: Utc::now().timestamp(),
            expires_in: self.settings.token_expires_in,
            client_id: input.client_id,
            token_type: BEARER_TOKEN_TYPE.to_string(),
            revoked: false,
            user_id: input.user_id,
        };

        let created = self.token_store.create(token).await?;
        debug!("토큰 발급 - client_id: {}, user_id: {}", created.client_id, created.user_id);
        Ok(created)
    }

    /// 폐기되지 않았고 만료되지 않은 토큰만 반환합니다.
    pub async fn get_token(&self, access_token: &str) -> AppResult<Option<Token>> {
        let now = Utc::now().timestamp();

        Ok(self
            .token_store
            .find_by_access_token(access_token)
            .await?
            .filter(|t| t.is_active(now)))
    }

    /// 리프레시 토큰은 액세스 토큰 만료와 무관하게 폐기 전까지 유효합니다.
    pub async fn get_token_by_refresh_token(&self, refresh_token: &str) -> AppResult<Option<Token>> {
        Ok(self
            .token_store
            .find_by_refresh_token(refresh_token)
            .await?
            .filter(|t| !t.revoked))
    }

    pub async fn revoke_token(&self, refresh_token: &str) -> AppResult<bool> {
        let revoked = self.token_store.revoke(refresh_token).await?;
        if revoked {
            info!("토큰 폐기 완료");
        }
        Ok(revoked)
    }

    /// 비밀번호 그랜트용 사용자 확인
    ///
    /// 인증 실패는 `None`입니다. 손상된 해시나 저장소 오류는 그대로 전파됩니다.
    /// 만료된 인가 코드와, 폐기되었고 수명도 지난 토큰을 삭제합니다.
    ///
    /// 삭제한 (인가 코드 수, 토큰 수)를 반환합니다.
    pub async fn purge_expired(&self) -> AppResult<(u64, u64)> {
        let now = Utc::now().timestamp();
        let codes = self.code_store.purge_expired(now).await?;
        let tokens = self.token_store.purge_expired(now).await?;

        if codes > 0 || tokens > 0 {
            info!("만료 레코드 정리 - 인가 코드: {}개, 토큰: {}개", codes, tokens);
        }
        Ok((codes, tokens))
    }

    pub async fn get_user(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        match self.user_service.authenticate(username, password).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthenticationError(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl Service for OAuthStorage {
    fn name(&self) -> &str {
        "oauth_storage"
    }

    async fn init(&self) -> AppResult<()> {
        info!(
            "OAuthStorage 준비 완료 - 인가 코드 수명: {}초, 토큰 수명: {}초",
            self.settings.authorization_code_expires_in,
            self.settings.token_expires_in
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credentials::PasswordHasher;
    use crate::repositories::memory::MemoryStore;

    fn storage_with(settings: OAuthSettings) -> (OAuthStorage, Arc<UserService>) {
        let store = Arc::new(MemoryStore::new());
        let hasher = Arc::new(PasswordHasher::new(4, 16).unwrap());
        let user_service = Arc::new(UserService::new(store.clone(), hasher));
        let storage = OAuthStorage::new(
            store.clone(),
            store.clone(),
            store,
            user_service.clone(),
            settings,
        );
        (storage, user_service)
    }

    fn storage() -> OAuthStorage {
        storage_with(OAuthSettings::default()).0
    }

    fn client_request() -> RegisterClientRequest {
        RegisterClientRequest {
            grant_types: vec!["authorization_code".to_string(), "refresh_token".to_string()],
            response_types: vec!["code".to_string()],
            redirect_uris: vec!["https://app.example.com/cb".to_string()],
            scope: "read write".to_string(),
        }
    }

    fn code_input(client_id: &str) -> NewAuthorizationCode {
        NewAuthorizationCode {
            client_id: client_id.to_string(),
            redirect_uri: "https://app.example.com/cb".to_string(),
            response_type: "code".to_string(),
            scope: "read".to_string(),
            user_id: "user-1".to_string(),
            code_challenge: None,
            code_challenge_method: None,
            nonce: None,
        }
    }

    fn token_input() -> NewToken {
        NewToken {
            client_id: "client".to_string(),
            scope: "read".to_string(),
            user_id: "user-1".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_and_get_client() {
        let storage = storage();
        let client = storage.register_client(client_request()).await.unwrap();

        assert_eq!(client.client_id.len(), CLIENT_ID_LENGTH);
        assert_eq!(client.client_secret.len(), CLIENT_SECRET_LENGTH);

        let found = storage.get_client(&client.client_id, None).await.unwrap();
        assert!(found.is_some());

        let with_secret = storage
            .get_client(&client.client_id, Some(&client.client_secret))
            .await
            .unwrap();
        assert!(with_secret.is_some());

        let wrong_secret = storage.get_client(&client.client_id, Some("wrong")).await.unwrap();
        assert!(wrong_secret.is_none());

        assert!(storage.get_client("unknown", None).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_register_client_validates_request() {
        let storage = storage();
        let mut request = client_request();
        request.grant_types.clear();

        assert!(matches!(
            storage.register_client(request).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_authorization_code_lifecycle() {
        let storage = storage();
        let code = storage.create_authorization_code(code_input("client")).await.unwrap();

        assert_eq!(code.expires_in, OAuthSettings::default().authorization_code_expires_in);
        assert!(storage.get_authorization_code("client", &code.code).await.unwrap().is_some());
        assert!(storage.get_authorization_code("other", &code.code).await.unwrap().is_none());

        assert!(storage.delete_authorization_code(&code.code).await.unwrap());
        assert!(storage.get_authorization_code("client", &code.code).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_expired_authorization_code_is_hidden() {
        let (storage, _) = storage_with(OAuthSettings {
            authorization_code_expires_in: 0,
            ..OAuthSettings::default()
        });
        let code = storage.create_authorization_code(code_input("client")).await.unwrap();

        assert!(storage.get_authorization_code("client", &code.code).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_token_lifecycle() {
        let storage = storage();
        let token = storage.create_token(token_input()).await.unwrap();

        assert_eq!(token.token_type, BEARER_TOKEN_TYPE);
        assert_eq!(token.access_token.len(), TOKEN_LENGTH);
        assert_ne!(token.access_token, token.refresh_token);
        assert!(storage.get_token(&token.access_token).await.unwrap().is_some());
        assert!(storage
            .get_token_by_refresh_token(&token.refresh_token)
            .await
            .unwrap()
            .is_some());

        assert!(storage.revoke_token(&token.refresh_token).await.unwrap());
        assert!(!storage.revoke_token(&token.refresh_token).await.unwrap());
        assert!(storage.get_token(&token.access_token).await.unwrap().is_none());
        assert!(storage
            .get_token_by_refresh_token(&token.refresh_token)
            .await
            .unwrap()
            .is_none());
    }

    #[actix_web::test]
    async fn test_expired_token_keeps_refresh_token_usable() {
        let (storage, _) = storage_with(OAuthSettings {
            token_expires_in: 0,
            ..OAuthSettings::default()
        });
        let token = storage.create_token(token_input()).await.unwrap();

        assert!(storage.get_token(&token.access_token).await.unwrap().is_none());
        assert!(storage
            .get_token_by_refresh_token(&token.refresh_token)
            .await
            .unwrap()
            .is_some());
    }

    #[actix_web::test]
    async fn test_get_user_maps_auth_failure_to_none() {
        let (storage, user_service) = storage_with(OAuthSettings::default());
        user_service.register("alice", Some("secret123")).await.unwrap();

        assert!(storage.get_user("alice", "secret123").await.unwrap().is_some());
        assert!(storage.get_user("alice", "wrong").await.unwrap().is_none());
        assert!(storage.get_user("nobody", "secret123").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_purge_expired_records() {
        let (storage, _) = storage_with(OAuthSettings {
            authorization_code_expires_in: 0,
            token_expires_in: 0,
        });
        let code = storage.create_authorization_code(code_input("client")).await.unwrap();
        let revoked = storage.create_token(token_input()).await.unwrap();
        let kept = storage.create_token(token_input()).await.unwrap();
        storage.revoke_token(&revoked.refresh_token).await.unwrap();

        assert_eq!(storage.purge_expired().await.unwrap(), (1, 1));
        assert!(storage.get_authorization_code("client", &code.code).await.unwrap().is_none());
        assert!(storage
            .get_token_by_refresh_token(&kept.refresh_token)
            .await
            .unwrap()
            .is_some());
        assert_eq!(storage.purge_expired().await.unwrap(), (0, 0));
    }
}
