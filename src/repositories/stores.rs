//! 저장소 추상화
//!
//! 서비스는 구체 리포지토리 대신 이 트레이트들을 `Arc<dyn ...>`로 주입받습니다.
//! MongoDB 리포지토리와 [`MemoryStore`](super::memory::MemoryStore)가 같은 계약을 구현합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::oauth::{AuthorizationCode, Client, Token};
use crate::domain::entities::users::User;

/// 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 사용자명 중복
    async fn create(&self, user: User) -> AppResult<User>;

    /// 기존 레코드를 통째로 교체합니다. 대상이 없으면 `false`를 반환합니다.
    async fn update(&self, user: &User) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// OAuth2 클라이언트 저장소
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// # Errors
    ///
    /// * `AppError::ConflictError` - `client_id` 중복
    async fn create(&self, client: Client) -> AppResult<Client>;

    async fn find_by_client_id(&self, client_id: &str) -> AppResult<Option<Client>>;
}

/// 인가 코드 저장소
#[async_trait]
pub trait AuthorizationCodeStore: Send + Sync {
    async fn create(&self, code: AuthorizationCode) -> AppResult<AuthorizationCode>;

    /// 클라이언트와 코드 값이 모두 일치하는 레코드를 찾습니다. 만료 여부는 보지 않습니다.
    async fn find(&self, client_id: &str, code: &str) -> AppResult<Option<AuthorizationCode>>;

    async fn delete(&self, code: &str) -> AppResult<bool>;

    /// `now` 시점에 만료된 코드를 모두 삭제하고 삭제한 개수를 반환합니다.
    async fn purge_expired(&self, now: i64) -> AppResult<u64>;
}

/// 토큰 저장소
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn create(&self, token: Token) -> AppResult<Token>;

    async fn find_by_access_token(&self, access_token: &str) -> AppResult<Option<Token>>;

    async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<Option<Token>>;

    /// 리프레시 토큰으로 찾은 토큰을 폐기합니다.
    ///
    /// 폐기할 토큰이 없거나 이미 폐기된 경우 `false`를 반환합니다.
    async fn revoke(&self, refresh_token: &str) -> AppResult<bool>;

    /// 폐기되었고 액세스 토큰 수명도 지난 토큰을 삭제합니다.
    ///
    /// 폐기되지 않은 토큰은 리프레시 토큰으로 계속 쓰일 수 있으므로 남겨 둡니다.
    async fn purge_expired(&self, now: i64) -> AppResult<u64>;
}
