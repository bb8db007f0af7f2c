//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기(등록, 인증, 비밀번호 재설정, 차단, 관리자 지정, 삭제)를 관리합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        UserService                        │
//! │  • Registration   : 사용자명 검증, 중복 확인, 해싱          │
//! │  • Authentication : 검증, 차단 확인, cost 상향 재해싱        │
//! │  • Administration : 비밀번호 재설정, 차단, 관리자 지정, 삭제  │
//! └───────────────────────────────────────────────────────────┘
//!               │                           │
//!               ▼                           ▼
//!     Arc<dyn UserStore>            Arc<PasswordHasher>
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **평문 비기록**: 평문 비밀번호와 해시는 어떤 로그에도 남기지 않음
//! - **동일한 실패 메시지**: 없는 사용자와 비밀번호 불일치를 구분하지 않음
//! - **동일한 응답 시간**: 없는 사용자도 더미 해시로 bcrypt 검증을 한 번 수행
//! - **손상된 해시 구분**: 해석할 수 없는 해시는 불일치가 아니라 내부 오류(500)
//! - **투명한 재해싱**: 로그인 성공 시 오래된 cost의 해시를 현재 설정으로 교체

use std::sync::{Arc, OnceLock};
use std::time::Instant;
use async_trait::async_trait;
use log::{debug, info, warn};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Service,
    domain::credentials::{PasswordHash, PasswordHasher},
    domain::entities::users::User,
    repositories::stores::UserStore,
    utils::string_utils::validate_required_string,
};

const INVALID_CREDENTIALS: &str = "잘못된 사용자명 또는 비밀번호입니다";

pub struct UserService {
    user_store: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    /// 없는 사용자 인증 시 검증할 해시 (현재 cost로 최초 1회 생성)
    dummy_hash: OnceLock<PasswordHash>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            user_store,
            hasher,
            dummy_hash: OnceLock::new(),
        }
    }

    fn dummy_hash(&self) -> AppResult<&PasswordHash> {
        if let Some(hash) = self.dummy_hash.get() {
            return Ok(hash);
        }

        let (_, hash) = self.hasher.hash_random()?;
        Ok(self.dummy_hash.get_or_init(|| hash))
    }

    /// 없는 사용자에 대해서도 실제 검증과 같은 비용을 치르고 실패합니다.
    fn reject_unknown_user(&self, password: &str) -> AppError {
        match self.dummy_hash() {
            Ok(hash) => {
                let _ = self.hasher.verify(password, hash);
            }
            Err(e) => warn!("더미 해시 생성 실패: {}", e),
        }
        AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
    }

    /// 새 사용자를 등록합니다.
    ///
    /// 비밀번호를 생략하면 랜덤 비밀번호가 생성되어 두 번째 반환값으로 한 번 전달됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 사용자명
    /// * `AppError::ConflictError` - 이미 사용 중인 사용자명
    /// * `AppError::Credential` - 빈 비밀번호 또는 72바이트 초과
    pub async fn register(
        &self,
        username: &str,
        password: Option<&str>,
    ) -> AppResult<(User, Option<String>)> {
        let username = validate_required_string(username, "사용자명")?;

        if self.user_store.find_by_username(&username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let hash_start = Instant::now();
        let (user, generated) = User::new(username, password, &self.hasher)?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let created = self.user_store.create(user).await?;
        info!(
            "사용자 등록 완료 - id: {}, 랜덤 비밀번호: {}",
            created.id(),
            generated.is_some()
        );

        Ok((created, generated))
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    pub async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.user_store
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 사용자명과 비밀번호로 인증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 없는 사용자, 비밀번호 불일치, 차단된 계정
    /// * `AppError::Credential(MalformedHash)` - 저장된 해시 손상
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let start_time = Instant::now();

        let Some(mut user) = self.user_store.find_by_username(username.trim()).await? else {
            debug!("Unknown user authentication took: {:?}", start_time.elapsed());
            return Err(self.reject_unknown_user(password));
        };

        let is_valid = user.verify_password(password, &self.hasher).map_err(|e| {
            warn!("저장된 자격 증명을 해석할 수 없습니다 - id: {}", user.id());
            AppError::from(e)
        })?;

        if !is_valid {
            debug!("비밀번호 불일치 - id: {}", user.id());
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active() {
            return Err(AppError::AuthenticationError("차단된 계정입니다".to_string()));
        }

        if user.password_needs_rehash(&self.hasher)? {
            self.rehash(&mut user, password).await;
        }

        debug!("Total authentication took: {:?}", start_time.elapsed());
        Ok(user)
    }

    /// 현재 cost로 다시 해싱합니다. 실패해도 로그인은 진행됩니다.
    async fn rehash(&self, user: &mut User, password: &str) {
        if let Err(e) = user.set_password(password, &self.hasher) {
            warn!("재해싱 실패 - id: {}: {}", user.id(), e);
            return;
        }

        match self.user_store.update(user).await {
            Ok(_) => info!("비밀번호 해시 cost 상향 - id: {}, cost: {}", user.id(), self.hasher.cost()),
            Err(e) => warn!("재해싱 결과 저장 실패 - id: {}: {}", user.id(), e),
        }
    }

    /// 관리자가 지정한 비밀번호로 교체합니다.
    pub async fn reset_password(&self, id: &str, password: &str) -> AppResult<User> {
        let mut user = self.get_user(id).await?;
        user.set_password(password, &self.hasher)?;
        self.save(&user).await?;

        info!("비밀번호 재설정 완료 - id: {}", user.id());
        Ok(user)
    }

    /// 랜덤 비밀번호로 교체하고 평문을 반환합니다.
    pub async fn reset_random_password(&self, id: &str) -> AppResult<String> {
        let mut user = self.get_user(id).await?;
        let plaintext = user.set_random_password(&self.hasher)?;
        self.save(&user).await?;

        info!("랜덤 비밀번호 재설정 완료 - id: {}", user.id());
        Ok(plaintext)
    }

    pub async fn set_blocked(&self, id: &str, blocked: bool) -> AppResult<User> {
        let mut user = self.get_user(id).await?;
        user.set_blocked(blocked);
        self.save(&user).await?;

        info!("계정 차단 상태 변경 - id: {}, blocked: {}", user.id(), blocked);
        Ok(user)
    }

    pub async fn set_superuser(&self, id: &str, superuser: bool) -> AppResult<User> {
        let mut user = self.get_user(id).await?;
        user.set_superuser(superuser);
        self.save(&user).await?;

        info!("관리자 권한 변경 - id: {}, superuser: {}", user.id(), superuser);
        Ok(user)
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.user_store.delete(id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        info!("사용자 삭제 완료 - id: {}", id);
        Ok(())
    }

    /// 시작 시 관리자 계정을 보장합니다.
    ///
    /// 계정이 없으면 주어진 비밀번호로 생성하고 관리자로 지정합니다.
    /// 이미 있으면 비밀번호와 플래그를 건드리지 않습니다.
    ///
    /// # Returns
    ///
    /// 새로 생성했으면 `true`
    pub async fn ensure_superuser(&self, username: &str, password: &str) -> AppResult<bool> {
        let username = validate_required_string(username, "사용자명")?;

        if let Some(existing) = self.user_store.find_by_username(&username).await? {
            if !existing.is_superuser() {
                warn!("관리자 부트스트랩 계정이 관리자 권한을 갖고 있지 않습니다 - id: {}", existing.id());
            }
            return Ok(false);
        }

        let mut user = User::with_password(username, password, &self.hasher)?;
        user.set_superuser(true);

        match self.user_store.create(user).await {
            Ok(created) => {
                info!("관리자 계정 생성 - id: {}", created.id());
                Ok(true)
            }
            // 다른 인스턴스가 먼저 생성한 경우
            Err(AppError::ConflictError(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        if !self.user_store.update(user).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user"
    }

    async fn init(&self) -> AppResult<()> {
        info!(
            "UserService 준비 완료 - bcrypt cost: {}, 랜덤 비밀번호 길이: {}",
            self.hasher.cost(),
            self.hasher.random_password_length()
        );
        Ok(())
    }
}
