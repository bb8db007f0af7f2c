//! # Service Registry - 명시적 서비스 로케이터
//!
//! 애플리케이션 시작 시 한 번 만들어지는 의존성 컨테이너입니다.
//! 전역 static이나 컴파일 타임 자동 등록 없이, `main`에서 생성한 인스턴스를
//! 타입별로 보관하고 꺼내 쓰는 역할만 합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 인프라 등록
//!    ├─ Database, RedisClient 또는 MemoryStore 생성
//!    └─ locator.set(Arc<T>)
//!
//! 2. 리포지토리/서비스 등록 (생성자 주입)
//!    ├─ UserRepository::new(db)           → locator.register_repository(..)
//!    └─ UserService::new(store, hasher)   → locator.register_service(..)
//!
//! 3. 초기화
//!    └─ locator.initialize_all().await   → 리포지토리 init (인덱스 생성) → 서비스 init
//!
//! 4. 조회
//!    └─ locator.get::<UserService>()     → actix `web::Data`로 전달
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let locator = ServiceLocator::new();
//! locator.set(database.clone());
//!
//! let user_repo = Arc::new(UserRepository::new(database));
//! locator.register_repository(user_repo.clone());
//!
//! let user_service = Arc::new(UserService::new(user_repo, hasher));
//! locator.register_service(user_service);
//!
//! locator.initialize_all().await?;
//! let user_service = locator.get::<UserService>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use log::info;
use crate::core::errors::{AppError, AppResult};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    ///
    /// 모든 리포지토리 초기화가 끝난 뒤 호출됩니다.
    async fn init(&self) -> AppResult<()>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직을 수행합니다.
    ///
    /// 유니크 인덱스 생성 등 저장소 제약 조건을 준비합니다.
    async fn init(&self) -> AppResult<()>;
}

/// 명시적 의존성 컨테이너
///
/// 각 타입당 하나의 `Arc<T>` 인스턴스를 보관합니다.
/// 등록 순서대로 리포지토리와 서비스의 `init`을 실행합니다.
#[derive(Default)]
pub struct ServiceLocator {
    /// `TypeId`를 키로 사용하는 인스턴스 캐시
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 초기화 대상 리포지토리 (등록 순서 유지)
    repositories: RwLock<Vec<Arc<dyn Repository>>>,
    /// 초기화 대상 서비스 (등록 순서 유지)
    services: RwLock<Vec<Arc<dyn Service>>>,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 외부에서 생성된 인스턴스를 등록합니다.
    ///
    /// 같은 타입이 이미 등록되어 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(&self, instance: Arc<T>) {
        info!("📦 Registering: {}", Self::extract_clean_type_name(std::any::type_name::<T>()));

        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 리포지토리를 등록하고 `initialize_all` 대상에 추가합니다.
    pub fn register_repository<T: Repository + 'static>(&self, repository: Arc<T>) {
        self.set(repository.clone());
        self.repositories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(repository);
    }

    /// 서비스를 등록하고 `initialize_all` 대상에 추가합니다.
    pub fn register_service<T: Service + 'static>(&self, service: Arc<T>) {
        self.set(service.clone());
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(service);
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않은 경우
    pub fn get<T: 'static + Send + Sync>(&self) -> AppResult<Arc<T>> {
        self.try_get::<T>().ok_or_else(|| {
            AppError::InternalError(format!(
                "Service not found: {}. Register it with ServiceLocator::set() before use",
                std::any::type_name::<T>()
            ))
        })
    }

    /// 등록된 인스턴스를 조회합니다. 없으면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>(&self) -> Option<Arc<T>> {
        let instances = self.instances.read().unwrap_or_else(PoisonError::into_inner);

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 해당 타입이 등록되어 있는지 확인합니다.
    pub fn contains<T: 'static + Send + Sync>(&self) -> bool {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    /// 모든 리포지토리와 서비스를 초기화합니다.
    ///
    /// # 초기화 순서
    ///
    /// 1. **Repository 먼저**: 인덱스 등 저장소 제약이 준비된 뒤
    /// 2. **Service 나중에**: 서비스 초기화가 실행됩니다
    ///
    /// 첫 번째 실패에서 중단하고 에러를 반환합니다.
    pub async fn initialize_all(&self) -> AppResult<()> {
        info!("🔄 Initializing service registry");

        let repositories: Vec<_> = self.repositories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for repository in &repositories {
            info!("  → repository {} ({})", repository.name(), repository.collection_name());
            repository.init().await?;
        }

        let services: Vec<_> = self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for service in &services {
            info!("  → service {}", service.name());
            service.init().await?;
        }

        info!(
            "✅ Registry initialized: {} repositories, {} services",
            repositories.len(),
            services.len()
        );

        Ok(())
    }

    /// `std::any::type_name`의 모듈 경로를 제거합니다.
    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }
}
