//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 트레이트([`stores`])와 그 구현체들을 제공합니다.
//! 서비스는 `Arc<dyn UserStore>` 같은 트레이트 객체를 생성자로 주입받으므로
//! MongoDB와 인메모리 구현을 설정만으로 바꿀 수 있습니다.
//!
//! # Features
//!
//! - MongoDB 리포지토리: 컬렉션별 유니크 인덱스를 `Repository::init`에서 생성
//! - [`tokens::CachedTokenStore`]: 발급한 액세스 토큰을 남은 수명만큼 캐싱하고 폐기 전에 무효화
//! - [`memory::MemoryStore`]: 개발/테스트용 단일 프로세스 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! let user_repo = Arc::new(UserRepository::new(database.clone()));
//! locator.register_repository(user_repo.clone());
//!
//! let user_service = UserService::new(user_repo, hasher);
//! ```

pub mod clients;
pub mod codes;
pub mod memory;
pub mod stores;
pub mod tokens;
pub mod users;

pub use clients::ClientRepository;
pub use codes::AuthorizationCodeRepository;
pub use memory::MemoryStore;
pub use stores::{AuthorizationCodeStore, ClientStore, TokenStore, UserStore};
pub use tokens::{CachedTokenStore, TokenRepository};
pub use users::UserRepository;
