//! # Core Framework Module
//!
//! 서비스 전체가 공유하는 에러 타입과 의존성 컨테이너를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 컨테이너
//! - **ServiceLocator**: `main`에서 한 번 생성되는 명시적 컨테이너
//! - **생성자 주입**: 서비스는 `Arc<dyn Store>`를 생성자 인자로 받음
//! - **초기화 순서**: 리포지토리 `init` → 서비스 `init`
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 컨텍스트와 함께 변환
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! let locator = ServiceLocator::new();
//! locator.set(database.clone());
//! locator.register_repository(Arc::new(UserRepository::new(database)));
//! locator.initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
