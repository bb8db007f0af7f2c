//! # Domain Layer Module
//!
//! 비즈니스 규칙과 도메인 타입을 담당하는 계층입니다.
//! 저장소나 HTTP에 의존하지 않으며, 서비스 계층이 이 타입들을 조합합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── credentials   - 비밀번호 해싱, 랜덤 생성, 검증
//! ├── entities      - User, Client, AuthorizationCode, Token
//! ├── dto           - 요청/응답 데이터 전송 객체
//! └── models        - 요청 처리 중의 값 객체 (AuthenticatedUser)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! // 1. DTO로 입력 받기 + 유효성 검증
//! request.validate()?;
//!
//! // 2. 도메인 엔티티 생성 (비밀번호가 없으면 랜덤 생성)
//! let (user, generated) = User::new(request.username, request.password.as_deref(), &hasher)?;
//!
//! // 3. 저장소를 통한 영속화
//! let saved = user_store.create(user).await?;
//!
//! // 4. 응답 DTO로 변환 (해시 제외)
//! let response = CreateUserResponse { user: UserResponse::from(saved), generated_password: generated };
//! ```

pub mod credentials;
pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use models::*;
