//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)는 `users` 컬렉션에 대한
//! [`UserStore`](crate::repositories::stores::UserStore) 구현입니다.

pub mod user_repo;

pub use user_repo::UserRepository;
