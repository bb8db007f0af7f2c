//! 사용자 계정 서비스
//!
//! ```rust,ignore
//! let user_service = UserService::new(user_store, hasher);
//! let (user, generated) = user_service.register("alice", None).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
