//! 그랜트 엔진용 OAuth2 저장소 서비스

pub mod oauth_storage;

pub use oauth_storage::OAuthStorage;
