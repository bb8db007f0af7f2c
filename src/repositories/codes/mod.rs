pub mod authorization_code_repo;

pub use authorization_code_repo::AuthorizationCodeRepository;
