pub mod client_repo;

pub use client_repo::ClientRepository;
