//! OAuth2 클라이언트 리포지토리 (MongoDB `clients` 컬렉션)

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::{is_duplicate_key_error, Database},
    domain::entities::oauth::Client,
    repositories::stores::ClientStore,
};

pub struct ClientRepository {
    db: Arc<Database>,
}

impl ClientRepository {
    pub const COLLECTION: &'static str = "clients";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Client> {
        self.db.collection::<Client>(Self::COLLECTION)
    }
}

#[async_trait]
impl Repository for ClientRepository {
    fn name(&self) -> &str {
        "client"
    }

    fn collection_name(&self) -> &str {
        Self::COLLECTION
    }

    /// `client_id` 유니크 인덱스 생성
    async fn init(&self) -> AppResult<()> {
        let client_id_index = IndexModel::builder()
            .keys(doc! { "client_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("client_id_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(client_id_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ClientStore for ClientRepository {
    async fn create(&self, client: Client) -> AppResult<Client> {
        self.collection()
            .insert_one(&client)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 등록된 client_id입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(client)
    }

    async fn find_by_client_id(&self, client_id: &str) -> AppResult<Option<Client>> {
        self.collection()
            .find_one(doc! { "client_id": client_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
