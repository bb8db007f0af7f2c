//! 인가 코드 리포지토리 (MongoDB `authorization_codes` 컬렉션)
//!
//! 만료된 코드는 조회 시점에 서비스 계층이 걸러내고, `purge_expired`가 주기적으로 지웁니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::oauth::AuthorizationCode,
    repositories::stores::AuthorizationCodeStore,
};

pub struct AuthorizationCodeRepository {
    db: Arc<Database>,
}

impl AuthorizationCodeRepository {
    pub const COLLECTION: &'static str = "authorization_codes";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<AuthorizationCode> {
        self.db.collection::<AuthorizationCode>(Self::COLLECTION)
    }
}

#[async_trait]
impl Repository for AuthorizationCodeRepository {
    fn name(&self) -> &str {
        "authorization_code"
    }

    fn collection_name(&self) -> &str {
        Self::COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("code_unique".to_string())
                .build())
            .build();

        let client_code_index = IndexModel::builder()
            .keys(doc! { "client_id": 1, "code": 1 })
            .options(IndexOptions::builder()
                .name("client_id_code".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([code_index, client_code_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AuthorizationCodeStore for AuthorizationCodeRepository {
    async fn create(&self, code: AuthorizationCode) -> AppResult<AuthorizationCode> {
        self.collection()
            .insert_one(&code)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(code)
    }

    async fn find(&self, client_id: &str, code: &str) -> AppResult<Option<AuthorizationCode>> {
        self.collection()
            .find_one(doc! { "client_id": client_id, "code": code })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, code: &str) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "code": code })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn purge_expired(&self, now: i64) -> AppResult<u64> {
        let result = self.collection()
            .delete_many(doc! {
                "$expr": { "$lte": [{ "$add": ["$auth_time", "$expires_in"] }, now] }
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
