//! 토큰 리포지토리 (MongoDB `tokens` 컬렉션)
//!
//! 캐시는 [`CachedTokenStore`](super::CachedTokenStore)가 이 저장소 앞에 둡니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::oauth::Token,
    repositories::stores::TokenStore,
};

pub struct TokenRepository {
    db: Arc<Database>,
}

impl TokenRepository {
    pub const COLLECTION: &'static str = "tokens";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Token> {
        self.db.collection::<Token>(Self::COLLECTION)
    }
}

#[async_trait]
impl Repository for TokenRepository {
    fn name(&self) -> &str {
        "token"
    }

    fn collection_name(&self) -> &str {
        Self::COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        let access_index = IndexModel::builder()
            .keys(doc! { "access_token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("access_token_unique".to_string())
                .build())
            .build();

        let refresh_index = IndexModel::builder()
            .keys(doc! { "refresh_token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("refresh_token_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([access_index, refresh_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TokenStore for TokenRepository {
    async fn create(&self, token: Token) -> AppResult<Token> {
        self.collection()
            .insert_one(&token)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(token)
    }

    async fn find_by_access_token(&self, access_token: &str) -> AppResult<Option<Token>> {
        self.collection()
            .find_one(doc! { "access_token": access_token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<Option<Token>> {
        self.collection()
            .find_one(doc! { "refresh_token": refresh_token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn revoke(&self, refresh_token: &str) -> AppResult<bool> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let revoked = self.collection()
            .find_one_and_update(
                doc! { "refresh_token": refresh_token, "revoked": false },
                doc! { "$set": { "revoked": true } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(revoked.is_some())
    }

    async fn purge_expired(&self, now: i64) -> AppResult<u64> {
        let result = self.collection()
            .delete_many(doc! {
                "revoked": true,
                "$expr": { "$lte": [{ "$add": ["$issued_at", "$expires_in"] }, now] }
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
