//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **생성자 주입**: `Database`를 생성자 인자로 받음
//! - **데이터 무결성**: `username` 유니크 인덱스 + 삽입 전 중복 확인
//! - **전체 교체 업데이트**: 엔티티가 불변 조건을 보장하므로 문서를 통째로 교체

use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::{is_duplicate_key_error, Database},
    domain::entities::users::User,
    repositories::stores::UserStore,
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: username(unique), created_at(desc)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ConflictError**: 사용자명 중복
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **사용자명 유니크 인덱스** - 중복 사용자명 방지 및 로그인 조회 최적화
    /// 2. **생성일 인덱스** - 최근 사용자 정렬
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성은 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user"
    }

    fn collection_name(&self) -> &str {
        Self::COLLECTION
    }

    async fn init(&self) -> AppResult<()> {
        self.create_indexes().await
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, user: User) -> AppResult<User> {
        if self.find_by_username(user.username()).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        debug!("사용자 저장 완료: {}", user.id());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let result = self.collection()
            .replace_one(doc! { "_id": user.id() }, user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
