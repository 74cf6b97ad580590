//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//!
//! - [`MongoUserRepository`] - `users` 컬렉션 (username 유니크 인덱스)
//! - [`InMemoryUserRepository`] - 프로세스 메모리 (개발/테스트용)

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::db::{is_duplicate_key, Database};
use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 중복 사용자명 에러 메시지
pub const USERNAME_EXISTS: &str = "username already exists";

/// 사용자 데이터 액세스 인터페이스
///
/// 모든 메서드는 `Result<T, AppError>`를 반환합니다.
///
/// - **DatabaseError**: 저장소 연결/쿼리 오류
/// - **ConflictError**: 사용자명 중복
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자명으로 사용자 조회
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장
    ///
    /// 같은 사용자명이 이미 있으면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 인덱스 생성
    ///
    /// - `username` 유니크 인덱스
    /// - `createdDate` 내림차순 인덱스
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_date_index = IndexModel::builder()
            .keys(doc! { "createdDate": -1 })
            .options(IndexOptions::builder()
                .name("created_date_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, created_date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError(USERNAME_EXISTS.to_string()));
        }

        // 동시 등록은 유니크 인덱스가 막음
        self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(USERNAME_EXISTS.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(user)
    }
}

/// 메모리 기반 사용자 리포지토리
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;

        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError(USERNAME_EXISTS.to_string()));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}

fn lock_poisoned() -> AppError {
    AppError::InternalError("user store lock poisoned".to_string())
}
