//! # 라이선스 리포지토리 구현

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::db::{is_duplicate_key, Database};
use crate::domain::entities::licenses::License;
use crate::errors::AppError;

/// 중복 라이선스 코드 에러 메시지
pub const LICENSE_EXISTS: &str = "license already exists";

/// 라이선스 데이터 액세스 인터페이스
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// 코드로 라이선스 조회
    async fn find_by_code(&self, code: &str) -> Result<Option<License>, AppError>;

    /// 새 라이선스 저장
    ///
    /// 같은 코드가 이미 있으면 `ConflictError`를 반환합니다.
    async fn create(&self, license: License) -> Result<License, AppError>;
}

/// MongoDB 기반 라이선스 리포지토리
pub struct MongoLicenseRepository {
    collection: Collection<License>,
}

impl MongoLicenseRepository {
    pub const COLLECTION: &'static str = "licenses";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<License>(Self::COLLECTION),
        }
    }

    /// `code` 유니크 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("code_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(code_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl LicenseRepository for MongoLicenseRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<License>, AppError> {
        self.collection
            .find_one(doc! { "code": code })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, license: License) -> Result<License, AppError> {
        if self.find_by_code(&license.code).await?.is_some() {
            return Err(AppError::ConflictError(LICENSE_EXISTS.to_string()));
        }

        self.collection
            .insert_one(&license)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(LICENSE_EXISTS.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(license)
    }
}

/// 메모리 기반 라이선스 리포지토리
#[derive(Default)]
pub struct InMemoryLicenseRepository {
    licenses: RwLock<HashMap<String, License>>,
}

impl InMemoryLicenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LicenseRepository for InMemoryLicenseRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<License>, AppError> {
        let licenses = self.licenses.read().map_err(|_| lock_poisoned())?;
        Ok(licenses.get(code).cloned())
    }

    async fn create(&self, license: License) -> Result<License, AppError> {
        let mut licenses = self.licenses.write().map_err(|_| lock_poisoned())?;

        if licenses.contains_key(&license.code) {
            return Err(AppError::ConflictError(LICENSE_EXISTS.to_string()));
        }

        licenses.insert(license.code.clone(), license.clone());
        Ok(license)
    }
}

fn lock_poisoned() -> AppError {
    AppError::InternalError("license store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_in_memory_code_is_unique() {
        let repo = InMemoryLicenseRepository::new();
        let created = repo
            .create(License::new("LIC-1".to_string(), Some(3), "u1".to_string()))
            .await
            .unwrap();

        assert_eq!(repo.find_by_code("LIC-1").await.unwrap(), Some(created));

        let err = repo
            .create(License::new("LIC-1".to_string(), None, "u2".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConflictError(ref msg) if msg == LICENSE_EXISTS));
    }
}
