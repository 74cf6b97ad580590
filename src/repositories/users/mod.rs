//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] trait과 MongoDB/메모리 구현체를 제공합니다.
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo = MongoUserRepository::new(&database);
//! let user = repo.find_by_username("alice").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
