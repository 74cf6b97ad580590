//! # 사용자 관리 서비스 구현
//!
//! 사용자 등록과 비밀번호 인증을 담당합니다.
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost ([`PasswordConfig`](crate::config::PasswordConfig))
//! - **민감 정보 제거**: 응답은 항상 [`UserResponse`]로 변환되어 해시를 제외
//! - **동일한 실패 메시지**: 존재하지 않는 사용자와 비밀번호 불일치를 구분하지 않음

use std::sync::Arc;
use actix_web::web;
use crate::domain::dto::users::{RegisterUserRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::errors::{AppError, ErrorContext};
use crate::repositories::users::{UserRepository, USERNAME_EXISTS};
use crate::utils::string_utils::validate_required_string;

/// 로그인 실패 시 클라이언트에 전달되는 메시지
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { user_repo, bcrypt_cost }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 공백뿐인 사용자명/이름
    /// * `ConflictError` - 이미 사용 중인 사용자명
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, AppError> {
        let username = validate_required_string(&request.username, "username")?;
        let full_name = validate_required_string(&request.full_name, "fullName")?;

        // 중복이면 해싱 전에 거절 (저장 시 유니크 인덱스가 경합을 막음)
        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::ConflictError(USERNAME_EXISTS.to_string()));
        }

        let cost = self.bcrypt_cost;
        let password = request.password;
        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;

        let created = self
            .user_repo
            .create(User::new(username, password_hash, full_name))
            .await?;

        log::info!("사용자 등록 완료: {} ({})", created.username, created.id);

        Ok(UserResponse::from(created))
    }

    /// 사용자명/비밀번호를 검증하고 사용자 엔티티를 반환합니다.
    ///
    /// 실패 원인과 관계없이 `InvalidCredentials`를 반환합니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            log::warn!("로그인 실패: 존재하지 않는 사용자 {}", username);
            return Err(AppError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
        };

        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("로그인 실패: 비밀번호 불일치 {}", username);
            return Err(AppError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }
}
