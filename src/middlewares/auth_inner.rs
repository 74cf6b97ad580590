//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenType;
use crate::errors::{AppError, AuthError};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id());
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    // 핸들러를 호출하지 않고 바로 401 응답
                    let response = AppError::Unauthorized(err).error_response();
                    let (req, _) = req.into_parts();
                    Ok(ServiceResponse::new(req, response).map_into_right_body())
                }
            }
        })
    }
}

/// 요청 헤더에서 토큰을 꺼내 액세스 토큰으로 검증
///
/// 헤더 형식이 잘못된 경우 [`TokenService`]를 호출하지 않습니다.
fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|h| h.to_str().map_err(|_| AuthError::InvalidScheme))
        .transpose()?;

    let token = extract_bearer_token(auth_header)?;

    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AuthError::InvalidKey("TokenService is not registered".to_string()))?;

    let claims = token_service.verify(token, TokenType::Access)?;
    Ok(AuthenticatedUser::new(claims))
}

/// `Authorization` 헤더 값에서 Bearer 토큰을 추출
///
/// - 헤더 없음 → `MissingHeader`
/// - `Bearer`가 아닌 스킴 → `InvalidScheme`
/// - 토큰이 비어 있음 → `EmptyToken`
/// - 토큰 내부에 공백 포함 → `InvalidScheme`
pub fn extract_bearer_token(auth_header: Option<&str>) -> Result<&str, AuthError> {
    let auth_header = auth_header.ok_or(AuthError::MissingHeader)?;

    let (scheme, token) = auth_header
        .split_once(' ')
        .unwrap_or((auth_header, ""));

    if scheme != "Bearer" {
        return Err(AuthError::InvalidScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }
    if token.contains(char::is_whitespace) {
        return Err(AuthError::InvalidScheme);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use crate::errors::AuthErrorKind;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(extract_bearer_token(Some("Bearer   abc  ")), Ok("abc"));
    }

    #[test]
    fn test_extract_bearer_token_failures() {
        assert_eq!(extract_bearer_token(None), Err(AuthError::MissingHeader));
        assert_eq!(extract_bearer_token(Some("Token abc123")), Err(AuthError::InvalidScheme));
        assert_eq!(extract_bearer_token(Some("bearer abc123")), Err(AuthError::InvalidScheme));
        assert_eq!(extract_bearer_token(Some("Bearer")), Err(AuthError::EmptyToken));
        assert_eq!(extract_bearer_token(Some("Bearer ")), Err(AuthError::EmptyToken));
        assert_eq!(extract_bearer_token(Some("Bearer a b")), Err(AuthError::InvalidScheme));
        assert_eq!(extract_bearer_token(Some("")), Err(AuthError::InvalidScheme));
    }

    #[test]
    fn test_malformed_header_rejected_before_token_service_lookup() {
        // TokenService 미등록: 조회까지 갔다면 InvalidKey(Configuration)가 나와야 함
        for value in ["Token abc123", "Bearer ", "Bearer a b"] {
            let req = TestRequest::default()
                .insert_header((header::AUTHORIZATION, value))
                .to_srv_request();

            let err = authenticate(&req).err().unwrap();
            assert_eq!(err.kind(), AuthErrorKind::MalformedCredential, "{}", value);
        }

        let req = TestRequest::default().to_srv_request();
        assert_eq!(authenticate(&req).err(), Some(AuthError::MissingHeader));
    }

    #[test]
    fn test_well_formed_header_reaches_token_service_lookup() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_srv_request();

        let err = authenticate(&req).err().unwrap();
        assert_eq!(err.kind(), AuthErrorKind::Configuration);
    }
}
