//! SuperuserMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures_util::future::LocalBoxFuture;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::AuthenticatedUser;
use crate::services::users::UserService;

const BASIC_REALM: &str = "Basic realm=\"admin\"";

/// 실제 인증 로직을 수행하는 서비스
pub struct SuperuserMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SuperuserMiddlewareService<S>
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
            match authenticate_superuser(&req).await {
                Ok(user) => {
                    log::debug!("관리자 인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("관리자 인증 실패: {} {}: {}", req.method(), req.path(), err);

                    let mut response = err.error_response();
                    if matches!(err, AppError::AuthenticationError(_)) {
                        response.headers_mut().insert(
                            header::WWW_AUTHENTICATE,
                            header::HeaderValue::from_static(BASIC_REALM),
                        );
                    }

                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Basic 자격 증명을 검증하고 관리자 여부를 확인
async fn authenticate_superuser(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let user_service = req
        .app_data::<web::Data<UserService>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("UserService가 등록되지 않았습니다".to_string()))?;

    let auth_header = req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let (username, password) = parse_basic_auth(auth_header)
        .ok_or_else(|| AppError::AuthenticationError("잘못된 Basic 인증 형식입니다".to_string()))?;

    let user = user_service.authenticate(&username, &password).await?;

    if !user.is_superuser() {
        return Err(AppError::AuthorizationError("관리자 권한이 필요합니다".to_string()));
    }

    Ok(AuthenticatedUser::from(&user))
}

/// `Basic <base64(username:password)>` 헤더를 해석합니다.
///
/// 비밀번호에는 `:`가 포함될 수 있으므로 첫 번째 구분자에서만 나눕니다.
pub(crate) fn parse_basic_auth(header_value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}
