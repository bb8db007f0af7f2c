//! 관리자 Basic 인증 미들웨어
//!
//! 차단되지 않은 관리자 계정의 HTTP Basic 자격 증명을 요구합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::superuser_inner::SuperuserMiddlewareService;

/// 관리자 전용 스코프에 씌우는 미들웨어
///
/// `UserService`는 앱 데이터(`web::Data<UserService>`)에서 꺼내 씁니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperuserMiddleware;

impl SuperuserMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SuperuserMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SuperuserMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SuperuserMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
