//! # Data Transfer Objects (DTO) Module
//!
//! API 경계와 서비스 경계에서 데이터를 전송하기 위한 객체들을 정의합니다.
//! 엔티티와 DTO를 분리하여 비밀번호 해시 같은 내부 값이 응답으로 새어 나가지 않게 합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 사용자 관련 DTO
//! │   ├── request/        # 요청 DTO (클라이언트 → 서버)
//! │   └── response/       # 응답 DTO (서버 → 클라이언트)
//! └── oauth/              # 클라이언트 등록, 인가 코드 / 토큰 발급 입력
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! pub async fn create_user(
//!     user_service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let request = payload.into_inner();
//!     let (user, generated_password) = user_service
//!         .register(&request.username, request.password.as_deref())
//!         .await?;
//!
//!     Ok(HttpResponse::Created().json(CreateUserResponse {
//!         user: UserResponse::from(user),
//!         generated_password,
//!     }))
//! }
//! ```

pub mod oauth;
pub mod users;

pub use oauth::*;
pub use users::*;
