//! OAuth2 저장소 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 저장소(MongoDB + Redis 또는 인메모리)를 연결하고 서비스를 조립한 뒤
//! 관리자 계정을 보장하고 REST API를 제공합니다.

use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use oauth_storage_backend::caching::redis::RedisClient;
use oauth_storage_backend::config::{
    Environment, OAuthConfig, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
    SuperuserConfig,
};
use oauth_storage_backend::core::errors::AppResult;
use oauth_storage_backend::core::registry::ServiceLocator;
use oauth_storage_backend::db::Database;
use oauth_storage_backend::domain::credentials::PasswordHasher;
use oauth_storage_backend::repositories::{
    AuthorizationCodeRepository, CachedTokenStore, ClientRepository, MemoryStore, TokenRepository,
    UserRepository,
};
use oauth_storage_backend::repositories::stores::{
    AuthorizationCodeStore, ClientStore, TokenStore, UserStore,
};
use oauth_storage_backend::routes::configure_all_routes;
use oauth_storage_backend::services::oauth::OAuthStorage;
use oauth_storage_backend::services::users::UserService;

/// 서비스가 사용하는 저장소 트레이트 객체 묶음
struct Stores {
    users: Arc<dyn UserStore>,
    clients: Arc<dyn ClientStore>,
    codes: Arc<dyn AuthorizationCodeStore>,
    tokens: Arc<dyn TokenStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 OAuth2 저장소 백엔드 시작중... (환경: {:?})", Environment::current());

    let (user_service, oauth_storage) = bootstrap()
        .await
        .map_err(|e| {
            error!("서비스 초기화 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    spawn_purge_loop(oauth_storage.clone());

    // HTTP 서버 시작
    start_http_server(user_service, oauth_storage).await
}

/// 저장소 연결, 서비스 조립, 레지스트리 초기화, 관리자 계정 보장까지 수행합니다.
async fn bootstrap() -> AppResult<(Arc<UserService>, Arc<OAuthStorage>)> {
    let locator = ServiceLocator::new();

    let stores = match StorageConfig::backend() {
        StorageBackend::Mongo => initialize_mongo_stores(&locator).await?,
        StorageBackend::Memory => initialize_memory_store(&locator),
    };

    let hasher = Arc::new(PasswordHasher::from_config()?);
    locator.set(hasher.clone());

    let user_service = Arc::new(UserService::new(stores.users, hasher));
    locator.register_service(user_service.clone());

    let oauth_storage = Arc::new(OAuthStorage::new(
        stores.clients,
        stores.codes,
        stores.tokens,
        user_service.clone(),
        OAuthConfig::settings(),
    ));
    locator.register_service(oauth_storage.clone());

    // 모든 리포지토리와 서비스 초기화
    locator.initialize_all().await?;

    ensure_superuser(&user_service).await?;

    Ok((locator.get::<UserService>()?, locator.get::<OAuthStorage>()?))
}

/// MongoDB 리포지토리를 만들고 등록합니다.
///
/// Redis 연결에 실패하면 토큰 캐시 없이 계속 진행합니다.
async fn initialize_mongo_stores(locator: &ServiceLocator) -> AppResult<Stores> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new(&StorageConfig::mongodb_uri(), &StorageConfig::database_name()).await?
    );
    locator.set(database.clone());

    info!("✅ MongoDB 연결 성공");

    let redis_client = match RedisClient::new(&StorageConfig::redis_url()).await {
        Ok(client) => {
            info!("✅ Redis 연결 성공");
            let client = Arc::new(client);
            locator.set(client.clone());
            Some(client)
        }
        Err(e) => {
            warn!("Redis 연결 실패, 토큰 캐시 없이 진행합니다: {}", e);
            None
        }
    };

    let users = Arc::new(UserRepository::new(database.clone()));
    let clients = Arc::new(ClientRepository::new(database.clone()));
    let codes = Arc::new(AuthorizationCodeRepository::new(database.clone()));
    let token_repo = Arc::new(TokenRepository::new(database));

    locator.register_repository(users.clone());
    locator.register_repository(clients.clone());
    locator.register_repository(codes.clone());
    locator.register_repository(token_repo.clone());

    let tokens: Arc<dyn TokenStore> = match redis_client {
        Some(cache) => Arc::new(CachedTokenStore::new(token_repo, cache)),
        None => token_repo,
    };

    Ok(Stores { users, clients, codes, tokens })
}

fn initialize_memory_store(locator: &ServiceLocator) -> Stores {
    warn!("💾 인메모리 저장소 사용 - 프로세스 종료 시 데이터가 사라집니다");

    let store = Arc::new(MemoryStore::new());
    locator.register_repository(store.clone());

    Stores {
        users: store.clone(),
        clients: store.clone(),
        codes: store.clone(),
        tokens: store,
    }
}

/// 만료된 인가 코드와 폐기된 토큰을 주기적으로 삭제합니다.
fn spawn_purge_loop(oauth_storage: Arc<OAuthStorage>) {
    let period = Duration::from_secs(OAuthConfig::purge_interval_secs());
    info!("🧹 만료 레코드 정리 주기: {}초", period.as_secs());

    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(period);
        loop {
            interval.tick().await;
            if let Err(e) = oauth_storage.purge_expired().await {
                warn!("만료 레코드 정리 실패: {}", e);
            }
        }
    });
}

/// `SUPERUSER_USERNAME`/`SUPERUSER_PASSWORD`가 설정된 경우 관리자 계정을 보장합니다.
async fn ensure_superuser(user_service: &UserService) -> AppResult<()> {
    match SuperuserConfig::credentials() {
        Some((username, password)) => {
            if user_service.ensure_superuser(&username, &password).await? {
                info!("👤 관리자 계정 생성: {}", username);
            } else {
                info!("👤 관리자 계정이 이미 존재합니다: {}", username);
            }
        }
        None => warn!("SUPERUSER_USERNAME/SUPERUSER_PASSWORD 미설정 - 관리자 계정을 생성하지 않습니다"),
    }
    Ok(())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: Arc<UserService>,
    oauth_storage: Arc<OAuthStorage>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let user_data = web::Data::from(user_service);
    let storage_data = web::Data::from(oauth_storage);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(user_data.clone())
            .app_data(storage_data.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 eprintln 사용
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("{} 프로필 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 관리 도구와 로컬 개발 서버에서의 호출을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
