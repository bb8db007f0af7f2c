use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::oauth::Client;

/// 클라이언트 등록 응답
///
/// 시크릿은 등록 직후 이 응답으로만 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: String,
    pub client_id: String,
    pub client_secret: String,
    pub grant_types: Vec<String>,
    pub response_types: Vec<String>,
    pub redirect_uris: Vec<String>,
    pub scope: String,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        let Client {
            id,
            client_id,
            client_secret,
            grant_types,
            response_types,
            redirect_uris,
            scope,
            created_at,
        } = client;

        Self {
            id,
            client_id,
            client_secret,
            grant_types,
            response_types,
            redirect_uris,
            scope,
            created_at,
        }
    }
}
