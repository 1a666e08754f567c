use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::SessionId,
    error::ErrorBody,
    protocol::{
        ActiveSession, AuthResponse, CreateSessionRequest, Envelope, FriendList, HomeData,
        LeaderboardEntry, LoginRequest, Participant, RegisterRequest, Session,
    },
};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use url::Url;

use crate::error::ClientError;

/// Typed HTTP surface of the walkcore backend, one method per endpoint.
///
/// Responses are returned in their wire shape; envelope unwrapping is the
/// repository's job. Non-2xx answers are parsed as [`ErrorBody`] when the
/// backend sent one, with the HTTP status text as fallback.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    bearer_token: Mutex<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let mut raw = base_url.as_ref().to_string();
        // A trailing slash keeps Url::join from swallowing the base path.
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)
            .map_err(|err| ClientError::Network(format!("invalid base url '{raw}': {err}")))?;
        Ok(Self {
            http: Client::new(),
            base_url,
            bearer_token: Mutex::new(None),
        })
    }

    /// Installs or clears the credential attached as `Authorization: Bearer`.
    pub async fn set_bearer_token(&self, token: Option<String>) {
        *self.bearer_token.lock().await = token;
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.post_json("auth/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.post_json("auth/login", request).await
    }

    pub async fn home_overview(&self) -> Result<Envelope<HomeData>, ClientError> {
        self.get_json("users/me/overview").await
    }

    /// `data` is null when the user has no ongoing session.
    pub async fn active_session(&self) -> Result<Envelope<Option<ActiveSession>>, ClientError> {
        self.get_json("users/me/sessions/active").await
    }

    pub async fn sessions(&self) -> Result<Envelope<Vec<Session>>, ClientError> {
        self.get_json("sessions").await
    }

    pub async fn session_detail(&self, id: &SessionId) -> Result<Envelope<Session>, ClientError> {
        self.get_json(&format!("sessions/{id}")).await
    }

    pub async fn participants(
        &self,
        id: &SessionId,
    ) -> Result<Envelope<Vec<Participant>>, ClientError> {
        self.get_json(&format!("sessions/{id}/participants")).await
    }

    pub async fn leaderboard(
        &self,
        id: &SessionId,
    ) -> Result<Envelope<Vec<LeaderboardEntry>>, ClientError> {
        self.get_json(&format!("sessions/{id}/leaderboard")).await
    }

    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<Envelope<Session>, ClientError> {
        self.post_json("sessions", request).await
    }

    /// The one endpoint that answers without the `{ data: … }` envelope.
    pub async fn friends(&self) -> Result<FriendList, ClientError> {
        self.get_json("friends").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let request = self.authorize(self.http.get(url.clone())).await;
        let response = request.send().await.map_err(into_network_error)?;
        decode_response(url.as_str(), response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let request = self.authorize(self.http.post(url.clone())).await.json(body);
        let response = request.send().await.map_err(into_network_error)?;
        decode_response(url.as_str(), response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Network(format!("invalid endpoint '{path}': {err}")))
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.bearer_token.lock().await.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn decode_response<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(into_network_error);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    warn!(%url, status = status.as_u16(), %message, "backend rejected request");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn into_network_error(err: reqwest::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
