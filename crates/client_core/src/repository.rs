use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    domain::SessionId,
    protocol::{
        ActiveSession, AuthResponse, CreateSessionRequest, FriendSimple, HomeData,
        LeaderboardEntry, LoginRequest, Participant, RegisterRequest, Session,
    },
};

use crate::{error::ClientError, transport::ApiClient};

/// Domain-shaped data access for the walkcore backend.
///
/// Implementations keep no hidden state and perform no caching, retry, or
/// request coalescing: every call goes to the network, and callers own the
/// avoidance of redundant calls. Leaderboard entries pass through in backend
/// order with their server-assigned ranks.
#[async_trait]
pub trait WalkcoreRepository: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ClientError>;
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ClientError>;
    async fn home_overview(&self) -> Result<HomeData, ClientError>;
    async fn active_session(&self) -> Result<Option<ActiveSession>, ClientError>;
    async fn all_sessions(&self) -> Result<Vec<Session>, ClientError>;
    async fn session_detail(&self, id: &SessionId) -> Result<Session, ClientError>;
    async fn participants(&self, id: &SessionId) -> Result<Vec<Participant>, ClientError>;
    async fn leaderboard(&self, id: &SessionId) -> Result<Vec<LeaderboardEntry>, ClientError>;
    async fn create_session(&self, request: CreateSessionRequest) -> Result<Session, ClientError>;
    async fn friends(&self) -> Result<Vec<FriendSimple>, ClientError>;
}

/// Pass-through implementation over [`ApiClient`], unwrapping exactly one
/// envelope level per call.
pub struct NetworkWalkcoreRepository {
    api: Arc<ApiClient>,
}

impl NetworkWalkcoreRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl WalkcoreRepository for NetworkWalkcoreRepository {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.api.register(&request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ClientError> {
        self.api.login(&request).await
    }

    async fn home_overview(&self) -> Result<HomeData, ClientError> {
        Ok(self.api.home_overview().await?.data)
    }

    async fn active_session(&self) -> Result<Option<ActiveSession>, ClientError> {
        Ok(self.api.active_session().await?.data)
    }

    async fn all_sessions(&self) -> Result<Vec<Session>, ClientError> {
        Ok(self.api.sessions().await?.data)
    }

    async fn session_detail(&self, id: &SessionId) -> Result<Session, ClientError> {
        Ok(self.api.session_detail(id).await?.data)
    }

    async fn participants(&self, id: &SessionId) -> Result<Vec<Participant>, ClientError> {
        Ok(self.api.participants(id).await?.data)
    }

    async fn leaderboard(&self, id: &SessionId) -> Result<Vec<LeaderboardEntry>, ClientError> {
        Ok(self.api.leaderboard(id).await?.data)
    }

    async fn create_session(&self, request: CreateSessionRequest) -> Result<Session, ClientError> {
        Ok(self.api.create_session(&request).await?.data)
    }

    async fn friends(&self) -> Result<Vec<FriendSimple>, ClientError> {
        Ok(self.api.friends().await?.friends)
    }
}

#[cfg(test)]
#[path = "tests/repository_tests.rs"]
mod tests;
