use std::sync::Arc;

use shared::protocol::{AuthData, LoginRequest};
use tokio::sync::watch;
use tracing::warn;

use crate::{controller::Phase, error::ClientError, repository::WalkcoreRepository};

#[derive(Debug, Clone, Default)]
pub struct LoginUiState {
    pub email: String,
    pub password: String,
    pub phase: Phase<AuthData>,
}

/// View-state for the login screen. Success carries the issued token and the
/// authenticated user's summary.
pub struct LoginController {
    repository: Arc<dyn WalkcoreRepository>,
    state: watch::Sender<LoginUiState>,
}

impl LoginController {
    pub fn new(repository: Arc<dyn WalkcoreRepository>) -> Self {
        let (state, _) = watch::channel(LoginUiState::default());
        Self { repository, state }
    }

    pub fn state(&self) -> LoginUiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginUiState> {
        self.state.subscribe()
    }

    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.email = value;
            }
        });
    }

    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.password = value;
            }
        });
    }

    /// Authenticates with the current form fields. No-op while a previous
    /// submit is still in flight.
    pub async fn submit(&self) {
        let mut request = None;
        self.state.send_modify(|state| {
            if state.phase.is_loading() {
                return;
            }
            match build_request(state) {
                Ok(built) => {
                    request = Some(built);
                    state.phase = Phase::Loading;
                }
                Err(err) => state.phase = Phase::Error(err.display_message()),
            }
        });
        let Some(request) = request else {
            return;
        };

        match self.repository.login(request).await {
            Ok(response) => self
                .state
                .send_modify(|state| state.phase = Phase::Success(response.data)),
            Err(err) => {
                warn!(error = %err, "login failed");
                self.state
                    .send_modify(|state| state.phase = Phase::Error(err.display_message()));
            }
        }
    }
}

fn build_request(state: &LoginUiState) -> Result<LoginRequest, ClientError> {
    if state.email.trim().is_empty() || state.password.trim().is_empty() {
        return Err(ClientError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    Ok(LoginRequest {
        email: state.email.clone(),
        password: state.password.clone(),
    })
}
