use std::sync::Arc;

use shared::protocol::{AuthData, RegisterRequest};
use tokio::sync::watch;
use tracing::warn;

use crate::{controller::Phase, error::ClientError, repository::WalkcoreRepository};

#[derive(Debug, Clone, Default)]
pub struct RegisterUiState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phase: Phase<AuthData>,
}

pub struct RegisterController {
    repository: Arc<dyn WalkcoreRepository>,
    state: watch::Sender<RegisterUiState>,
}

impl RegisterController {
    pub fn new(repository: Arc<dyn WalkcoreRepository>) -> Self {
        let (state, _) = watch::channel(RegisterUiState::default());
        Self { repository, state }
    }

    pub fn state(&self) -> RegisterUiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RegisterUiState> {
        self.state.subscribe()
    }

    pub fn set_username(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.username = value;
            }
        });
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

        match self.repository.register(request).await {
            Ok(response) => self
                .state
                .send_modify(|state| state.phase = Phase::Success(response.data)),
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.state
                    .send_modify(|state| state.phase = Phase::Error(err.display_message()));
            }
        }
    }
}

fn build_request(state: &RegisterUiState) -> Result<RegisterRequest, ClientError> {
    if state.username.trim().is_empty()
        || state.email.trim().is_empty()
        || state.password.trim().is_empty()
    {
        return Err(ClientError::Validation(
            "Username, email and password are required".to_string(),
        ));
    }
    Ok(RegisterRequest {
        username: state.username.clone(),
        email: state.email.clone(),
        password: state.password.clone(),
    })
}
