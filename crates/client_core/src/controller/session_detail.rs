use std::sync::Arc;

use shared::domain::SessionId;
use tokio::sync::watch;
use tracing::warn;

use crate::{controller::Phase, display::SessionOverview, repository::WalkcoreRepository};

#[derive(Debug, Clone, Default)]
pub struct SessionDetailUiState {
    pub phase: Phase<SessionOverview>,
}

/// Read-only screen for one session, loaded by id.
pub struct SessionDetailController {
    repository: Arc<dyn WalkcoreRepository>,
    state: watch::Sender<SessionDetailUiState>,
}

impl SessionDetailController {
    pub fn new(repository: Arc<dyn WalkcoreRepository>) -> Self {
        let (state, _) = watch::channel(SessionDetailUiState::default());
        Self { repository, state }
    }

    pub fn state(&self) -> SessionDetailUiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionDetailUiState> {
        self.state.subscribe()
    }

    /// Fetches the session and maps it for display. No-op while in flight.
    pub async fn load(&self, id: &SessionId) {
        let mut started = false;
        self.state.send_modify(|state| {
            if !state.phase.is_loading() {
                state.phase = Phase::Loading;
                started = true;
            }
        });
        if !started {
            return;
        }

        match self.repository.session_detail(id).await {
            Ok(session) => self.state.send_modify(|state| {
                state.phase = Phase::Success(SessionOverview::from(&session));
            }),
            Err(err) => {
                warn!(session_id = %id, error = %err, "session detail load failed");
                self.state
                    .send_modify(|state| state.phase = Phase::Error(err.display_message()));
            }
        }
    }
}
