use std::sync::Arc;

use shared::{
    domain::{SessionMode, Visibility},
    protocol::{CreateSessionRequest, Session},
};
use tokio::sync::watch;
use tracing::warn;

use crate::{controller::Phase, error::ClientError, repository::WalkcoreRepository};

const DEFAULT_STEP_TARGET: i64 = 5000;
const DEFAULT_MAX_PARTICIPANTS: i64 = 10;

/// Form state for creating a session. Numeric fields stay free-text and fall
/// back to their defaults when unparsable; visibility is always PUBLIC.
#[derive(Debug, Clone)]
pub struct SessionAddUiState {
    pub title: String,
    pub description: String,
    pub step_target: String,
    pub max_participants: String,
    pub mode: SessionMode,
    pub start_time: String,
    pub end_time: String,
    pub phase: Phase<Session>,
}

impl Default for SessionAddUiState {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            step_target: DEFAULT_STEP_TARGET.to_string(),
            max_participants: DEFAULT_MAX_PARTICIPANTS.to_string(),
            mode: SessionMode::Remote,
            start_time: String::new(),
            end_time: String::new(),
            phase: Phase::Idle,
        }
    }
}

pub struct SessionAddController {
    repository: Arc<dyn WalkcoreRepository>,
    state: watch::Sender<SessionAddUiState>,
}

impl SessionAddController {
    pub fn new(repository: Arc<dyn WalkcoreRepository>) -> Self {
        let (state, _) = watch::channel(SessionAddUiState::default());
        Self { repository, state }
    }

    pub fn state(&self) -> SessionAddUiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionAddUiState> {
        self.state.subscribe()
    }

    pub fn set_title(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.title = value;
            }
        });
    }

    pub fn set_description(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.description = value;
            }
        });
    }

    pub fn set_step_target(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.step_target = value;
            }
        });
    }

    pub fn set_max_participants(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.max_participants = value;
            }
        });
    }

    pub fn set_mode(&self, value: SessionMode) {
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.mode = value;
            }
        });
    }

    /// Sets the planned start/end window, both ISO-8601 strings.
    pub fn set_window(&self, start: impl Into<String>, end: impl Into<String>) {
        let start = start.into();
        let end = end.into();
        self.state.send_modify(|state| {
            if state.phase.accepts_edits() {
                state.start_time = start;
                state.end_time = end;
            }
        });
    }

    /// Submits the form; success carries the session the backend echoed
    /// back. No-op while a previous submit is still in flight.
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

        match self.repository.create_session(request).await {
            Ok(session) => self
                .state
                .send_modify(|state| state.phase = Phase::Success(session)),
            Err(err) => {
                warn!(error = %err, "session creation failed");
                self.state
                    .send_modify(|state| state.phase = Phase::Error(err.display_message()));
            }
        }
    }
}

fn build_request(state: &SessionAddUiState) -> Result<CreateSessionRequest, ClientError> {
    if state.title.trim().is_empty() {
        return Err(ClientError::Validation("Title is required".to_string()));
    }
    Ok(CreateSessionRequest {
        title: state.title.clone(),
        description: state.description.clone(),
        mode: state.mode,
        visibility: Visibility::Public,
        max_participants: state
            .max_participants
            .trim()
            .parse()
            .unwrap_or(DEFAULT_MAX_PARTICIPANTS),
        step_target: state
            .step_target
            .trim()
            .parse()
            .unwrap_or(DEFAULT_STEP_TARGET),
        start_time: state.start_time.clone(),
        end_time: state.end_time.clone(),
    })
}
