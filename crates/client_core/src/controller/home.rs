use std::sync::Arc;

use shared::protocol::HomeData;
use tokio::sync::watch;
use tracing::warn;

use crate::{
    controller::Phase, display::SessionOverview, error::ClientError,
    repository::WalkcoreRepository,
};

/// Everything the home screen shows: profile with stats, plus the user's
/// ongoing session mapped for display (absent when none is active).
#[derive(Debug, Clone)]
pub struct HomeSnapshot {
    pub data: HomeData,
    pub active_session: Option<SessionOverview>,
}

#[derive(Debug, Clone, Default)]
pub struct HomeUiState {
    pub phase: Phase<HomeSnapshot>,
}

/// Read-only screen: no form fields, one refresh action.
pub struct HomeController {
    repository: Arc<dyn WalkcoreRepository>,
    state: watch::Sender<HomeUiState>,
}

impl HomeController {
    pub fn new(repository: Arc<dyn WalkcoreRepository>) -> Self {
        let (state, _) = watch::channel(HomeUiState::default());
        Self { repository, state }
    }

    pub fn state(&self) -> HomeUiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeUiState> {
        self.state.subscribe()
    }

    /// Fetches the overview and the active session as two sequential calls;
    /// a failure in the first skips the second. No-op while in flight.
    pub async fn refresh(&self) {
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

        let outcome = self.fetch().await;
        self.state.send_modify(|state| {
            state.phase = match outcome {
                Ok(snapshot) => Phase::Success(snapshot),
                Err(err) => {
                    warn!(error = %err, "home refresh failed");
                    Phase::Error(err.display_message())
                }
            };
        });
    }

    async fn fetch(&self) -> Result<HomeSnapshot, ClientError> {
        let data = self.repository.home_overview().await?;
        let active = self.repository.active_session().await?;
        Ok(HomeSnapshot {
            data,
            active_session: active.as_ref().map(SessionOverview::from),
        })
    }
}
