use shared::{
    domain::SessionId,
    protocol::{ActiveSession, Session},
};

/// UI-facing summary of a session. Derived from wire data on the success
/// transition only; never sent back to the backend.
///
/// `creator_username` and `location_name` stay `None` until the backend
/// contract supplies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOverview {
    pub id: SessionId,
    pub title: String,
    pub creator_username: Option<String>,
    pub description: String,
    pub date_time_range: String,
    pub image_url: Option<String>,
    pub location_name: Option<String>,
}

// Timestamps are opaque ISO-8601 strings; the range is plain concatenation,
// no reformatting.
fn date_time_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

impl From<&ActiveSession> for SessionOverview {
    fn from(session: &ActiveSession) -> Self {
        Self {
            id: session.session_id.clone(),
            title: session.title.clone(),
            creator_username: None,
            description: "Current active session progress".to_string(),
            date_time_range: date_time_range(&session.start_time, &session.end_time),
            image_url: None,
            location_name: None,
        }
    }
}

impl From<&Session> for SessionOverview {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            title: session.title.clone(),
            creator_username: None,
            description: session.description.clone(),
            date_time_range: date_time_range(&session.start_time, &session.end_time),
            image_url: None,
            location_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{SessionMode, SessionStatus, UserId, Visibility};

    use super::*;

    #[test]
    fn active_session_maps_to_overview_without_reformatting_timestamps() {
        let session = ActiveSession {
            session_id: SessionId::new("s-1"),
            title: "Morning walk".to_string(),
            status: SessionStatus::Ongoing,
            participant_status: "JOINED".to_string(),
            start_time: "2026-01-07T05:00:14.997Z".to_string(),
            end_time: "2026-01-07T07:00:14.997Z".to_string(),
            total_steps: 1200,
        };

        let overview = SessionOverview::from(&session);
        assert_eq!(overview.id, SessionId::new("s-1"));
        assert_eq!(
            overview.date_time_range,
            "2026-01-07T05:00:14.997Z - 2026-01-07T07:00:14.997Z"
        );
        assert_eq!(overview.creator_username, None);
        assert_eq!(overview.location_name, None);
        assert_eq!(overview.image_url, None);
    }

    #[test]
    fn session_maps_description_verbatim() {
        let session = Session {
            id: SessionId::new("s-2"),
            title: "City loop".to_string(),
            description: "Around the park twice".to_string(),
            creator_id: UserId::new("u-9"),
            mode: SessionMode::OnSite,
            status: SessionStatus::Planned,
            visibility: Visibility::Public,
            max_participants: 10,
            step_target: 5000,
            start_time: "2026-01-08T12:00:00Z".to_string(),
            end_time: "2026-01-08T14:00:00Z".to_string(),
            start_lat: Some(52.37),
            start_long: Some(4.89),
        };

        let overview = SessionOverview::from(&session);
        assert_eq!(overview.description, "Around the park twice");
        assert_eq!(
            overview.date_time_range,
            "2026-01-08T12:00:00Z - 2026-01-08T14:00:00Z"
        );
    }
}
