use serde::{Deserialize, Serialize};

use crate::domain::{SessionId, SessionMode, SessionStatus, UserId, Visibility};

/// Standard `{ data: … }` wrapper the backend nests successful payloads in.
/// The friends endpoint is the one exception; see [`FriendList`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth endpoints carry their status and message alongside the data field
/// instead of using the plain envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub status: String,
    pub message: String,
    pub data: AuthData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeData {
    pub profile: UserProfile,
    pub stats: UserStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub gender: String,
}

/// Aggregate lifetime statistics. The backend serves steps and distance as
/// pre-formatted strings; they stay opaque on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_steps: String,
    pub total_distance: String,
    pub total_active_time: i64,
    pub total_calories_burned: i64,
    pub longest_streak: i64,
}

/// The user's single ongoing session. At most one is ever returned; the
/// endpoint answers `{ "data": null }` when none is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub session_id: SessionId,
    pub title: String,
    pub status: SessionStatus,
    pub participant_status: String,
    pub start_time: String,
    pub end_time: String,
    pub total_steps: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub description: String,
    pub creator_id: UserId,
    pub mode: SessionMode,
    pub status: SessionStatus,
    pub visibility: Visibility,
    pub max_participants: i64,
    pub step_target: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_long: Option<f64>,
}

/// One row of a session ranking. Rank is assigned server-side and entries
/// arrive already ordered; nothing re-sorts them here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: UserId,
    pub total_steps: i64,
    pub approx_distance: String,
    pub calories_burned: i64,
    pub user: UserName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserName {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub user_id: UserId,
    pub username: String,
    pub status: String,
    pub is_admin: bool,
}

/// The friends endpoint skips the standard envelope and wraps its list in a
/// `friends` key instead. The inconsistency is part of the backend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendList {
    pub friends: Vec<FriendSimple>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendSimple {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub title: String,
    pub description: String,
    pub mode: SessionMode,
    pub visibility: Visibility,
    pub max_participants: i64,
    pub step_target: i64,
    pub start_time: String,
    pub end_time: String,
}
