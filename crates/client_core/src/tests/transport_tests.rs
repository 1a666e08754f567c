use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::oneshot};

use super::*;

async fn spawn_backend(router: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}/walkcore-backend/")
}

#[derive(Clone)]
struct CaptureState {
    tx: Arc<Mutex<Option<oneshot::Sender<Option<String>>>>>,
}

async fn handle_friends(
    State(state): State<CaptureState>,
    headers: HeaderMap,
) -> Json<FriendList> {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(auth);
    }
    Json(FriendList {
        friends: Vec::new(),
    })
}

fn capture_router() -> (Router, oneshot::Receiver<Option<String>>) {
    let (tx, rx) = oneshot::channel();
    let state = CaptureState {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let router = Router::new()
        .route("/walkcore-backend/friends", get(handle_friends))
        .with_state(state);
    (router, rx)
}

#[tokio::test]
async fn attaches_bearer_token_once_installed() {
    let (router, auth_rx) = capture_router();
    let base_url = spawn_backend(router).await;

    let client = ApiClient::new(&base_url).expect("client");
    client.set_bearer_token(Some("t1".to_string())).await;
    client.friends().await.expect("friends");

    let auth = auth_rx.await.expect("captured header");
    assert_eq!(auth.as_deref(), Some("Bearer t1"));
}

#[tokio::test]
async fn sends_no_authorization_header_without_a_token() {
    let (router, auth_rx) = capture_router();
    let base_url = spawn_backend(router).await;

    let client = ApiClient::new(&base_url).expect("client");
    client.friends().await.expect("friends");

    let auth = auth_rx.await.expect("captured header");
    assert_eq!(auth, None);
}

#[tokio::test]
async fn non_2xx_with_error_body_becomes_api_error() {
    let router = Router::new().route(
        "/walkcore-backend/sessions/missing",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new("error", "session not found")),
            )
        }),
    );
    let base_url = spawn_backend(router).await;
    let client = ApiClient::new(&base_url).expect("client");

    let err = client
        .session_detail(&SessionId::new("missing"))
        .await
        .expect_err("must fail");
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "session not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_text() {
    let router = Router::new().route(
        "/walkcore-backend/friends",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_backend(router).await;
    let client = ApiClient::new(&base_url).expect("client");

    let err = client.friends().await.expect_err("must fail");
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client =
        ApiClient::new(format!("http://{addr}/walkcore-backend/")).expect("client");
    let err = client.friends().await.expect_err("must fail");
    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn base_url_without_trailing_slash_still_resolves_endpoints() {
    let router = Router::new().route(
        "/walkcore-backend/friends",
        get(|| async {
            Json(FriendList {
                friends: Vec::new(),
            })
        }),
    );
    let base_url = spawn_backend(router).await;

    let trimmed = base_url.trim_end_matches('/').to_string();
    let client = ApiClient::new(&trimmed).expect("client");
    client.friends().await.expect("friends");
}
