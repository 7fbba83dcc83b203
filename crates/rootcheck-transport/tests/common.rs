#![allow(dead_code)]

use axum::{http::StatusCode, Router};

use rootcheck_app::{create_router, AppState};

/// Serve the app on an ephemeral local port and return its base URL.
pub async fn spawn_app(root_status: StatusCode) -> String {
    spawn_router(create_router(AppState::new(root_status))).await
}

/// Serve an arbitrary router on an ephemeral local port.
pub async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn dead_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
