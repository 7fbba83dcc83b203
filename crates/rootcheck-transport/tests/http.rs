use axum::{http::StatusCode, response::Redirect, routing::get, Router};

use rootcheck_core::{check, check_root_endpoint, Error, Probe};
use rootcheck_transport::HttpTransport;

mod common;
use common::{dead_address, spawn_app, spawn_router};

#[tokio::test]
async fn running_app_passes() {
    let url = spawn_app(StatusCode::OK).await;
    let target = HttpTransport::new(&url).unwrap();
    check_root_endpoint(&target).await.unwrap();
}

#[tokio::test]
async fn stopped_app_is_a_transport_error() {
    let url = dead_address().await;
    let target = HttpTransport::new(&url).unwrap();

    let err = check_root_endpoint(&target).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn reconfigured_root_is_an_assertion_failure() {
    let url = spawn_app(StatusCode::SERVICE_UNAVAILABLE).await;
    let target = HttpTransport::new(&url).unwrap();

    let err = check_root_endpoint(&target).await.unwrap_err();
    assert_eq!(
        err,
        Error::AssertionFailure {
            expected: 200,
            actual: 503
        }
    );
}

#[tokio::test]
async fn other_paths_can_be_probed() {
    let url = spawn_app(StatusCode::OK).await;
    let target = HttpTransport::new(&format!("{url}/")).unwrap();
    assert_eq!(target.base_url(), url);

    check(&target, &Probe::root().with_path("/health"))
        .await
        .unwrap();

    let err = check(&target, &Probe::root().with_path("/missing"))
        .await
        .unwrap_err();
    assert_eq!(err.actual_status(), Some(404));
}

#[tokio::test]
async fn redirect_on_root_is_not_followed() {
    let app = Router::new()
        .route("/", get(|| async { Redirect::permanent("/health") }))
        .route("/health", get(|| async { StatusCode::OK }));
    let url = spawn_router(app).await;
    let target = HttpTransport::new(&url).unwrap();

    let err = check_root_endpoint(&target).await.unwrap_err();
    assert_eq!(
        err,
        Error::AssertionFailure {
            expected: 200,
            actual: 308
        }
    );
}

#[test]
fn rejects_unusable_urls() {
    for bad in [
        "not a url",
        "ftp://example.com",
        "http://example.com/?a=1",
        "http://example.com/#top",
    ] {
        let err = HttpTransport::new(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget(_)), "{bad}: {err:?}");
    }
}
