use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use evotrade::error::StoreError;
use evotrade::store::{HandleState, ResilientStoreClient};
use evotrade::testkit::{self, FakeHandle, FlakyBackend, FlakyOperation};

/// Coerces a closure to the higher-ranked signature `execute_with` expects.
fn op<F>(f: F) -> F
where
    F: for<'a> Fn(&'a FakeHandle) -> BoxFuture<'a, Result<u32, StoreError>>,
{
    f
}

#[tokio::test]
async fn initialize_succeeds_on_third_attempt() {
    let backend = Arc::new(FlakyBackend::new(2));
    let client = ResilientStoreClient::new(
        Arc::clone(&backend),
        testkit::firestore(),
        testkit::timed_retry(40),
    );

    let started = Instant::now();
    client.initialize().await.expect("third attempt succeeds");
    let elapsed = started.elapsed();

    assert_eq!(backend.connect_calls(), 3);
    // Two failed attempts back off 40ms then 80ms.
    assert!(
        elapsed >= Duration::from_millis(120),
        "expected at least 120ms of backoff, got {elapsed:?}"
    );

    let status = client.status();
    assert_eq!(status.state, HandleState::Ready);
    assert_eq!(status.init_attempts, 3);
    assert!(status.connected_at.is_some());
    assert!(client.is_ready().await);
}

#[tokio::test]
async fn initialize_exhausts_attempts_and_surfaces_last_error() {
    let backend = Arc::new(FlakyBackend::always_failing());
    let client = ResilientStoreClient::new(
        Arc::clone(&backend),
        testkit::firestore(),
        testkit::fast_retry(),
    );

    match client.initialize().await {
        Err(StoreError::InitExhausted { attempts, source }) => {
            assert_eq!(attempts, 3);
            match *source {
                StoreError::Backend(msg) => assert!(
                    msg.contains("connect #3"),
                    "expected the last failure, got: {msg}"
                ),
                other => panic!("Expected backend error as source, got {other}"),
            }
        }
        other => panic!("Expected init exhaustion, got {other:?}"),
    }

    assert_eq!(backend.connect_calls(), 3);
    assert_eq!(client.status().state, HandleState::Absent);
    assert!(!client.is_ready().await);
}

#[tokio::test]
async fn connect_constructor_fails_when_initialization_exhausts() {
    let result = ResilientStoreClient::connect(
        FlakyBackend::always_failing(),
        testkit::firestore(),
        testkit::fast_retry(),
    )
    .await;

    assert!(matches!(
        result,
        Err(StoreError::InitExhausted { attempts: 3, .. })
    ));
}

#[tokio::test]
async fn execute_before_initialize_fails_without_remote_calls() {
    let backend = Arc::new(FlakyBackend::new(0));
    let client = ResilientStoreClient::new(
        Arc::clone(&backend),
        testkit::firestore(),
        testkit::fast_retry(),
    );

    let operation = FlakyOperation::new(0);
    match client.execute(&operation).await {
        Err(StoreError::NotInitialized) => {}
        other => panic!("Expected not-initialized error, got {other:?}"),
    }

    assert_eq!(operation.run_calls(), 0);
    assert_eq!(backend.connect_calls(), 0);
}

#[tokio::test]
async fn operation_retries_then_succeeds() {
    let client = ResilientStoreClient::connect(
        FlakyBackend::new(0),
        testkit::firestore(),
        testkit::fast_retry(),
    )
    .await
    .expect("clean connect");

    let operation = FlakyOperation::new(2);
    let result = client.execute(&operation).await.expect("third run succeeds");

    assert_eq!(result, 3);
    assert_eq!(operation.run_calls(), 3);
}

#[tokio::test]
async fn operation_exhaustion_returns_last_error_unchanged() {
    let client = ResilientStoreClient::connect(
        FlakyBackend::new(0),
        testkit::firestore(),
        testkit::timed_retry(40),
    )
    .await
    .expect("clean connect");

    let operation = FlakyOperation::always_failing();
    let started = Instant::now();
    let result = client.execute(&operation).await;
    let elapsed = started.elapsed();

    // The final failure comes back as the raw backend error, not a wrapper.
    match result {
        Err(StoreError::Backend(msg)) => assert!(
            msg.contains("run #3"),
            "expected the last failure, got: {msg}"
        ),
        other => panic!("Expected backend error, got {other:?}"),
    }
    assert_eq!(operation.run_calls(), 3);
    // Two failed attempts back off 20ms then 40ms.
    assert!(
        elapsed >= Duration::from_millis(60),
        "expected at least 60ms of backoff, got {elapsed:?}"
    );
}

#[tokio::test]
async fn execute_with_runs_closure_against_live_handle() {
    let client = ResilientStoreClient::connect(
        FlakyBackend::new(0),
        testkit::firestore(),
        testkit::fast_retry(),
    )
    .await
    .expect("clean connect");

    let result = client
        .execute_with(op(|handle| {
            async move {
                handle
                    .calls
                    .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                Ok(7)
            }
            .boxed()
        }))
        .await
        .expect("closure succeeds");

    assert_eq!(result, 7);
}

#[tokio::test]
async fn explicit_reinitialization_replaces_the_handle() {
    let backend = Arc::new(FlakyBackend::new(0));
    let client = ResilientStoreClient::new(
        Arc::clone(&backend),
        testkit::firestore(),
        testkit::fast_retry(),
    );

    client.initialize().await.expect("first init");
    client.initialize().await.expect("explicit re-init");

    assert_eq!(backend.connect_calls(), 2);
    assert_eq!(client.status().state, HandleState::Ready);
}

#[tokio::test]
async fn exhausted_client_still_rejects_operations() {
    let client = ResilientStoreClient::new(
        FlakyBackend::always_failing(),
        testkit::firestore(),
        testkit::fast_retry(),
    );
    assert!(client.initialize().await.is_err());

    let operation = FlakyOperation::new(0);
    assert!(matches!(
        client.execute(&operation).await,
        Err(StoreError::NotInitialized)
    ));
    assert_eq!(operation.run_calls(), 0);
}
