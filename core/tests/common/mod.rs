#![allow(dead_code)]

use std::future::Future;
use std::time::Duration;

/// Fails the test instead of hanging when a run never returns.
pub const DEADLOCK_GUARD: Duration = Duration::from_secs(10);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sift.parallel=trace")
        .with_test_writer()
        .try_init();
}

pub async fn guarded<F: Future>(fut: F) -> F::Output {
    tokio::time::timeout(DEADLOCK_GUARD, fut)
        .await
        .expect("run did not finish within the deadlock guard")
}

pub async fn step() {
    tokio::time::sleep(Duration::from_millis(2)).await;
}
