//! End-to-end flows: real app loop against a mock SCIM server.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use std::time::Duration;

use common::TestCtx;
use kittest::Queryable;

#[tokio::test(flavor = "multi_thread")]
async fn initial_fetch_populates_the_table() {
    let mut test = TestCtx::new_app().await;

    // First frame dispatches the refresh; later frames sync the result.
    test.harness.step();
    tokio::time::sleep(Duration::from_millis(300)).await;
    test.harness.step();
    test.harness.step();

    test.harness.get_by_label("Jane Doe");
    test.harness.get_by_label("jdoe");
    test.harness.get_by_label("Google");
    test.harness.get_by_label("alice@example.org");
}

#[tokio::test(flavor = "multi_thread")]
async fn a_failed_fetch_is_reported_inline() {
    let mut test = TestCtx::new_app_with_status(500).await;

    test.harness.step();
    tokio::time::sleep(Duration::from_millis(300)).await;
    test.harness.step();
    test.harness.step();

    test.harness.get_by_label_contains("Could not load users");
}
