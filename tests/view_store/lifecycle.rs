//! Load lifecycle: flags, failure handling, advisory and overlapping loads.

use std::sync::Arc;

use curio::state::{LoadPhase, ViewType};
use curio::store::{LoadOutcome, ViewStateStore};

use crate::fake::{BASE, FakeFetch, view_url};

/// IIIF envelope whose manifest lives at `manifest`.
fn iiif_envelope(manifest: &str, pages: &str) -> String {
    format!(
        r#"{{"type":"iiif","data":{{"iiif":"{manifest}","rights":"http://rs/InC","page_pids":"{pages}","page":1}}}}"#
    )
}

#[tokio::test]
/// What: A full IIIF load fills the view and the advisory.
///
/// Inputs:
/// - Envelope for `pid123` and a manifest carrying a Content Advisory.
///
/// Output:
/// - `Loaded(Iiif)`, `Ready` phase, two page identifiers, advisory pending.
///
/// Details:
/// - Both stages must have been requested, in order.
async fn integration_iiif_load_with_advisory() {
    let manifest = "http://iiif.test/pid123/manifest.json";
    let fetch = FakeFetch::new()
        .body(&view_url("pid123"), 0, &iiif_envelope(manifest, "p1,p2"))
        .body(
            manifest,
            0,
            r#"{"metadata":[{"label":"Content Advisory","value":"Graphic content"}]}"#,
        );
    let store = ViewStateStore::new(fetch, BASE);

    let outcome = store.load_view("pid123", 1, None).await;

    assert_eq!(outcome, LoadOutcome::Loaded(ViewType::Iiif));
    let st = store.snapshot();
    assert_eq!(st.phase(), LoadPhase::Ready);
    assert_eq!(st.subject_id, "pid123");
    assert_eq!(st.iiif_manifest_url(), Some(manifest));
    assert_eq!(st.page_identifiers(), ["p1".to_string(), "p2".to_string()]);
    assert_eq!(st.advisory, "Graphic content");
    assert!(st.advisory_pending());
    assert_eq!(
        store.fetcher().calls(),
        vec![view_url("pid123"), manifest.to_string()]
    );

    store.clear_advisory();
    store.clear_advisory();
    let st = store.snapshot();
    assert!(st.advisory_dismissed);
    assert_eq!(st.advisory, "Graphic content");
    assert!(!st.advisory_pending());
}

#[tokio::test]
/// What: A connection failure raises `failed` and keeps the prior view.
///
/// Inputs:
/// - A successful WSLS load followed by a load whose URL has no route.
///
/// Output:
/// - `Failed`, `failed` true, `working` false, WSLS payload still present.
async fn integration_transport_failure_keeps_previous_view() {
    let fetch = FakeFetch::new().body(
        &view_url("wsls1"),
        0,
        r#"{"type":"wsls","data":{"title":"Parade"}}"#,
    );
    let store = ViewStateStore::new(fetch, BASE);
    assert_eq!(
        store.load_view("wsls1", 1, None).await,
        LoadOutcome::Loaded(ViewType::Wsls)
    );

    let outcome = store.load_view("offline", 1, None).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    let st = store.snapshot();
    assert!(st.failed);
    assert!(!st.working);
    assert_eq!(st.subject_id, "offline");
    assert_eq!(st.view_type(), ViewType::Wsls);
    assert_eq!(st.phase(), LoadPhase::Failed);
}

#[tokio::test]
/// What: A manifest 404 does not fail the load.
///
/// Inputs:
/// - Valid IIIF envelope; manifest URL answers 404.
///
/// Output:
/// - `Loaded(Iiif)` with an empty advisory.
async fn integration_manifest_error_is_absorbed() {
    let manifest = "http://iiif.test/m.json";
    let fetch = FakeFetch::new()
        .body(&view_url("pidM"), 0, &iiif_envelope(manifest, "only"))
        .status(manifest, 0, 404, None);
    let store = ViewStateStore::new(fetch, BASE);

    assert_eq!(
        store.load_view("pidM", 1, None).await,
        LoadOutcome::Loaded(ViewType::Iiif)
    );
    let st = store.snapshot();
    assert!(!st.failed);
    assert!(st.advisory.is_empty());
    assert_eq!(st.page_identifiers().len(), 1);
}

#[tokio::test(start_paused = true)]
/// What: Of two overlapping loads the later one wins.
///
/// Inputs:
/// - `slow` answers after 100 ms; `fast` is issued 10 ms later and answers at once.
///
/// Output:
/// - `slow` reports `Superseded`; final state describes `fast`.
///
/// Details:
/// - The stale response must not overwrite the newer payload.
async fn integration_latest_load_wins() {
    let fetch = FakeFetch::new()
        .body(
            &view_url("slow"),
            100,
            r#"{"type":"wsls","data":{"title":"Slow"}}"#,
        )
        .body(
            &view_url("fast"),
            0,
            r#"{"type":"archivematica","data":[{"key":"0","data":{"name":"pkg","type":"folder"}}]}"#,
        );
    let store = Arc::new(ViewStateStore::new(fetch, BASE));

    let first = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.load_view("slow", 1, None).await })
    };
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let second = store.load_view("fast", 1, None).await;
    let first = first.await.expect("join slow load");

    assert_eq!(second, LoadOutcome::Loaded(ViewType::Archivematica));
    assert_eq!(first, LoadOutcome::Superseded);
    let st = store.snapshot();
    assert_eq!(st.subject_id, "fast");
    assert_eq!(st.view_type(), ViewType::Archivematica);
    assert!(!st.working);
    assert_eq!(store.generation(), 2);
}

#[tokio::test(start_paused = true)]
/// What: Subscribers observe the working flag and the final result.
///
/// Inputs:
/// - Receiver taken before a delayed load starts.
///
/// Output:
/// - `working` seen true mid-flight, false once the load completes.
async fn integration_subscriber_observes_transitions() {
    let fetch = FakeFetch::new().body(
        &view_url("obs"),
        50,
        r#"{"type":"wsls","data":{"title":"Watched"}}"#,
    );
    let store = Arc::new(ViewStateStore::new(fetch, BASE));
    let mut rx = store.subscribe();

    let task = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.load_view("obs", 1, None).await })
    };
    rx.changed().await.expect("store alive");
    assert!(rx.borrow_and_update().working);
    rx.changed().await.expect("store alive");
    let done = rx.borrow_and_update().clone();
    assert!(!done.working);
    assert_eq!(done.view_type(), ViewType::Wsls);
    assert_eq!(
        task.await.expect("join load"),
        LoadOutcome::Loaded(ViewType::Wsls)
    );
}
