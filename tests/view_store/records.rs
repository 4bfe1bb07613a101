//! Record kinds: archivematica normalisation, WSLS readers and request shape.

use curio::sources::FetchError;
use curio::state::{PackageNode, ViewType, WslsRecord};
use curio::store::{LoadOutcome, ViewStateStore};

use crate::fake::{BASE, FakeFetch, view_url};

#[tokio::test]
/// What: A single archivematica object is stored as a one-element list.
///
/// Inputs:
/// - Envelope whose `data` is an object with a folder and one file.
///
/// Output:
/// - One package record whose tree holds one file.
async fn integration_archivematica_object_is_wrapped() {
    let body = r#"{"type":"archivematica","data":{
        "key":"0-root","data":{"name":"root","type":"folder"},
        "children":[{"key":"1-a","data":{"name":"a.pdf","type":"file","format":"PDF"}}]}}"#;
    let fetch = FakeFetch::new().body(&view_url("pkg1"), 0, body);
    let store = ViewStateStore::new(fetch, BASE);

    assert_eq!(
        store.load_view("pkg1", 1, None).await,
        LoadOutcome::Loaded(ViewType::Archivematica)
    );
    let st = store.snapshot();
    assert_eq!(st.package_records().len(), 1);
    let tree = PackageNode::from_value(&st.package_records()[0]).expect("object record");
    assert_eq!(tree.file_count(), 1);
    assert!(st.iiif().is_none());
    assert!(st.page_identifiers().is_empty());
}

#[tokio::test]
/// What: WSLS data is kept opaque and readable through `WslsRecord`.
///
/// Inputs:
/// - WSLS envelope with a title, a video URL and an unknown extra field.
///
/// Output:
/// - Raw payload preserved verbatim; typed reader exposes known fields.
async fn integration_wsls_record_roundtrips() {
    let body = r#"{"type":"wsls","data":{"title":"Parade","has_video":true,"video_url":"http://v/1.mp4","extra":42}}"#;
    let fetch = FakeFetch::new().body(&view_url("w1"), 0, body);
    let store = ViewStateStore::new(fetch, BASE);
    store.load_view("w1", 1, None).await;

    let st = store.snapshot();
    let raw = st.legacy_record_data().expect("wsls payload");
    assert_eq!(raw["extra"], 42);
    let rec = WslsRecord::from_value(raw).expect("object");
    assert_eq!(rec.title, "Parade");
    assert!(rec.has_video);
    assert_eq!(rec.video_url.as_deref(), Some("http://v/1.mp4"));
    assert!(rec.pdf_url.is_none());
}

#[tokio::test]
/// What: Page and unit reach the service as query parameters.
///
/// Inputs:
/// - `load_view("uva-lib:9", 4, Some("unit 7"))`.
///
/// Output:
/// - Single request with an encoded pid, `page=4` and an encoded unit.
async fn integration_page_and_unit_forwarded() {
    let url = format!("{BASE}/api/view/uva-lib%3A9?page=4&unit=unit%207");
    let fetch = FakeFetch::new().body(&url, 0, r#"{"type":"wsls","data":{}}"#);
    let store = ViewStateStore::new(fetch, BASE);

    assert_eq!(
        store.load_view("uva-lib:9", 4, Some("unit 7")).await,
        LoadOutcome::Loaded(ViewType::Wsls)
    );
    assert_eq!(store.fetcher().calls(), vec![url]);
}

#[tokio::test]
/// What: Malformed envelopes and server errors fail the load.
///
/// Inputs:
/// - Unknown `type`, missing `data`, non-JSON body and a 500 status.
///
/// Output:
/// - Every load reports `Failed` and leaves `working` false.
async fn integration_bad_responses_fail() {
    let fetch = FakeFetch::new()
        .body(&view_url("odd"), 0, r#"{"type":"video","data":{}}"#)
        .body(&view_url("empty"), 0, r#"{"type":"wsls"}"#)
        .body(&view_url("html"), 0, "<html>oops</html>")
        .status(&view_url("boom"), 0, 500, Some("internal error"));
    let store = ViewStateStore::new(fetch, BASE);

    for pid in ["odd", "empty", "html", "boom"] {
        assert_eq!(store.load_view(pid, 1, None).await, LoadOutcome::Failed, "{pid}");
        let st = store.snapshot();
        assert!(st.failed, "{pid}");
        assert!(!st.working, "{pid}");
    }
}

#[tokio::test]
/// What: A blank pid fails before any request is made.
async fn integration_blank_pid_makes_no_request() {
    let store = ViewStateStore::new(FakeFetch::new(), BASE);
    assert_eq!(store.load_view("  ", 1, None).await, LoadOutcome::Failed);
    assert!(store.fetcher().calls().is_empty());
    assert!(matches!(
        curio::sources::build_view_url(BASE, "", 1, None),
        Err(FetchError::InvalidRequest(_))
    ));
}
