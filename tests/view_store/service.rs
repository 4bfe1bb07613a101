//! Service endpoints: health, version and oEmbed.

use curio::sources::{FetchError, build_oembed_url, fetch_health, fetch_oembed, fetch_version};

use crate::fake::{BASE, FakeFetch};

#[tokio::test]
/// What: A 500 health response still reports which dependency is down.
///
/// Inputs:
/// - `/healthcheck` answering 500 with `iiif: false`.
///
/// Output:
/// - Decoded status; `is_healthy` false.
async fn integration_health_reports_failing_dependency() {
    let fetch = FakeFetch::new().status(
        &format!("{BASE}/healthcheck"),
        0,
        500,
        Some(r#"{"alive":true,"iiif":false,"tracksys":true}"#),
    );
    let health = fetch_health(&fetch, BASE).await.expect("decodable body");
    assert!(health.alive);
    assert!(!health.iiif);
    assert!(!health.is_healthy());
}

#[tokio::test]
/// What: Version text is trimmed; a missing service is a transport error.
async fn integration_version_and_unreachable() {
    let fetch = FakeFetch::new().body(&format!("{BASE}/version"), 0, "Curio version 1.4.0\n");
    assert_eq!(
        fetch_version(&fetch, BASE).await.expect("version"),
        "Curio version 1.4.0"
    );
    let err = fetch_version(&fetch, "http://elsewhere.test")
        .await
        .expect_err("no route");
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
/// What: oEmbed requests encode the item URL and decode the document.
///
/// Inputs:
/// - Item URL with a colon and bounds 800x600.
///
/// Output:
/// - Document title and `rich` type; empty URL rejected without a request.
async fn integration_oembed_fetch() {
    let item = "https://curio.test/view/uva-lib:1";
    let url = build_oembed_url(BASE, item, Some(800), Some(600));
    assert!(url.starts_with(&format!("{BASE}/oembed?url=https%3A%2F%2Fcurio.test")));
    assert!(url.ends_with("&format=json&maxwidth=800&maxheight=600"));

    let fetch = FakeFetch::new().body(
        &url,
        0,
        r#"{"version":"1.0","type":"rich","title":"Parade","html":"<iframe></iframe>","width":800,"height":600}"#,
    );
    let doc = fetch_oembed(&fetch, BASE, item, Some(800), Some(600))
        .await
        .expect("oembed");
    assert_eq!(doc.title, "Parade");
    assert_eq!(doc.kind, "rich");

    let calls_before = fetch.calls().len();
    assert!(matches!(
        fetch_oembed(&fetch, BASE, "", None, None).await,
        Err(FetchError::InvalidRequest(_))
    ));
    assert_eq!(fetch.calls().len(), calls_before);
}
