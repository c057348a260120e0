use storybook_versions::version::sources::EmbeddedManifestSource;
use storybook_versions::version::store::VersionStore;
use storybook_versions::version::types::{DocsUrlOptions, VersionInfo};

const VERSION_CHECK: &str = r#"{
    "success": true,
    "data": {
        "latest": { "version": "5.2.3" },
        "next": { "version": "5.3.0-alpha.15" }
    },
    "time": 1571565216284
}"#;

fn store_with(current: &str, latest: &str) -> VersionStore {
    let payload = format!(
        r#"{{ "success": true, "data": {{ "latest": {{ "version": "{}" }} }}, "time": 0 }}"#,
        latest
    );
    VersionStore::from_embedded(VersionInfo::new(current), &payload)
}

#[test]
fn initial_state_has_current_latest_and_next() {
    let store = VersionStore::from_embedded(VersionInfo::new("3.0.0"), VERSION_CHECK);

    assert_eq!(store.current_version(), &VersionInfo::new("3.0.0"));
    assert_eq!(store.latest_version(), Some(&VersionInfo::new("5.2.3")));
    assert_eq!(
        store.state().next,
        Some(VersionInfo::new("5.3.0-alpha.15"))
    );
    assert!(store.update_available());
}

#[tokio::test]
async fn refresh_from_embedded_source_keeps_current() {
    let mut store = VersionStore::new(VersionInfo::new("3.0.0"));

    store
        .refresh(&EmbeddedManifestSource::new(VERSION_CHECK))
        .await;

    assert_eq!(store.current_version(), &VersionInfo::new("3.0.0"));
    assert_eq!(store.state().latest, Some(VersionInfo::new("5.2.3")));
}

#[test]
fn docs_url_for_latest_and_older_installs() {
    let options = DocsUrlOptions {
        versioned: true,
        ..Default::default()
    };

    assert_eq!(
        store_with("7.6.1", "7.6.1").docs_url(&options, None),
        "https://storybook.js.org/docs/"
    );
    assert_eq!(
        store_with("7.6.1", "7.6.10").docs_url(&options, None),
        "https://storybook.js.org/docs/"
    );
    assert_eq!(
        store_with("7.2.5", "7.6.10").docs_url(&options, None),
        "https://storybook.js.org/docs/7.2/"
    );
    assert_eq!(
        store_with("8.0.0-beta", "7.6.10").docs_url(&options, None),
        "https://storybook.js.org/docs/8.0/"
    );
}

#[test]
fn docs_url_with_renderer() {
    let options = DocsUrlOptions {
        renderer: true,
        ..Default::default()
    };

    assert_eq!(
        store_with("5.2.1", "5.2.1").docs_url(&options, Some("vue")),
        "https://storybook.js.org/docs/?renderer=vue"
    );
}

#[test]
fn update_available_across_release_channels() {
    assert!(!store_with("5.2.1", "5.2.1").update_available());
    assert!(!store_with("5.2.1", "5.2.2").update_available());
    assert!(store_with("5.2.1", "5.3.1").update_available());
    assert!(store_with("5.2.1", "6.2.1").update_available());
    assert!(!store_with("5.2.1", "6.2.1-prerelease.0").update_available());
    assert!(store_with("5.2.1-prerelease.0", "6.2.1").update_available());
    assert!(!store_with("5.2.1-prerelease.0", "3.2.1").update_available());
}
