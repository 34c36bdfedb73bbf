//! Integration tests for the listing and content endpoint.

mod helpers;

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::Value;

use explorer_core::events::ExplorerEvent;
use explorer_core::types::RootSpec;

fn names(entries: &Value) -> Vec<&str> {
    entries
        .as_array()
        .expect("entries should be an array")
        .iter()
        .map(|e| e["name"].as_str().expect("entry should have a name"))
        .collect()
}

fn collect_ids<'a>(entries: &'a Value, ids: &mut Vec<&'a str>) {
    for entry in entries.as_array().into_iter().flatten() {
        if let Some(id) = entry["id"].as_str() {
            ids.push(id);
        }
        collect_ids(&entry["children"], ids);
    }
}

#[tokio::test]
async fn test_listing_wraps_root_and_orders_folders_first() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/files").await;

    assert_eq!(response.status, StatusCode::OK);
    let roots = response.body.as_array().expect("listing should be an array");
    assert_eq!(roots.len(), 1);

    let root = &roots[0];
    assert_eq!(root["name"], "@root");
    assert_eq!(root["type"], "folder");
    assert_eq!(root["path"], app.config.explorer.roots[0].path.as_str());
    assert_eq!(names(&root["children"]), ["src", "zeta", "README.md"]);

    let src = &root["children"][0];
    assert_eq!(src["path"], app.path_of("src"));
    assert_eq!(names(&src["children"]), ["nested", "lib.rs"]);

    let readme = &root["children"][2];
    assert_eq!(readme["type"], "file");
    assert_eq!(readme["ext"], ".md");
    assert_eq!(readme["size"], 19);
    assert!(readme.get("children").is_none());
}

#[tokio::test]
async fn test_listing_skips_ignored_names() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/files").await;

    assert!(!response.text.contains("node_modules"));
    assert!(!response.text.contains("dep.js"));
}

#[tokio::test]
async fn test_listing_empty_folder_has_empty_children() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/files").await;

    let zeta = &response.body[0]["children"][1];
    assert_eq!(zeta["name"], "zeta");
    assert_eq!(zeta["children"], Value::Array(vec![]));
}

#[tokio::test]
async fn test_listing_ids_are_unique() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/files").await;

    let mut ids = Vec::new();
    collect_ids(&response.body, &mut ids);
    // @root, src, nested, deep.txt, lib.rs, zeta, README.md
    assert_eq!(ids.len(), 7);
    assert!(ids.iter().all(|id| id.len() == 32));
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
}

#[tokio::test]
async fn test_listing_without_ids() {
    let app = helpers::TestApp::with_config(|config, _| {
        config.explorer.listing.include_ids = false;
    })
    .await;

    let response = app.get("/files").await;

    let mut ids = Vec::new();
    collect_ids(&response.body, &mut ids);
    assert!(ids.is_empty());
    assert!(response.body[0].get("id").is_none());
}

#[tokio::test]
async fn test_listing_grouped_by_label() {
    let app = helpers::TestApp::with_config(|config, _| {
        config.explorer.listing.group_by_label = true;
    })
    .await;

    let response = app.get("/files").await;

    assert_eq!(response.status, StatusCode::OK);
    let grouped = response.body.as_object().expect("listing should be an object");
    assert_eq!(grouped.len(), 1);
    assert_eq!(names(&grouped["@root"]), ["src", "zeta", "README.md"]);
}

#[tokio::test]
async fn test_listing_missing_root_is_empty_and_reported() {
    let app = helpers::TestApp::with_config(|config, root| {
        let missing = root.join("does-not-exist").to_string_lossy().into_owned();
        config.explorer.roots.push(RootSpec::new(missing));
    })
    .await;

    let response = app.get("/files").await;

    assert_eq!(response.status, StatusCode::OK);
    let roots = response.body.as_array().expect("listing should be an array");
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[1]["name"], "1");
    assert_eq!(roots[1]["children"], Value::Array(vec![]));
    assert!(
        app.events()
            .iter()
            .any(|e| matches!(e, ExplorerEvent::TraversalFailed { .. }))
    );
}

#[tokio::test]
async fn test_empty_file_path_falls_back_to_listing() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/files?file_path=").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
}

#[tokio::test]
async fn test_read_file_as_text() {
    let app = helpers::TestApp::new().await;
    let path = app.path_of("README.md");

    let response = app.get(&app.content_uri(&path, None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "README.md");
    assert_eq!(response.body["ext"], ".md");
    assert_eq!(response.body["content"], "# Fixture <readme>\n");
    assert_eq!(response.body["size"], 19);
    assert_eq!(response.body["path"], path.as_str());
}

#[tokio::test]
async fn test_read_file_as_html() {
    let app = helpers::TestApp::new().await;
    let path = app.path_of("README.md");

    let response = app.get(&app.content_uri(&path, Some("html"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["content"], "# Fixture &lt;readme&gt;\n");
    assert_eq!(response.body["size"], 19);
}

#[tokio::test]
async fn test_unknown_content_type_is_text() {
    let app = helpers::TestApp::new().await;
    let path = app.path_of("README.md");

    let response = app.get(&app.content_uri(&path, Some("markdown"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["content"], "# Fixture <readme>\n");
}

#[tokio::test]
async fn test_read_utf16le_file_with_bom() {
    let app = helpers::TestApp::new().await;
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "h\u{e9} <b>".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = app.write_file("wide name.txt", &bytes);

    let text = app.get(&app.content_uri(&path, None)).await;
    assert_eq!(text.status, StatusCode::OK);
    assert_eq!(text.body["content"], "\u{feff}h\u{e9} <b>");
    assert_eq!(text.body["size"], 7);
    assert_eq!(text.body["name"], "wide name.txt");

    let html = app.get(&app.content_uri(&path, Some("html"))).await;
    assert_eq!(html.body["content"], "\u{feff}h\u{e9} &lt;b&gt;");
    assert_eq!(html.body["size"], 7);
}

#[tokio::test]
async fn test_read_missing_file_is_404() {
    let app = helpers::TestApp::new().await;
    let path = app.path_of("missing.txt");

    let response = app.get(&app.content_uri(&path, None)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, serde_json::json!({ "error": "File not found" }));
    assert!(
        app.events()
            .iter()
            .any(|e| matches!(e, ExplorerEvent::FileReadFailed { .. }))
    );
}

#[tokio::test]
async fn test_read_directory_is_404() {
    let app = helpers::TestApp::new().await;
    let path = app.path_of("src");

    let response = app.get(&app.content_uri(&path, None)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "File not found");
}

#[tokio::test]
async fn test_confined_reads_reject_outside_paths() {
    let outside = tempfile::tempdir().unwrap();
    let secret = outside.path().join("secret.txt");
    std::fs::write(&secret, "secret").unwrap();

    let app = helpers::TestApp::with_config(|config, _| {
        config.explorer.confine_to_roots = true;
    })
    .await;

    let inside = app
        .get(&app.content_uri(&app.path_of("src/lib.rs"), None))
        .await;
    assert_eq!(inside.status, StatusCode::OK);

    let response = app
        .get(&app.content_uri(&secret.to_string_lossy(), None))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(
        app.events()
            .iter()
            .any(|e| matches!(e, ExplorerEvent::OutsideRoots { .. }))
    );
}
