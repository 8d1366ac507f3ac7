//! End-to-end repository and pipeline properties: normalization
//! deduplication, atomic find-or-insert, check recording, and the
//! latest-check-per-url listing.

use pagecheck::checker::{inspect_html, normalize_url};
use pagecheck::models::PageSummary;
use pagecheck::repository::{
    create_diesel_pool_from_url, initialize_schema, CheckRepository, SqlitePool, UrlRepository,
};

/// Create a temporary SQLite database with the schema applied.
async fn setup_test_db() -> (SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");

    let pool = create_diesel_pool_from_url(&db_path.display().to_string())
        .expect("Failed to create pool");
    initialize_schema(pool.clone())
        .await
        .expect("Failed to initialize schema");

    (pool, dir)
}

#[test]
fn equivalent_urls_normalize_to_one_value() {
    let variants = [
        "https://example.com",
        "https://example.com/",
        "https://EXAMPLE.com/some/path",
        "https://example.com/?query=1",
        "https://example.com/page#section",
        "HTTPS://Example.Com:443/deep/path?a=b#c",
    ];

    for variant in variants {
        assert_eq!(
            normalize_url(variant).unwrap(),
            "https://example.com",
            "variant: {variant}"
        );
    }
}

#[tokio::test]
async fn resubmission_resolves_to_the_same_row() {
    let (pool, _dir) = setup_test_db().await;
    let repo = UrlRepository::new(pool);

    let first = normalize_url("https://example.com/about").unwrap();
    let second = normalize_url("https://EXAMPLE.com/careers?ref=x").unwrap();

    let (a, created_a) = repo.create_or_get(&first).await.unwrap();
    let (b, created_b) = repo.create_or_get(&second).await.unwrap();

    assert!(created_a);
    assert!(!created_b);
    assert_eq!(a.id, b.id);
    assert_eq!(repo.list_with_latest_check().await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_submissions_leave_one_row() {
    let (pool, _dir) = setup_test_db().await;
    let repo = UrlRepository::new(pool);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.create_or_get("https://raced.example").await.unwrap().0
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().id);
    }

    ids.dedup();
    assert_eq!(ids.len(), 1);
    assert_eq!(repo.list_with_latest_check().await.unwrap().len(), 1);
}

#[tokio::test]
async fn successful_check_stores_extracted_fields() {
    let (pool, _dir) = setup_test_db().await;
    let urls = UrlRepository::new(pool.clone());
    let checks = CheckRepository::new(pool);

    let (url, _) = urls.create_or_get("https://example.com").await.unwrap();

    let body = r#"<title>A</title><h1>B</h1><meta name="description" content="C">"#;
    let summary = inspect_html(body);
    checks.record(url.id, Some(200), summary).await.unwrap();

    let history = checks.list_for_url(url.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status_code, Some(200));
    assert_eq!(history[0].title.as_deref(), Some("A"));
    assert_eq!(history[0].h1.as_deref(), Some("B"));
    assert_eq!(history[0].description.as_deref(), Some("C"));
}

#[tokio::test]
async fn error_page_without_tags_stores_status_only() {
    let (pool, _dir) = setup_test_db().await;
    let urls = UrlRepository::new(pool.clone());
    let checks = CheckRepository::new(pool);

    let (url, _) = urls.create_or_get("https://missing.example").await.unwrap();

    let summary = inspect_html("Not Found");
    checks.record(url.id, Some(404), summary).await.unwrap();

    let history = checks.list_for_url(url.id).await.unwrap();
    assert_eq!(history[0].status_code, Some(404));
    assert!(history[0].title.is_none());
    assert!(history[0].h1.is_none());
    assert!(history[0].description.is_none());
}

#[tokio::test]
async fn listing_pairs_each_url_with_its_latest_check_only() {
    let (pool, _dir) = setup_test_db().await;
    let urls = UrlRepository::new(pool.clone());
    let checks = CheckRepository::new(pool);

    let (checked, _) = urls.create_or_get("https://checked.example").await.unwrap();
    let (never, _) = urls.create_or_get("https://never.example").await.unwrap();

    checks
        .record(checked.id, Some(500), PageSummary::default())
        .await
        .unwrap();
    checks
        .record(checked.id, Some(200), PageSummary::default())
        .await
        .unwrap();

    let listing = urls.list_with_latest_check().await.unwrap();
    assert_eq!(listing.len(), 2);

    let checked_row = listing.iter().find(|u| u.id == checked.id).unwrap();
    // Most recent check wins
    assert_eq!(checked_row.last_status_code, Some(200));
    assert!(checked_row.last_checked_at.is_some());

    let never_row = listing.iter().find(|u| u.id == never.id).unwrap();
    assert_eq!(never_row.last_status_code, None);
    assert!(never_row.last_checked_at.is_none());
}

#[tokio::test]
async fn rejected_input_creates_nothing() {
    let (pool, _dir) = setup_test_db().await;
    let repo = UrlRepository::new(pool);

    assert!(normalize_url("").is_err());
    assert!(normalize_url(&format!("https://{}.com", "a".repeat(300))).is_err());
    // Validation happens before the repository is ever touched; the table
    // stays empty
    assert!(repo.list_with_latest_check().await.unwrap().is_empty());
}
