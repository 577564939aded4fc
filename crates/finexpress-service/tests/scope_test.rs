//! Integration tests for role-scoped visibility.

mod helpers;

use chrono::Duration;

use finexpress_core::error::ErrorKind;
use finexpress_core::types::PageRequest;
use finexpress_entity::fine::FineStatus;
use finexpress_service::FineQuery;

use helpers::TestApp;

#[tokio::test]
async fn test_driver_sees_only_claimed_fines() {
    let app = TestApp::new().await;
    let officer = app.officer("John");
    let driver = app.driver("dave@example.com");

    // Same plate, but only one fine is associated with the driver's email.
    app.issue(&officer, "SPD-01", "ABC123", Some("dave@example.com"))
        .await;
    app.issue(&officer, "RLT-01", "ABC123", None).await;
    app.issue(&officer, "SPD-02", "ABC123", Some("other@example.com"))
        .await;

    let visible = app
        .fines
        .list_fines(&driver, &FineQuery::default())
        .await
        .unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].offense.code, "SPD-01");
}

#[tokio::test]
async fn test_driver_email_match_is_case_insensitive() {
    let app = TestApp::new().await;
    let officer = app.officer("John");
    let driver = app.driver("Dave@Example.COM");

    app.issue(&officer, "SPD-01", "ABC123", Some("dave@example.com"))
        .await;

    let visible = app
        .fines
        .list_fines(&driver, &FineQuery::default())
        .await
        .unwrap();
    assert_eq!(visible.len(), 1);
}

#[tokio::test]
async fn test_officer_sees_only_own_issuances() {
    let app = TestApp::new().await;
    let john = app.officer("John");
    let maria = app.officer("Maria");

    app.issue(&john, "SPD-01", "AAA111", None).await;
    app.issue(&maria, "RLT-01", "BBB222", None).await;

    let johns = app
        .fines
        .list_fines(&john, &FineQuery::default())
        .await
        .unwrap();
    assert_eq!(johns.len(), 1);
    assert_eq!(johns[0].issued_by, john.id);
}

#[tokio::test]
async fn test_admin_sees_everything() {
    let app = TestApp::new().await;
    let john = app.officer("John");
    let maria = app.officer("Maria");

    app.issue(&john, "SPD-01", "AAA111", Some("a@example.com")).await;
    app.issue(&maria, "RLT-01", "BBB222", None).await;

    let all = app
        .fines
        .list_fines(&app.admin(), &FineQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_out_of_scope_lookup_is_not_found() {
    let app = TestApp::new().await;
    let officer = app.officer("John");
    let stranger = app.driver("stranger@example.com");

    let fine = app
        .issue(&officer, "SPD-01", "ABC123", Some("dave@example.com"))
        .await;

    // Existence is not leaked to out-of-scope actors.
    let err = app.fines.get_fine(&stranger, fine.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_free_text_search_within_scope() {
    let app = TestApp::new().await;
    let officer = app.officer("John");

    app.issue(&officer, "SPD-01", "FAST99", None).await;
    app.issue(&officer, "RLT-01", "SLOW11", None).await;

    let by_plate = app
        .fines
        .list_fines(
            &officer,
            &FineQuery {
                search: Some("fast".into()),
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(by_plate.len(), 1);
    assert_eq!(by_plate[0].license_plate, "FAST99");

    let by_description = app
        .fines
        .list_fines(
            &officer,
            &FineQuery {
                search: Some("red light".into()),
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].offense.code, "RLT-01");
}

#[tokio::test]
async fn test_status_filter_matches_projection() {
    let app = TestApp::new().await;
    let officer = app.officer("John");

    app.issue(&officer, "SPD-01", "AAA111", None).await;
    app.clock.advance(Duration::days(10));
    app.issue(&officer, "SPD-01", "BBB222", None).await;
    // First fine is now 10 days old; push past its 14-day grace period.
    app.clock.advance(Duration::days(5));

    let overdue = app
        .fines
        .list_fines(
            &officer,
            &FineQuery {
                search: None,
                status: Some(FineStatus::Overdue),
            },
        )
        .await
        .unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].license_plate, "AAA111");

    let pending = app
        .fines
        .list_fines(
            &officer,
            &FineQuery {
                search: None,
                status: Some(FineStatus::Pending),
            },
        )
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].license_plate, "BBB222");
}

#[tokio::test]
async fn test_paged_listing() {
    let app = TestApp::new().await;
    let officer = app.officer("John");

    for i in 0..5 {
        app.clock.advance(Duration::hours(1));
        app.issue(&officer, "SPD-01", &format!("PLT{i:03}"), None).await;
    }

    let page = app
        .fines
        .list_fines_page(&officer, &FineQuery::default(), &PageRequest::new(1, 2))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next);
    // Newest first carries through to pages.
    assert_eq!(page.items[0].license_plate, "PLT004");

    let last = app
        .fines
        .list_fines_page(&officer, &FineQuery::default(), &PageRequest::new(3, 2))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 1);
    assert!(!last.has_next);
    assert!(last.has_previous);
}

#[tokio::test]
async fn test_listing_is_newest_first() {
    let app = TestApp::new().await;
    let officer = app.officer("John");

    app.issue(&officer, "SPD-01", "AAA111", None).await;
    app.clock.advance(Duration::days(1));
    app.issue(&officer, "SPD-01", "BBB222", None).await;

    let listed = app
        .fines
        .list_fines(&officer, &FineQuery::default())
        .await
        .unwrap();
    assert_eq!(listed[0].license_plate, "BBB222");
    assert_eq!(listed[1].license_plate, "AAA111");
}
