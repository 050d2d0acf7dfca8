// End to end flow over the full HTTP router, sharing one in-memory store
// across requests the way a running process does.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rstest::rstest;
use serde_json::Value;
use tower::ServiceExt;

use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::core::catalog::seed_activities;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::{make_test_state, read_json};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

async fn participants_of(app: &Router, activity: &str) -> Vec<String> {
    let (status, json) = send(
        app,
        Request::get("/activities").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(json[activity]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn fresh_catalog_lists_the_chess_club() {
    let app = router(make_test_state());
    let (status, json) = send(
        &app,
        Request::get("/activities").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.is_object());
    assert!(json.get("Chess Club").is_some());
}

#[tokio::test]
async fn fresh_catalog_lists_every_seeded_activity() {
    let app = router(make_test_state());
    let (_, json) = send(
        &app,
        Request::get("/activities").body(Body::empty()).unwrap(),
    )
    .await;

    for activity in seed_activities() {
        assert!(
            json.get(&activity.name).is_some(),
            "{} missing from the listing",
            activity.name
        );
    }
}

#[tokio::test]
async fn concurrent_sign_ups_for_one_activity_all_succeed() {
    let store = Arc::new(InMemoryActivityStore::seeded(seed_activities()));
    store.set_delay_save_ms(5);
    let app = router(AppState::in_memory(store));

    let ((first, _), (second, _)) = tokio::join!(
        send(
            &app,
            Request::post("/activities/Chess%20Club/signup?email=a@example.com")
                .body(Body::empty())
                .unwrap(),
        ),
        send(
            &app,
            Request::post("/activities/Chess%20Club/signup?email=b@example.com")
                .body(Body::empty())
                .unwrap(),
        )
    );

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    let roster = participants_of(&app, "Chess Club").await;
    assert!(roster.contains(&"a@example.com".to_string()));
    assert!(roster.contains(&"b@example.com".to_string()));
}

#[rstest]
#[case("pytest.user1@example.com")]
#[case("pytest.user2@example.com")]
#[tokio::test]
async fn sign_up_and_unregister_flow(#[case] email: &str) {
    let app = router(make_test_state());
    let before = participants_of(&app, "Chess Club").await;
    assert!(!before.contains(&email.to_string()));

    let (status, json) = send(
        &app,
        Request::post(format!("/activities/Chess%20Club/signup?email={email}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("Signed up"));
    assert!(participants_of(&app, "Chess Club").await.contains(&email.to_string()));

    let (status, json) = send(
        &app,
        Request::delete(format!("/activities/Chess%20Club/unregister?email={email}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("Removed"));

    let after = participants_of(&app, "Chess Club").await;
    assert!(!after.contains(&email.to_string()));
    assert_eq!(after, before);
}

#[tokio::test]
async fn duplicate_sign_up_leaves_the_roster_unchanged() {
    let app = router(make_test_state());
    let path = "/activities/Math%20Club/signup?email=twice@example.com";

    let (first, _) = send(&app, Request::post(path).body(Body::empty()).unwrap()).await;
    let (second, json) = send(&app, Request::post(path).body(Body::empty()).unwrap()).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::CONFLICT);
    assert!(json["detail"].as_str().unwrap().contains("already signed up"));
    let roster = participants_of(&app, "Math Club").await;
    assert_eq!(
        roster.iter().filter(|p| p.as_str() == "twice@example.com").count(),
        1
    );
}

#[tokio::test]
async fn unregister_twice_reports_not_found_the_second_time() {
    let app = router(make_test_state());
    let path = "/activities/Gym%20Class/unregister?email=john@mergington.edu";

    let (first, _) = send(&app, Request::delete(path).body(Body::empty()).unwrap()).await;
    let (second, _) = send(&app, Request::delete(path).body(Body::empty()).unwrap()).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sign_up_stops_at_capacity() {
    let app = router(make_test_state());
    // Math Club seats 10 and starts with 2.
    for n in 0..8 {
        let (status, _) = send(
            &app,
            Request::post(format!("/activities/Math%20Club/signup?email=s{n}@example.com"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = send(
        &app,
        Request::post("/activities/Math%20Club/signup?email=late@example.com")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["detail"], "Math Club is full (10 participants)");
    assert_eq!(participants_of(&app, "Math Club").await.len(), 10);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = router(make_test_state());
    let (status, json) = send(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
