use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::{make_test_state, read_json};

async fn execute(app: &Router, query: &str) -> Value {
    let body = json!({ "query": query }).to_string();
    let response = app
        .clone()
        .oneshot(
            Request::post("/gql")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await
}

#[tokio::test]
async fn it_should_list_activities_with_spots_left() {
    let app = router(make_test_state());
    let json = execute(
        &app,
        r#"{ activity(name: "Chess Club") { name maxParticipants spotsLeft participants } }"#,
    )
    .await;

    let chess = &json["data"]["activity"];
    assert_eq!(chess["name"], "Chess Club");
    assert_eq!(chess["maxParticipants"], 12);
    assert_eq!(chess["spotsLeft"], 10);
}

#[tokio::test]
async fn it_should_return_null_for_an_unknown_activity() {
    let app = router(make_test_state());
    let json = execute(&app, r#"{ activity(name: "Quidditch") { name } }"#).await;
    assert_eq!(json["data"]["activity"], Value::Null);
}

#[tokio::test]
async fn it_should_share_the_roster_with_the_rest_api() {
    let app = router(make_test_state());

    let signed_up = execute(
        &app,
        r#"mutation { signUp(activity: "Art Club", email: "gql@example.com") }"#,
    )
    .await;
    assert_eq!(signed_up["data"]["signUp"], "Signed up gql@example.com for Art Club");

    let listed = execute(&app, "{ activities { name participants } }").await;
    let art = listed["data"]["activities"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "Art Club")
        .unwrap()
        .clone();
    assert!(
        art["participants"]
            .as_array()
            .unwrap()
            .contains(&json!("gql@example.com"))
    );

    let removed = execute(
        &app,
        r#"mutation { unregister(activity: "Art Club", email: "gql@example.com") }"#,
    )
    .await;
    assert_eq!(removed["data"]["unregister"], "Removed gql@example.com from Art Club");
}

#[tokio::test]
async fn it_should_surface_domain_rejections_as_graphql_errors() {
    let app = router(make_test_state());
    let json = execute(
        &app,
        r#"mutation { unregister(activity: "Art Club", email: "nobody@example.com") }"#,
    )
    .await;

    assert_eq!(
        json["errors"][0]["message"],
        "nobody@example.com is not signed up for Art Club"
    );
}
