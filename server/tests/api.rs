use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use collab_server::models::Creator;
use collab_server::{create_routes, AppState, MemStorage, Storage};

fn app() -> (Router, Arc<MemStorage>) {
    let storage = Arc::new(MemStorage::new());
    let router = create_routes(AppState::new(storage.clone()));
    (router, storage)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn field_names(body: &Value) -> Vec<String> {
    body["error"]["details"]["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|f| f["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn creator_signup(email: &str) -> Value {
    json!({
        "name": "Lena Ortiz",
        "email": email,
        "interest": "creator",
        "platforms": ["instagram"],
        "instagramHandle": "@lena.makes",
        "instagramFollowers": "10k-50k",
        "niches": ["Crafts"],
        "languages": ["English"],
        "location": "Austin, TX"
    })
}

#[tokio::test]
async fn health_reports_storage_backend() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["storage"], json!("memory"));
}

#[tokio::test]
async fn creators_returns_exactly_the_seeded_records() {
    let (app, storage) = app();
    let (status, body) = send(&app, Method::GET, "/api/creators", None).await;
    assert_eq!(status, StatusCode::OK);

    let creators: Vec<Creator> = serde_json::from_value(body).unwrap();
    assert_eq!(creators, storage.list_creators().await.unwrap());
    assert_eq!(creators.len(), 6);
}

#[tokio::test]
async fn creators_can_be_filtered() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/api/creators?category=beauty", None).await;
    assert_eq!(status, StatusCode::OK);
    let creators = body.as_array().unwrap();
    assert_eq!(creators.len(), 1);
    assert_eq!(creators[0]["name"], json!("Sofia Marquez"));

    let (_, body) = send(&app, Method::GET, "/api/creators?platform=youtube", None).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["platforms"].as_array().unwrap().contains(&json!("YouTube"))));
}

#[tokio::test]
async fn campaigns_are_listed() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/api/campaigns", None).await;
    assert_eq!(status, StatusCode::OK);

    let campaigns = body.as_array().unwrap();
    assert_eq!(campaigns.len(), 3);
    assert_eq!(campaigns[0]["brandName"], json!("Lumen Skincare"));
    assert_eq!(campaigns[0]["budget"].as_f64(), Some(45000.0));
    assert_eq!(campaigns[0]["metrics"]["reach"], json!("3.1M"));
}

#[tokio::test]
async fn valid_inquiry_is_created_and_stored() {
    let (app, storage) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/inquiries",
        Some(json!({
            "name": "Maya Chen",
            "email": "Maya@GlowCo.com",
            "company": "GlowCo",
            "userType": "brand",
            "message": "Looking for beauty creators for a Q3 launch."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], json!("maya@glowco.com"));
    assert_eq!(body["userType"], json!("brand"));

    let stored = storage.list_inquiries().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id.to_string(), body["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::GET, "/api/admin/inquiries", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_inquiry_lists_every_bad_field() {
    let (app, storage) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/inquiries",
        Some(json!({ "name": "Maya", "email": "nope", "userType": "agency" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));

    let fields = field_names(&body);
    assert_eq!(fields, vec!["email", "userType", "message"]);
    assert!(storage.list_inquiries().await.unwrap().is_empty());
}

#[tokio::test]
async fn waitlist_signup_is_created() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/waitlist",
        Some(creator_signup("lena@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], json!("lena@example.com"));
    assert_eq!(body["instagramHandle"], json!("lena.makes"));
    assert_eq!(body["platforms"], json!(["instagram"]));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn waitlist_duplicate_email_returns_409() {
    let (app, storage) = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/waitlist",
        Some(creator_signup("lena@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/waitlist",
        Some(creator_signup("  LENA@example.com ")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], json!("CONFLICT"));
    assert_eq!(storage.list_waitlist().await.unwrap().len(), 1);
}

#[tokio::test]
async fn waitlist_missing_field_returns_400_listing_it() {
    let (app, _) = app();
    let mut signup = creator_signup("unused@example.com");
    signup.as_object_mut().unwrap().remove("email");

    let (status, body) = send(&app, Method::POST, "/api/waitlist", Some(signup)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_names(&body), vec!["email"]);
}

#[tokio::test]
async fn waitlist_selected_platform_needs_its_fields() {
    let (app, _) = app();
    let mut signup = creator_signup("lena@example.com");
    signup["platforms"] = json!(["instagram", "youtube"]);

    let (status, body) = send(&app, Method::POST, "/api/waitlist", Some(signup)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_names(&body),
        vec!["youtubeHandle", "youtubeFollowers"]
    );
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let (app, _) = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/waitlist")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn form_progress_tracks_steps() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/waitlist/progress",
        Some(json!({ "name": "Lena", "email": "lena@example.com", "interest": "creator" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentStep"], json!("details"));
    assert_eq!(body["completedSteps"], json!(1));
    assert_eq!(body["totalSteps"], json!(3));
    assert_eq!(body["percent"], json!(33));
    assert_eq!(body["errors"][0]["field"], json!("platforms"));

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/waitlist/progress",
        Some(creator_signup("lena@example.com")),
    )
    .await;
    assert_eq!(body["currentStep"], Value::Null);
    assert_eq!(body["percent"], json!(100));
}

#[tokio::test]
async fn admin_waitlist_and_summary() {
    let (app, _) = app();
    send(&app, Method::POST, "/api/waitlist", Some(creator_signup("a@example.com"))).await;
    send(
        &app,
        Method::POST,
        "/api/waitlist",
        Some(json!({
            "name": "Omar",
            "email": "omar@glowco.com",
            "interest": "brand",
            "company": "GlowCo",
            "budget": "5k-10k"
        })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/admin/waitlist", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["email"], json!("omar@glowco.com"));

    let (status, body) = send(&app, Method::GET, "/api/admin/waitlist/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "total": 2, "brands": 1, "creators": 1, "unspecified": 0 })
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let (app, _) = app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}
