//! End-to-end tests for the HTTP API, driven in-process against a temporary catalog

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use freezer_door::api::{self, AppState};
use freezer_door::catalog::{CatalogStore, JsonCatalogSource, RECIPES_FILE, SPIRITS_FILE};

const RECIPES: &str = r#"{
    "martini": {
        "name": "Martini",
        "garnish": "Olive or lemon twist",
        "presets": { "normal": { "name": "Normal", "abv": 24 } },
        "variations": {
            "classic": { "name": "Classic (4:1)", "ingredients": { "gin": 2.4, "vermouth_dry": 0.6 } }
        }
    }
}"#;

const SPIRITS: &str = r#"{
    "gin": [ { "brand": "Tanqueray", "abv": 47.3 }, { "brand": "Beefeater", "abv": 44.0 } ],
    "vermouth_dry": [ { "brand": "Dolin Dry", "abv": 17.5 } ]
}"#;

struct TestApp {
    dir: TempDir,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        Self::with_static_dir(None)
    }

    fn with_static_dir(static_dir: Option<&Path>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(RECIPES_FILE), RECIPES).unwrap();
        fs::write(dir.path().join(SPIRITS_FILE), SPIRITS).unwrap();

        let catalog = CatalogStore::open(JsonCatalogSource::new(dir.path())).unwrap();
        let router = api::router(AppState::new(catalog), static_dir);
        Self { dir, router }
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

fn martini_request() -> Value {
    json!({
        "cocktail": "martini",
        "variation": "classic",
        "spirits": { "gin": "Tanqueray", "vermouth_dry": "Dolin Dry" },
        "target_volume_ml": 750,
        "target_abv": 24
    })
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let app = TestApp::new();
    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "The Freezer Door API");
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.contains(&json!("POST /api/calculate")));
}

#[tokio::test]
async fn test_list_and_get_cocktails() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/cocktails").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "martini");
    assert_eq!(body[0]["serving_size_ml"], 90.0);
    assert_eq!(body[0]["variations"][0]["id"], "classic");

    let (status, body) = app.get("/api/cocktails/martini").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["variations"]["classic"]["ingredients"],
        json!(["gin", "vermouth_dry"])
    );
}

#[tokio::test]
async fn test_unknown_cocktail_is_404() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/cocktails/daiquiri").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Cocktail not found" }));
}

#[tokio::test]
async fn test_spirits() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/spirits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gin"][0]["brand"], "Tanqueray");

    let (status, body) = app.get("/api/spirits/vermouth_dry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "brand": "Dolin Dry", "abv": 17.5 }]));

    let (status, body) = app.get("/api/spirits/mezcal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");
}

#[tokio::test]
async fn test_presets() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/presets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weak"]["abv"], 22.0);
    assert_eq!(body["normal"]["abv"], 24.0);
    assert_eq!(body["strong"]["abv"], 26.0);
}

#[tokio::test]
async fn test_calculate_martini() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/calculate", martini_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["initial_abv"], 41.3);
    assert_eq!(body["final_abv"], 24.0);
    assert_eq!(body["total_volume_ml"], 750.0);
    assert_eq!(body["ingredients"]["gin"], 348.3);
    assert_eq!(body["ingredients"]["vermouth_dry"], 87.1);
    assert_eq!(body["water_ml"], 314.6);

    assert_eq!(body["ingredients_oz"]["gin"], 11.78);
    assert_eq!(body["water_oz"], 10.64);
    assert_eq!(body["total_volume_oz"], 25.36);

    assert_eq!(body["cocktail_name"], "Martini");
    assert_eq!(body["variation_name"], "Classic (4:1)");
    assert_eq!(body["garnish"], "Olive or lemon twist");
    assert_eq!(body["spirit_brands"]["gin"], "Tanqueray");
    assert!(body["simplified"]["water"]["ml"]["display"].is_string());
}

#[tokio::test]
async fn test_calculate_unknown_brand_falls_back() {
    let app = TestApp::new();
    let mut request = martini_request();
    request["spirits"]["gin"] = json!("Bathtub Special");

    let (status, body) = app.post("/api/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["initial_abv"], 41.3);
    // Echoed as sent, not as resolved
    assert_eq!(body["spirit_brands"]["gin"], "Bathtub Special");
}

#[tokio::test]
async fn test_calculate_target_above_initial_adds_no_water() {
    let app = TestApp::new();
    let mut request = martini_request();
    request["target_abv"] = json!(50);

    let (status, body) = app.post("/api/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["water_ml"], 0.0);
    assert_eq!(body["final_abv"], body["initial_abv"]);
}

#[tokio::test]
async fn test_calculate_missing_field_is_400() {
    let app = TestApp::new();
    let mut request = martini_request();
    request.as_object_mut().unwrap().remove("target_abv");

    let (status, body) = app.post("/api/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required field: target_abv" }));
}

#[tokio::test]
async fn test_calculate_unknown_variation_is_404() {
    let app = TestApp::new();
    let mut request = martini_request();
    request["variation"] = json!("reverse");

    let (status, body) = app.post("/api/calculate", request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Variation not found");
}

#[tokio::test]
async fn test_calculate_malformed_body() {
    let app = TestApp::new();
    let request = Request::builder()
        .method("POST")
        .uri("/api/calculate")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert!(status.is_client_error());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_dilute() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/dilute",
            json!({ "spirit_volume_ml": 750, "initial_abv": 40, "target_abv": 20 }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["water_ml"], 750.0);
    assert_eq!(body["final_volume_ml"], 1500.0);
    assert_eq!(body["final_abv"], 20.0);

    let (status, body) = app
        .post("/api/dilute", json!({ "spirit_volume_ml": 750 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: initial_abv");
}

#[tokio::test]
async fn test_status() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cocktail_count"], 1);
    assert_eq!(body["spirit_category_count"], 2);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_reload_picks_up_new_catalog() {
    let app = TestApp::new();
    let updated = RECIPES.replacen(
        "\"martini\": {",
        r#""gimlet": { "name": "Gimlet", "variations": {} }, "martini": {"#,
        1,
    );
    fs::write(app.dir.path().join(RECIPES_FILE), updated).unwrap();

    let (status, body) = app.post("/api/reload", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cocktails"], 2);

    let (_, body) = app.get("/api/cocktails/gimlet").await;
    assert_eq!(body["name"], "Gimlet");
}

#[tokio::test]
async fn test_failed_reload_keeps_catalog() {
    let app = TestApp::new();
    fs::write(app.dir.path().join(RECIPES_FILE), "{ broken").unwrap();

    let (status, body) = app.post("/api/reload", json!({})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains(RECIPES_FILE));

    let (status, _) = app.get("/api/cocktails/martini").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_static_fallback() {
    let assets = tempfile::tempdir().unwrap();
    fs::write(assets.path().join("app.js"), "console.log('freezer door');").unwrap();
    let app = TestApp::with_static_dir(Some(assets.path()));

    let request = Request::builder().uri("/app.js").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = app.get("/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
