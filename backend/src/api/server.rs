use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{auth, listings};
use crate::auth::session::AuthContext;
use crate::catalog::Catalog;
use crate::config::MarketplaceConfig;
use crate::db::repo::SqliteSessionStore;
use crate::db::seed;
use crate::error::Result;

pub struct AppState {
    pub catalog: Catalog,
    pub auth: AuthContext,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/listings", get(listings::browse))
        .route("/api/featured", get(listings::featured))
        .route("/api/categories", get(listings::categories))
        .route("/api/locations", get(listings::locations))
        .route("/api/services", get(listings::services))
        .route("/api/services/{id}", get(listings::service_detail))
        .route("/api/products", get(listings::products))
        .route("/api/products/{id}", get(listings::product_detail))
        .route("/api/vehicles", get(listings::vehicles))
        .route("/api/vehicles/{id}", get(listings::vehicle_detail))
        .route("/api/users/{id}", get(listings::user_profile))
        .route("/api/profile", get(listings::my_profile))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

pub async fn start_server(config: MarketplaceConfig) -> Result<()> {
    let store = SqliteSessionStore::connect(&config.storage.database_url).await?;
    let auth = AuthContext::load(Arc::new(store), seed::users(), &config).await?;

    let state = Arc::new(AppState {
        catalog: Catalog::seeded(),
        auth,
    });

    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    info!(addr = %config.server.bind_addr, "server running");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repo::MemorySessionStore;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let auth = AuthContext::new(
            Arc::new(MemorySessionStore::new()),
            seed::users(),
            "currentUser",
            Duration::ZERO,
        );
        router(Arc::new(AppState {
            catalog: Catalog::seeded(),
            auth,
        }))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_browse_all_kinds() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/listings?location=Chicago,%20IL")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["services"][0]["id"], "4");
        assert_eq!(body["products"][0]["id"], "2");
        assert_eq!(body["vehicles"], json!([]));
    }

    #[tokio::test]
    async fn test_browse_home_page_link() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/listings?q=tesla&category=programming")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["services"], json!([]));
        // Category never filters vehicles; make and model are searched
        assert_eq!(body["vehicles"][0]["make"], "Tesla");
    }

    #[tokio::test]
    async fn test_browse_one_kind_with_query() {
        let app = app();
        let (status, body) = send(
            &app,
            get_request("/api/services?categories=programming,video&min_price=61&sort=price_desc"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["6", "1"]);
    }

    #[tokio::test]
    async fn test_browse_unknown_category() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/products?categories=gardening")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown category 'gardening'");
    }

    #[tokio::test]
    async fn test_detail_with_owner() {
        let app = app();

        let (status, body) = send(&app, get_request("/api/products/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["listing"]["condition"], "good");
        assert_eq!(body["owner"]["name"], "Marcus Johnson");

        let (_, body) = send(&app, get_request("/api/vehicles/2")).await;
        assert_eq!(body["listing"]["type"], "bike");
        assert_eq!(body["owner"]["email"], "jessica@example.com");

        let (status, _) = send(&app, get_request("/api/vehicles/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_user_profile() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/users/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["skills"][0], "React");
        assert_eq!(body["listings"]["services"].as_array().unwrap().len(), 2);
        assert_eq!(body["listings"]["vehicles"][0]["id"], "1");

        let (status, _) = send(&app, get_request("/api/users/404")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_registered_user_has_no_public_profile() {
        let app = app();
        let (_, body) = send(
            &app,
            post_json(
                "/api/auth/register",
                json!({ "name": "Sam", "email": "sam@example.com" }),
            ),
        )
        .await;
        let id = body["user"]["id"].as_str().unwrap().to_string();

        let (status, _) = send(&app, get_request(&format!("/api/users/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Their own profile still works and lists nothing
        let (status, body) = send(&app, get_request("/api/profile")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "Sam");
        assert_eq!(body["listings"]["services"], json!([]));
    }

    #[tokio::test]
    async fn test_lookup_endpoints() {
        let app = app();

        let (_, body) = send(&app, get_request("/api/locations")).await;
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[4], "Seattle, WA");

        let (_, body) = send(&app, get_request("/api/categories")).await;
        assert_eq!(body[0], json!({ "id": "programming", "label": "Programming & Development" }));
        assert_eq!(body.as_array().unwrap().len(), 24);

        let (_, body) = send(&app, get_request("/api/featured")).await;
        assert_eq!(body["services"].as_array().unwrap().len(), 4);
        assert_eq!(body["services"][0]["id"], "1");
        assert_eq!(body["vehicles"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_session_flow() {
        let app = app();

        let (_, body) = send(&app, get_request("/api/auth/session")).await;
        assert_eq!(body["state"], "anonymous");

        let (status, _) = send(&app, get_request("/api/profile")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            post_json("/api/auth/login", json!({ "email": "nobody@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);

        let (status, body) = send(
            &app,
            post_json(
                "/api/auth/login",
                json!({ "email": "alex@example.com", "password": "pw" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["id"], "1");

        let (_, body) = send(&app, get_request("/api/auth/session")).await;
        assert_eq!(body["state"], "authenticated");
        assert_eq!(body["user"]["email"], "alex@example.com");

        let (_, body) = send(&app, get_request("/api/profile")).await;
        assert_eq!(body["listings"]["services"].as_array().unwrap().len(), 2);

        let (status, _) = send(&app, post_json("/api/auth/logout", json!({}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, get_request("/api/auth/session")).await;
        assert_eq!(body["state"], "anonymous");
    }

    #[tokio::test]
    async fn test_register() {
        let app = app();

        let (status, body) = send(
            &app,
            post_json(
                "/api/auth/register",
                json!({ "name": "Sam", "email": "sam@example.com", "password": "pw" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["isVerified"], false);

        let (status, body) = send(
            &app,
            post_json(
                "/api/auth/register",
                json!({ "name": "Alex again", "email": "alex@example.com" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["user"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back() {
        let app = app();
        let (status, body) = send(&app, get_request("/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not found");
    }
}
