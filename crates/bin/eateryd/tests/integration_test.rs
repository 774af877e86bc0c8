//! End-to-end smoke tests for the full eateryd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::io::Cursor;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use eatery_adapter_http_axum::router::{self, RouterConfig};
use eatery_adapter_http_axum::state::AppState;
use eatery_adapter_http_axum::uploads::UploadStore;
use eatery_adapter_storage_sqlite_sqlx::{
    Config, SqliteContactRepository, SqliteMenuItemRepository, SqliteReservationRepository,
    SqliteReviewRepository,
};
use eatery_app::services::contact_service::ContactService;
use eatery_app::services::menu_service::MenuService;
use eatery_app::services::reservation_service::ReservationService;
use eatery_app::services::review_service::ReviewService;
use http_body_util::BodyExt;
use image::ImageFormat;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "eatery-test-boundary";

/// A fully-wired router plus the scratch public directory it serves.
struct TestApp {
    router: axum::Router,
    public_dir: TempDir,
}

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> TestApp {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();
    let public_dir = tempfile::tempdir().expect("scratch public dir should be created");

    let state = AppState::new(
        MenuService::new(SqliteMenuItemRepository::new(pool.clone())),
        ReservationService::new(SqliteReservationRepository::new(pool.clone())),
        ContactService::new(SqliteContactRepository::new(pool.clone())),
        ReviewService::new(SqliteReviewRepository::new(pool)),
        UploadStore::new(public_dir.path()),
    );
    let config = RouterConfig {
        allowed_origins: vec!["http://localhost:5173".to_string()],
    };

    TestApp {
        router: router::build(state, &config),
        public_dir,
    }
}

impl TestApp {
    fn uploaded_files(&self) -> usize {
        std::fs::read_dir(self.public_dir.path().join("uploads")).map_or(0, Iterator::count)
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn send_json(&self, method: &str, uri: &str, body: &Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send_multipart(&self, uri: &str, body: Vec<u8>) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }
}

async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    resp.into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_text(resp: Response<Body>) -> String {
    String::from_utf8(body_bytes(resp).await).unwrap()
}

async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_str(&body_text(resp).await).unwrap()
}

fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

/// Encode text fields and one optional file part as `multipart/form-data`.
fn multipart(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Encode a small picture in `format`.
fn picture(format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::new_rgb8(4, 4)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = app.get("/health").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

// ---------------------------------------------------------------------------
// Menu API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_store_coerced_price_when_menu_item_created() {
    let app = app().await;

    let resp = app
        .send_json(
            "POST",
            "/api/menu",
            &json!({"name": "Pizza", "price": "12.5", "description": "cheese"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["message"], "Menu item created");
    let id = created["id"].as_str().unwrap().to_string();

    let items = body_json(app.get("/api/menu").await).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["name"], "Pizza");
    assert_eq!(items[0]["price"], 12.5);
    assert_eq!(items[0]["image"], "");
}

#[tokio::test]
async fn should_reject_non_numeric_price() {
    let app = app().await;

    let resp = app
        .send_json("POST", "/api/menu", &json!({"name": "Pizza", "price": "cheap"}))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());

    let items = body_json(app.get("/api/menu").await).await;
    assert!(items.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_image_when_menu_item_updated_without_one() {
    let app = app().await;

    let created = body_json(
        app.send_json(
            "POST",
            "/api/menu",
            &json!({"name": "Soup", "price": 6, "image": "/uploads/soup.png"}),
        )
        .await,
    )
    .await;
    let uri = format!("/api/menu/{}", created["id"].as_str().unwrap());

    let resp = app
        .send_json("PUT", &uri, &json!({"name": "Tomato soup", "price": 6.5}))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], "Menu item updated");

    let item = body_json(app.get(&uri).await).await;
    assert_eq!(item["name"], "Tomato soup");
    assert_eq!(item["image"], "/uploads/soup.png");
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_records() {
    let app = app().await;
    let id = uuid::Uuid::new_v4();

    for uri in [
        format!("/api/menu/{id}"),
        format!("/api/reservations/{id}"),
    ] {
        let resp = app
            .send(
                Request::builder()
                    .method("DELETE")
                    .uri(&uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(body_json(resp).await["message"].is_string());
    }
}

#[tokio::test]
async fn should_return_bad_request_for_malformed_id() {
    let app = app().await;

    let resp = app.get("/api/reservations/123").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .send(
            Request::builder()
                .method("DELETE")
                .uri("/api/menu/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reservations API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_preserve_created_at_when_reservation_updated() {
    let app = app().await;
    let booking = json!({
        "name": "Ann",
        "phone": "555-0100",
        "email": "ann@example.com",
        "date": "2024-06-01",
        "time": "19:30",
        "guests": "4"
    });

    let resp = app.send_json("POST", "/api/reservations", &booking).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let uri = format!(
        "/api/reservations/{}",
        body_json(resp).await["id"].as_str().unwrap()
    );
    let before = body_json(app.get(&uri).await).await;
    assert_eq!(before["guests"], 4);

    let mut changed = booking.clone();
    changed["guests"] = json!(6);
    let resp = app.send_json("PUT", &uri, &changed).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let after = body_json(app.get(&uri).await).await;
    assert_eq!(after["guests"], 6);
    assert_eq!(after["createdAt"], before["createdAt"]);
}

#[tokio::test]
async fn should_reject_reservation_without_guests() {
    let app = app().await;

    let resp = app
        .send_json(
            "POST",
            "/api/reservations",
            &json!({
                "name": "Ann", "phone": "1", "email": "a@b.c",
                "date": "2024-06-01", "time": "19:30", "guests": 0
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Contact and reviews API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_accept_contact_message_and_list_it_in_admin() {
    let app = app().await;

    let resp = app
        .send_json(
            "POST",
            "/api/contact",
            &json!({"name": "Ann Lee", "email": "ann@example.com", "message": "Do you cater?"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let page = body_text(app.get("/admin/contacts").await).await;
    assert!(page.contains("Ann Lee"));
    assert!(page.contains("Do you cater?"));
}

#[tokio::test]
async fn should_use_single_name_when_name_parts_are_blank() {
    let app = app().await;

    let resp = app
        .send_json(
            "POST",
            "/api/contact",
            &json!({
                "firstName": "",
                "lastName": "",
                "name": "Ann Lee",
                "email": "ann@example.com",
                "message": "Table for two?"
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["message"], "Message received");

    let page = body_text(app.get("/admin/contacts").await).await;
    assert!(page.contains("Ann Lee"));
}

#[tokio::test]
async fn should_publish_review_only_after_approval() {
    let app = app().await;

    let resp = app
        .send_json(
            "POST",
            "/api/reviews",
            &json!({"name": "Ann", "rating": "5", "message": "great"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await["id"].as_str().unwrap().to_string();

    let published = body_json(app.get("/api/reviews").await).await;
    assert!(published.as_array().unwrap().is_empty());

    let resp = app.get(&format!("/admin/reviews/publish/{id}")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/reviews");

    let published = body_json(app.get("/api/reviews").await).await;
    let published = published.as_array().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0]["id"], id.as_str());
    assert_eq!(published[0]["isPublished"], true);

    app.get(&format!("/admin/reviews/unpublish/{id}")).await;
    let published = body_json(app.get("/api/reviews").await).await;
    assert!(published.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_review_rating_out_of_range() {
    let app = app().await;

    let resp = app
        .send_json(
            "POST",
            "/api/reviews",
            &json!({"name": "Ann", "rating": 7, "message": "!"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Admin (SSR) pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_admin_pages() {
    let app = app().await;

    for (uri, heading) in [
        ("/admin", "Dashboard"),
        ("/admin/menu", "Menu"),
        ("/admin/menu/add", "Add menu item"),
        ("/admin/reservation", "Reservations"),
        ("/admin/reservation/add", "Add reservation"),
        ("/admin/contacts", "Contact messages"),
        ("/admin/reviews", "Reviews"),
    ] {
        let resp = app.get(uri).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert!(body_text(resp).await.contains(heading), "{uri}");
    }
}

#[tokio::test]
async fn should_store_upload_when_menu_item_added_from_admin() {
    let app = app().await;
    let png = picture(ImageFormat::Png);

    let body = multipart(
        &[
            ("name", "Pizza"),
            ("category", "Mains"),
            ("price", "12.5"),
            ("description", "cheese"),
        ],
        Some(("image", "pizza.PNG", &png[..])),
    );
    let resp = app.send_multipart("/admin/menu/add", body).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/menu");

    let items = body_json(app.get("/api/menu").await).await;
    let image = items[0]["image"].as_str().unwrap().to_string();
    assert!(image.starts_with("/uploads/"));
    assert!(image.ends_with(".png"));
    assert_eq!(items[0]["category"], "Mains");

    let resp = app.get(&image).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, png);
}

#[tokio::test]
async fn should_reject_upload_that_is_not_a_picture() {
    let app = app().await;
    let script = &b"<script>alert(document.cookie)</script>"[..];

    for file_name in ["evil.html", "evil.png"] {
        let body = multipart(
            &[("name", "Pizza"), ("price", "12")],
            Some(("image", file_name, script)),
        );
        let resp = app.send_multipart("/admin/menu/add", body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{file_name}");
        assert!(body_text(resp).await.contains("Error 400"), "{file_name}");
    }

    assert_eq!(app.uploaded_files(), 0);
    let items = body_json(app.get("/api/menu").await).await;
    assert!(items.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_remove_old_picture_when_admin_edit_replaces_it() {
    let app = app().await;

    let body = multipart(
        &[("name", "Pizza"), ("price", "12")],
        Some(("image", "pizza.png", &picture(ImageFormat::Png)[..])),
    );
    app.send_multipart("/admin/menu/add", body).await;
    let items = body_json(app.get("/api/menu").await).await;
    let id = items[0]["id"].as_str().unwrap().to_string();
    let old_image = items[0]["image"].as_str().unwrap().to_string();

    let body = multipart(
        &[("name", "Pizza"), ("price", "12")],
        Some(("newImage", "pizza.jpg", &picture(ImageFormat::Jpeg)[..])),
    );
    let resp = app
        .send_multipart(&format!("/admin/menu/edit/{id}"), body)
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let item = body_json(app.get(&format!("/api/menu/{id}")).await).await;
    let new_image = item["image"].as_str().unwrap();
    assert_ne!(new_image, old_image);
    assert!(new_image.ends_with(".jpg"));
    assert_eq!(app.uploaded_files(), 1);
    assert_eq!(app.get(&old_image).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get(new_image).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_remove_picture_when_menu_item_deleted() {
    let app = app().await;

    let body = multipart(
        &[("name", "Pizza"), ("price", "12")],
        Some(("image", "pizza.png", &picture(ImageFormat::Png)[..])),
    );
    app.send_multipart("/admin/menu/add", body).await;
    let items = body_json(app.get("/api/menu").await).await;
    let id = items[0]["id"].as_str().unwrap();
    assert_eq!(app.uploaded_files(), 1);

    let resp = app.get(&format!("/admin/menu/delete/{id}")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.uploaded_files(), 0);
}

#[tokio::test]
async fn should_keep_image_when_admin_edit_has_empty_file() {
    let app = app().await;

    let body = multipart(
        &[("name", "Pizza"), ("price", "12")],
        Some(("image", "pizza.jpg", &picture(ImageFormat::Jpeg)[..])),
    );
    app.send_multipart("/admin/menu/add", body).await;
    let items = body_json(app.get("/api/menu").await).await;
    let id = items[0]["id"].as_str().unwrap().to_string();
    let image = items[0]["image"].clone();

    let body = multipart(
        &[("name", "Calzone"), ("price", "13"), ("description", "")],
        Some(("newImage", "", &b""[..])),
    );
    let resp = app
        .send_multipart(&format!("/admin/menu/edit/{id}"), body)
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let item = body_json(app.get(&format!("/api/menu/{id}")).await).await;
    assert_eq!(item["name"], "Calzone");
    assert_eq!(item["image"], image);
    assert_eq!(app.uploaded_files(), 1);
}

#[tokio::test]
async fn should_not_write_upload_when_admin_form_is_invalid() {
    let app = app().await;

    let body = multipart(
        &[("name", "Pizza"), ("price", "-3")],
        Some(("image", "pizza.jpg", &picture(ImageFormat::Jpeg)[..])),
    );
    let resp = app.send_multipart("/admin/menu/add", body).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Error 400"));
    assert_eq!(app.uploaded_files(), 0);
}

#[tokio::test]
async fn should_add_and_edit_reservation_from_admin() {
    let app = app().await;

    let resp = app
        .send_form(
            "/admin/reservation/add",
            "name=Bob&phone=555&email=bob%40example.com&date=2024-07-01&time=20%3A00&guests=2&message=window",
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/reservation");

    let list = body_json(app.get("/api/reservations").await).await;
    let id = list[0]["id"].as_str().unwrap().to_string();
    assert_eq!(list[0]["message"], "window");

    let resp = app
        .send_form(
            &format!("/admin/reservation/edit/{id}"),
            "name=Bob&phone=555&email=bob%40example.com&date=2024-07-02&time=20%3A00&guests=3&message=",
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let updated = body_json(app.get(&format!("/api/reservations/{id}")).await).await;
    assert_eq!(updated["date"], "2024-07-02");
    assert_eq!(updated["guests"], 3);
    assert_eq!(updated["createdAt"], list[0]["createdAt"]);

    let page = body_text(app.get("/admin/reservation").await).await;
    assert!(page.contains("Bob"));
}

#[tokio::test]
async fn should_redirect_after_admin_delete() {
    let app = app().await;

    let created = body_json(
        app.send_json("POST", "/api/menu", &json!({"name": "Tea", "price": 2}))
            .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let resp = app.get(&format!("/admin/menu/delete/{id}")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/menu");

    let items = body_json(app.get("/api/menu").await).await;
    assert!(items.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_render_not_found_page_for_missing_admin_record() {
    let app = app().await;

    let resp = app
        .get(&format!("/admin/contacts/delete/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Error 404"));

    let resp = app.get("/admin/reservation/edit/not-an-id").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
