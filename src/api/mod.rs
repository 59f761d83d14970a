//! HTTP API layer: route handlers, DTOs, extractors and router composition.
//!
//! Submissions accept form or JSON bodies; every response is JSON. The
//! OpenAPI document is served at `/api-docs/openapi.json`, and with the
//! `swagger-ui` feature a browsable UI is mounted at `/swagger-ui`.

pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorKind, ErrorResponse};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "booking-directory",
        description = "Venue, artist and show booking directory"
    ),
    paths(
        handlers::system::landing_handler,
        handlers::system::health_handler,
        handlers::venue::list_venues,
        handlers::venue::search_venues,
        handlers::venue::show_venue,
        handlers::venue::create_venue_form,
        handlers::venue::create_venue,
        handlers::venue::edit_venue_form,
        handlers::venue::edit_venue,
        handlers::venue::delete_venue,
        handlers::artist::list_artists,
        handlers::artist::search_artists,
        handlers::artist::show_artist,
        handlers::artist::create_artist_form,
        handlers::artist::create_artist,
        handlers::artist::edit_artist_form,
        handlers::artist::edit_artist,
        handlers::artist::delete_artist,
        handlers::show::list_shows,
        handlers::show::create_show_form,
        handlers::show::create_show,
    ),
    components(schemas(ErrorResponse, ErrorBody, ErrorKind)),
    tags(
        (name = "Venues", description = "Places that host shows"),
        (name = "Artists", description = "Performers booked at venues"),
        (name = "Shows", description = "Bookings of an artist at a venue"),
        (name = "System", description = "Landing document and health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete router with every endpoint and the 404 fallback.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());
    with_api_docs(router).fallback(handlers::system::fallback_handler)
}

#[cfg(feature = "swagger-ui")]
fn with_api_docs(router: Router<AppState>) -> Router<AppState> {
    router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()),
    )
}

#[cfg(not(feature = "swagger-ui"))]
fn with_api_docs(router: Router<AppState>) -> Router<AppState> {
    router.route(
        OPENAPI_PATH,
        axum::routing::get(|| async { axum::Json(ApiDoc::openapi()) }),
    )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::FixedClock;
    use crate::persistence::Database;

    const FORM: &str = "application/x-www-form-urlencoded";

    fn noon() -> NaiveDateTime {
        let Some(at) = NaiveDate::from_ymd_opt(2035, 4, 1).and_then(|d| d.and_hms_opt(12, 0, 0))
        else {
            panic!("valid date");
        };
        at
    }

    async fn app() -> Router {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        build_router().with_state(AppState::new(db, Arc::new(FixedClock(noon()))))
    }

    fn get(uri: &str) -> Request<Body> {
        let Ok(req) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request for {uri}");
        };
        req
    }

    fn delete(uri: &str) -> Request<Body> {
        let Ok(req) = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
        else {
            panic!("request for {uri}");
        };
        req
    }

    fn post(uri: &str, content_type: &str, body: &str) -> Request<Body> {
        let Ok(req) = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
        else {
            panic!("request for {uri}");
        };
        req
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let Ok(resp) = app.clone().oneshot(req).await else {
            panic!("router failed");
        };
        let status = resp.status();
        let Ok(bytes) = axum::body::to_bytes(resp.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        if bytes.is_empty() {
            return (status, Value::Null);
        }
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("body is not JSON: {bytes:?}");
        };
        (status, json)
    }

    async fn create_hop(app: &Router) -> i64 {
        let (status, body) = send(
            app,
            post(
                "/venues/create",
                FORM,
                "name=The+Musical+Hop&city=San+Francisco&state=CA\
                 &genres=Jazz%2C+Reggae%2C+Swing&seeking_talent=Yes\
                 &seeking_description=Looking+for+a+local+artist",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let Some(id) = body["id"].as_i64() else {
            panic!("notification without id: {body}");
        };
        id
    }

    async fn create_petals(app: &Router) -> i64 {
        let (status, body) = send(
            app,
            post(
                "/artists/create",
                FORM,
                "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let Some(id) = body["id"].as_i64() else {
            panic!("notification without id: {body}");
        };
        id
    }

    #[tokio::test]
    async fn landing_lists_navigation() {
        let app = app().await;
        let (status, body) = send(&app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "booking-directory");
        assert!(body["links"].as_array().is_some_and(|l| !l.is_empty()));
    }

    #[tokio::test]
    async fn created_venue_has_a_profile() {
        let app = app().await;
        let id = create_hop(&app).await;

        let (status, body) = send(&app, get(&format!("/venues/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "The Musical Hop");
        assert_eq!(body["genres"], serde_json::json!(["Jazz", "Reggae", "Swing"]));
        assert_eq!(body["seeking_talent"], true);
        assert_eq!(body["past_shows_count"], 0);
        assert_eq!(body["upcoming_shows_count"], 0);
    }

    #[tokio::test]
    async fn lowercase_yes_does_not_set_seeking() {
        let app = app().await;
        let (status, body) = send(
            &app,
            post(
                "/venues/create",
                FORM,
                "name=Hop&city=San+Francisco&state=CA&seeking_talent=yes",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, venue) = send(&app, get(&format!("/venues/{}", body["id"]))).await;
        assert_eq!(venue["seeking_talent"], false);
    }

    #[tokio::test]
    async fn json_submissions_accept_booleans() {
        let app = app().await;
        let (status, body) = send(
            &app,
            post(
                "/artists/create",
                "application/json",
                r#"{"name":"The Wild Sax Band","city":"San Francisco","state":"CA",
                    "genres":["Jazz","Classical"],"seeking_venue":true}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let (_, artist) = send(&app, get(&format!("/artists/{}", body["id"]))).await;
        assert_eq!(artist["seeking_venue"], true);
        assert_eq!(artist["genres"], serde_json::json!(["Jazz", "Classical"]));
    }

    #[tokio::test]
    async fn directory_groups_by_area() {
        let app = app().await;
        for body in [
            "name=Mohawk&city=Austin&state=TX",
            "name=The+Musical+Hop&city=San+Francisco&state=CA",
            "name=Stubbs&city=Austin&state=TX",
        ] {
            let (status, _) = send(&app, post("/venues/create", FORM, body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (status, body) = send(&app, get("/venues")).await;
        assert_eq!(status, StatusCode::OK);
        let Some(areas) = body.as_array() else {
            panic!("directory is not a list: {body}");
        };
        assert_eq!(areas.len(), 2);
        let austin: Vec<&Value> = areas.iter().filter(|a| a["city"] == "Austin").collect();
        let [austin] = austin.as_slice() else {
            panic!("expected one Austin area");
        };
        assert_eq!(austin["venues"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let app = app().await;
        create_hop(&app).await;
        let (status, body) = send(&app, post("/venues/search", FORM, "search_term=hop")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["name"], "The Musical Hop");

        let (_, body) = send(&app, post("/artists/search", FORM, "")).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn booking_a_show_updates_both_profiles() {
        let app = app().await;
        let venue_id = create_hop(&app).await;
        let artist_id = create_petals(&app).await;

        let form = format!(
            "venue_id={venue_id}&artist_id={artist_id}&start_time=2035-05-21+21%3A30%3A00"
        );
        let (status, body) = send(&app, post("/shows/create", FORM, &form)).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        let (_, venue) = send(&app, get(&format!("/venues/{venue_id}"))).await;
        assert_eq!(venue["upcoming_shows_count"], 1);
        assert_eq!(venue["upcoming_shows"][0]["artist_name"], "Guns N Petals");
        assert_eq!(
            venue["upcoming_shows"][0]["start_time"],
            "2035-05-21T21:30:00"
        );

        let (_, artist) = send(&app, get(&format!("/artists/{artist_id}"))).await;
        assert_eq!(artist["upcoming_shows"][0]["venue_name"], "The Musical Hop");

        let (_, shows) = send(&app, get("/shows")).await;
        assert_eq!(shows.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn show_with_missing_venue_is_rejected() {
        let app = app().await;
        let artist_id = create_petals(&app).await;
        let form = format!("venue_id=77&artist_id={artist_id}&start_time=2035-05-21+21%3A30");
        let (status, body) = send(&app, post("/shows/create", FORM, &form)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["kind"], "referential_integrity");

        let (_, shows) = send(&app, get("/shows")).await;
        assert_eq!(shows, serde_json::json!([]));
    }

    #[tokio::test]
    async fn missing_required_field_is_a_validation_failure() {
        let app = app().await;
        let (status, body) = send(&app, post("/venues/create", FORM, "name=Hop&state=CA")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["kind"], "validation_failure");

        let (status, _) = send(&app, get("/venues/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_ids_and_routes_are_404() {
        let app = app().await;
        let (status, body) = send(&app, get("/venues/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["kind"], "not_found");

        let (status, _) = send(&app, get("/artists/999/edit")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, get("/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 2002);
    }

    #[tokio::test]
    async fn venue_delete_is_idempotent() {
        let app = app().await;
        let id = create_hop(&app).await;
        let (status, _) = send(&app, delete(&format!("/venues/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, delete(&format!("/venues/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, get(&format!("/venues/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn artist_edit_round_trip() {
        let app = app().await;
        let id = create_petals(&app).await;

        let (status, form) = send(&app, get(&format!("/artists/{id}/edit"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(form["action"], format!("/artists/{id}/edit"));
        assert_eq!(form["values"]["city"], "San Francisco");

        let (status, _) = send(
            &app,
            post(
                &format!("/artists/{id}/edit"),
                FORM,
                "name=Guns+N+Petals&city=New+York&state=NY&seeking_venue=Yes\
                 &facebook_link=https%3A%2F%2Fwww.facebook.com%2FGunsNPetals",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, artist) = send(&app, get(&format!("/artists/{id}"))).await;
        assert_eq!(artist["state"], "NY");
        assert_eq!(artist["seeking_venue"], true);
    }

    #[tokio::test]
    async fn show_form_defaults_to_now() {
        let app = app().await;
        let (status, body) = send(&app, get("/shows/create")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["values"]["start_time"], "2035-04-01T12:00:00");
    }

    #[tokio::test]
    async fn health_and_openapi_are_served() {
        let app = app().await;
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "up");

        let (status, doc) = send(&app, get(OPENAPI_PATH)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/venues/{id}"].is_object());
    }
}
