//! Show handlers: index, booking form, booking.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{Notification, ShowDto, ShowForm, ShowFormDocument};
use crate::api::extract::FormOrJson;
use crate::app_state::AppState;
use crate::domain::{EntityKind, NewShow};
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /shows` — Every show, ordered by start time.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
#[utoipa::path(
    get,
    path = "/shows",
    tag = "Shows",
    summary = "List shows",
    description = "Returns every show joined with its venue name and artist name and image.",
    responses(
        (status = 200, description = "Show index", body = Vec<ShowDto>),
    )
)]
pub async fn list_shows(State(state): State<AppState>) -> Result<impl IntoResponse, DirectoryError> {
    let shows = state.shows.list().await?;
    Ok(Json(shows.into_iter().map(ShowDto::from).collect::<Vec<_>>()))
}

/// `GET /shows/create` — Booking form with the start time set to now.
#[utoipa::path(
    get,
    path = "/shows/create",
    tag = "Shows",
    summary = "New show form",
    responses(
        (status = 200, description = "Blank form", body = ShowFormDocument),
    )
)]
pub async fn create_show_form(State(state): State<AppState>) -> impl IntoResponse {
    Json(ShowFormDocument::starting_at(state.shows.now()))
}

/// `POST /shows/create` — Book an artist at a venue.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] for a malformed submission and
/// [`DirectoryError::ReferentialIntegrity`] if the venue or artist does
/// not exist.
#[utoipa::path(
    post,
    path = "/shows/create",
    tag = "Shows",
    summary = "Create a show",
    request_body(content = ShowForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Show listed", body = Notification),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 422, description = "Unknown venue or artist", body = ErrorResponse),
    )
)]
pub async fn create_show(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<ShowForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let show = state.shows.create(NewShow::try_from(form)?).await?;
    let note = Notification::listed(EntityKind::Show, "", show.id.get());
    Ok((StatusCode::CREATED, Json(note)))
}

/// Show routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
