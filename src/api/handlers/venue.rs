//! Venue handlers: directory, search, profile, form, create, edit, delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    AreaDto, Notification, SearchForm, SearchResponse, VenueDetailResponse, VenueForm,
    VenueFormDocument,
};
use crate::api::extract::{FormOrJson, IdPath};
use crate::app_state::AppState;
use crate::domain::{EntityKind, VenueDraft, VenueId};
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /venues` — All venues grouped by (city, state).
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
#[utoipa::path(
    get,
    path = "/venues",
    tag = "Venues",
    summary = "List venues by area",
    description = "Returns every venue grouped by (city, state), each with its number of upcoming shows.",
    responses(
        (status = 200, description = "Venue directory", body = Vec<AreaDto>),
    )
)]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let areas = state.venues.list_areas().await?;
    Ok(Json(
        areas.into_iter().map(AreaDto::from).collect::<Vec<_>>(),
    ))
}

/// `POST /venues/search` — Case-insensitive partial name search.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
#[utoipa::path(
    post,
    path = "/venues/search",
    tag = "Venues",
    summary = "Search venues by name",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching venues", body = SearchResponse),
    )
)]
pub async fn search_venues(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<SearchForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state.venues.search(&form.search_term).await?;
    Ok(Json(SearchResponse::new(form.search_term, results)))
}

/// `GET /venues/{id}` — Venue profile with past and upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Get venue profile",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Venue profile", body = VenueDetailResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn show_venue(
    State(state): State<AppState>,
    IdPath(id): IdPath<VenueId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state.venues.detail(id).await?;
    Ok(Json(VenueDetailResponse::from(detail)))
}

/// `GET /venues/create` — Blank venue form.
#[utoipa::path(
    get,
    path = "/venues/create",
    tag = "Venues",
    summary = "New venue form",
    responses(
        (status = 200, description = "Blank form", body = VenueFormDocument),
    )
)]
pub async fn create_venue_form() -> impl IntoResponse {
    Json(VenueFormDocument::blank())
}

/// `POST /venues/create` — List a new venue.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] for an invalid submission.
#[utoipa::path(
    post,
    path = "/venues/create",
    tag = "Venues",
    summary = "Create a venue",
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Venue listed", body = Notification),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
    )
)]
pub async fn create_venue(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<VenueForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state.venues.create(VenueDraft::from(form)).await?;
    let note = Notification::listed(EntityKind::Venue, &venue.details.name, venue.id.get());
    Ok((StatusCode::CREATED, Json(note)))
}

/// `GET /venues/{id}/edit` — Venue form prefilled with current values.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Edit venue form",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Prefilled form", body = VenueFormDocument),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn edit_venue_form(
    State(state): State<AppState>,
    IdPath(id): IdPath<VenueId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state.venues.get(id).await?;
    Ok(Json(VenueFormDocument::prefilled(venue)))
}

/// `POST /venues/{id}/edit` — Overwrite a venue's fields.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] for an unknown id or
/// [`DirectoryError::Validation`] for an invalid submission.
#[utoipa::path(
    post,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Update a venue",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Venue updated", body = Notification),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn edit_venue(
    State(state): State<AppState>,
    IdPath(id): IdPath<VenueId>,
    FormOrJson(form): FormOrJson<VenueForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let venue = state.venues.update(id, VenueDraft::from(form)).await?;
    Ok(Json(Notification::updated(
        EntityKind::Venue,
        &venue.details.name,
        venue.id.get(),
    )))
}

/// `DELETE /venues/{id}` — Remove a venue and its shows.
///
/// Unknown ids succeed as well.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
#[utoipa::path(
    delete,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Delete a venue",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 204, description = "Venue deleted (or already absent)"),
    )
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    IdPath(id): IdPath<VenueId>,
) -> Result<impl IntoResponse, DirectoryError> {
    state.venues.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Venue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}
