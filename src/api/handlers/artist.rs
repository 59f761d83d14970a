//! Artist handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    ArtistDetailResponse, ArtistForm, ArtistFormDocument, ArtistSummaryDto, Notification,
    SearchForm, SearchResponse,
};
use crate::api::extract::{FormOrJson, IdPath};
use crate::app_state::AppState;
use crate::domain::{ArtistDraft, ArtistId, EntityKind};
use crate::error::{DirectoryError, ErrorResponse};

/// `GET /artists` — Every artist's id and name.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
#[utoipa::path(
    get,
    path = "/artists",
    tag = "Artists",
    summary = "List artists",
    description = "Returns every artist ordered by id, unpaginated.",
    responses(
        (status = 200, description = "Artist index", body = Vec<ArtistSummaryDto>),
    )
)]
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artists = state.artists.list().await?;
    Ok(Json(
        artists
            .into_iter()
            .map(ArtistSummaryDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// `POST /artists/search` — Case-insensitive partial name search.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
#[utoipa::path(
    post,
    path = "/artists/search",
    tag = "Artists",
    summary = "Search artists by name",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching artists", body = SearchResponse),
    )
)]
pub async fn search_artists(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<SearchForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state.artists.search(&form.search_term).await?;
    Ok(Json(SearchResponse::new(form.search_term, results)))
}

/// `GET /artists/{id}` — Artist profile with past and upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/artists/{id}",
    tag = "Artists",
    summary = "Get artist profile",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 200, description = "Artist profile", body = ArtistDetailResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn show_artist(
    State(state): State<AppState>,
    IdPath(id): IdPath<ArtistId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let detail = state.artists.detail(id).await?;
    Ok(Json(ArtistDetailResponse::from(detail)))
}

/// `GET /artists/create` — Blank artist form.
#[utoipa::path(
    get,
    path = "/artists/create",
    tag = "Artists",
    summary = "New artist form",
    responses(
        (status = 200, description = "Blank form", body = ArtistFormDocument),
    )
)]
pub async fn create_artist_form() -> impl IntoResponse {
    Json(ArtistFormDocument::blank())
}

/// `POST /artists/create` — List a new artist.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] for an invalid submission.
#[utoipa::path(
    post,
    path = "/artists/create",
    tag = "Artists",
    summary = "Create an artist",
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Artist listed", body = Notification),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
    )
)]
pub async fn create_artist(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<ArtistForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state.artists.create(ArtistDraft::from(form)).await?;
    let note = Notification::listed(EntityKind::Artist, &artist.details.name, artist.id.get());
    Ok((StatusCode::CREATED, Json(note)))
}

/// `GET /artists/{id}/edit` — Artist form prefilled with current values.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Edit artist form",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 200, description = "Prefilled form", body = ArtistFormDocument),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn edit_artist_form(
    State(state): State<AppState>,
    IdPath(id): IdPath<ArtistId>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state.artists.get(id).await?;
    Ok(Json(ArtistFormDocument::prefilled(artist)))
}

/// `POST /artists/{id}/edit` — Overwrite an artist's fields.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] for an unknown id or
/// [`DirectoryError::Validation`] for an invalid submission.
#[utoipa::path(
    post,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Update an artist",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Artist updated", body = Notification),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn edit_artist(
    State(state): State<AppState>,
    IdPath(id): IdPath<ArtistId>,
    FormOrJson(form): FormOrJson<ArtistForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artist = state.artists.update(id, ArtistDraft::from(form)).await?;
    Ok(Json(Notification::updated(
        EntityKind::Artist,
        &artist.details.name,
        artist.id.get(),
    )))
}

/// `DELETE /artists/{id}` — Remove an artist and its shows.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
#[utoipa::path(
    delete,
    path = "/artists/{id}",
    tag = "Artists",
    summary = "Delete an artist",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 204, description = "Artist deleted (or already absent)"),
    )
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    IdPath(id): IdPath<ArtistId>,
) -> Result<impl IntoResponse, DirectoryError> {
    state.artists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Artist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/{id}", get(show_artist).delete(delete_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}
