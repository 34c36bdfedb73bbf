//! Directory listing and file content handler.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use explorer_core::types::{ContentFormat, ListingResponse};

use crate::dto::request::FilesQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /files
/// GET /files?file_path=...&content_type=html|text
///
/// With a `file_path` this returns the file's decoded content or 404;
/// without one it returns the listing of every configured root.
pub async fn files(
    State(state): State<AppState>,
    Query(query): Query<FilesQuery>,
) -> Result<Response, ApiError> {
    if let Some(file_path) = query.requested_file() {
        let format = ContentFormat::from_query(query.content_type.as_deref());
        let content = state
            .content_resolver
            .read_file_content(file_path, format)
            .await?;
        return Ok(Json(content).into_response());
    }

    let roots = state
        .tree_builder
        .build_all(&state.config.explorer.roots)
        .await;
    let listing =
        ListingResponse::from_roots(roots, state.config.explorer.listing.group_by_label);

    Ok(Json(listing).into_response())
}
