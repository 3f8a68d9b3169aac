use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
pub use setlist_api::playlists::reorder_songs::{Body, Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    database.reorder_songs(request.playlist_id, request.song_ids).await?;
    Ok(Response)
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path(playlist_id): Path<Uuid>,
    Json(body): Json<Body>,
) -> Result<StatusCode, Error> {
    handler(&database, (playlist_id, body).into()).await?;
    Ok(StatusCode::NO_CONTENT)
}
