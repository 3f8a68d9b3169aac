use axum::extract::{Path, State};
use axum::http::StatusCode;
pub use setlist_api::playlists::remove_song::{Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    database.remove_song(request.playlist_id, request.song_id).await?;
    Ok(Response)
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path((playlist_id, song_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, Error> {
    handler(&database, Request { playlist_id, song_id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
