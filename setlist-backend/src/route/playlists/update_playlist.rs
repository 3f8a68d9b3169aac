use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
pub use setlist_api::playlists::update_playlist::{Body, Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::membership::Store;
use crate::orm::playlists;
use crate::orm::upsert::Update;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let playlist_id = request.playlist_id;
    let upsert = playlists::Upsert::from(&request.body);
    if upsert.is_empty() {
        if !database.get().await?.playlist_exists(playlist_id).await? {
            return Err(Error::PlaylistNotFound(playlist_id));
        }
    } else {
        upsert.update(database, playlist_id).await?;
    }
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
