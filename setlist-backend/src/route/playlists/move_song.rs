use axum::extract::{Path, State};
use axum::Json;
pub use setlist_api::playlists::move_song::{Body, Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let position = database
        .move_song(request.playlist_id, request.song_id, super::to_position(request.position))
        .await?;
    Ok(Response { position: super::from_position(position)? })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path(ids): Path<(Uuid, Uuid)>,
    Json(body): Json<Body>,
) -> Result<Json<Response>, Error> {
    handler(&database, (ids, body).into()).await.map(Json)
}
