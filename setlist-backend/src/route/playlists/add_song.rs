use axum::extract::{Path, State};
use axum::Json;
pub use setlist_api::playlists::add_song::{Body, Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let position = database
        .add_song(request.playlist_id, request.song_id, request.position.map(super::to_position))
        .await?;
    Ok(Response { position: super::from_position(position)? })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path(playlist_id): Path<Uuid>,
    Json(body): Json<Body>,
) -> Result<Json<Response>, Error> {
    handler(&database, (playlist_id, body).into()).await.map(Json)
}
