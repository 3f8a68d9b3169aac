use axum::extract::{Path, State};
use axum::http::StatusCode;
use diesel::ExpressionMethods;
use diesel_async::RunQueryDsl;
pub use setlist_api::playlists::delete_playlist::{Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::orm::playlists;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let deleted = diesel::delete(playlists::table)
        .filter(playlists::id.eq(request.id))
        .execute(&mut database.get().await?)
        .await?;
    if deleted == 0 { Err(Error::PlaylistNotFound(request.id)) } else { Ok(Response) }
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    handler(&database, Request { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
